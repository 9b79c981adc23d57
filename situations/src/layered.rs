use ndarray::{array, Array2};
use onn::{BuildParams, Network, OnnResult};

use crate::util::report;

/// Input, hidden and output layers fully connected front to back.
pub fn layered() -> OnnResult<Network> {
    let table = array![
        [1.0, 1.0, 0.0, 0.0],
        [-1.0, 2.0, 0.0, 0.0],
        [0.0, 3.0, 0.5, 1.0],
        [0.0, 5.0, -0.5, 1.0],
        [0.0, 8.0, 0.0, 1.0],
        [0.0, 0.75, 0.0, 2.0],
    ];
    let layers = table.column(3).to_owned();

    let size = table.nrows();
    let connections = Array2::from_shape_fn((size, size), |(to, from)| {
        if layers[to] == layers[from] + 1. {
            0.5
        } else {
            0.
        }
    });

    let network = Network::new(
        table.view(),
        connections.view(),
        2,
        1,
        &BuildParams::default(),
    )?;

    report("layered", &network);
    for (layer, count) in network.layers() {
        println!("  layer {}: {} nodes", layer, count);
    }

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_each_layer_to_the_next() {
        let network = layered().unwrap();
        let conns = network.connections();

        assert_eq!(network.layers(), vec![(0, 2), (1, 3), (2, 1)]);
        assert_eq!(conns[[2, 0]], 0.5);
        assert_eq!(conns[[5, 4]], 0.5);
        assert_eq!(conns[[0, 2]], 0.);
        assert_eq!(conns[[5, 0]], 0.);
    }
}
