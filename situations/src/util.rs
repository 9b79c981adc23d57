use ndarray::Array2;
use onn::{BuildParams, Network, OnnResult};

/// One node per rate, each at rest at position 1 in layer 0.
pub fn single_rates(rates: &[f64], params: &BuildParams) -> OnnResult<Network> {
    let table = Array2::from_shape_fn((rates.len(), 3), |(i, j)| match j {
        0 => 1.,
        1 => rates[i],
        _ => 0.,
    });
    let connections = Array2::zeros((rates.len(), rates.len()));

    Network::new(table.view(), connections.view(), 0, 0, params)
}

pub fn report(name: &str, network: &Network) {
    println!(
        "{}) {} nodes, t_step {:.6}, {} steps, horizon {:.4}",
        name,
        network.nodes().len(),
        network.step_size(),
        network.num_steps(),
        network.step_size() * network.num_steps() as f64
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_node_per_rate() {
        let network = single_rates(&[1., 4., 9.], &BuildParams::default()).unwrap();

        assert_eq!(network.nodes().len(), 3);
        assert!(network.nodes().iter().all(|n| n.layer() == 0));
        assert!(network.connections().iter().all(|w| *w == 0.));
    }
}
