use onn::Config;

pub fn main() {
    tracing_subscriber::fmt().init();

    let config = Config::new();
    let network = match config.build() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("(onn example) failed to build sample network: {}", e);
            return;
        }
    };

    println!(
        "(onn example) {} nodes, t_step {:.4}, {} steps",
        network.nodes().len(),
        network.step_size(),
        network.num_steps()
    );

    for (layer, count) in network.layers() {
        println!("(onn example) layer {}: {} nodes", layer, count);
        for (ix, node) in network.nodes_in_layer(layer) {
            println!(
                "(onn example)   node {} initial state {}",
                ix,
                node.initial_state()
            );
        }
    }
}
