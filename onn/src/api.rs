use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub layer: i32,
    pub nodes: usize,
}

/// What a built network looks like to anything downstream of construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    pub num_inputs: usize,
    pub num_outputs: usize,
    pub num_nodes: usize,

    pub t_step: f64,
    pub num_steps: usize,
    pub curr_step: usize,
    pub curr_time: f64,

    pub connections_shape: (usize, usize),
    pub layers: Vec<LayerSummary>,
}
