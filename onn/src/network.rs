use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::{collections::BTreeMap, f64::consts::FRAC_PI_2};
use tracing::{debug, warn};

use crate::{
    api::{LayerSummary, NetworkSummary},
    config::BuildParams,
    error::{OnnError, OnnResult},
    node::Node,
};

/// Column of a node row that holds the rate `a` in `x'' = -a x`.
pub const RATE_COLUMN: usize = 1;

/// Step size and horizon derived from a set of node rates.
///
/// Each node's characteristic time is a quarter of its period,
/// `tau = (pi / 2) / sqrt(a)`. The fastest node bounds the step size and the
/// slowest node bounds the horizon.
#[derive(Debug, Clone)]
pub struct Sizing {
    pub omegas: Array1<f64>,
    pub taus: Array1<f64>,
    pub min_tau: f64,
    pub max_period: f64,
    pub t_step: f64,
    pub num_steps: usize,
}

impl Sizing {
    pub fn from_rates(rates: ArrayView1<f64>, params: &BuildParams) -> OnnResult<Sizing> {
        params.validate()?;

        if rates.is_empty() {
            return Err(OnnError::EmptyNodeTable);
        }

        if let Some((row, value)) = rates
            .iter()
            .enumerate()
            .find(|(_, a)| !a.is_finite() || **a <= 0.)
        {
            return Err(OnnError::NonPositiveRate { row, value: *value });
        }

        let omegas = rates.mapv(f64::sqrt);
        let taus = omegas.mapv(|omega| FRAC_PI_2 / omega);

        let min_tau = taus.iter().fold(f64::MAX, |a, v| f64::min(a, *v));
        let max_period = (&taus * 2.).iter().fold(f64::MIN, |a, v| f64::max(a, *v));

        let t_step = params.t_step_param * min_tau;
        if !t_step.is_finite() || t_step <= 0. {
            return Err(OnnError::DegenerateStep {
                min_tau,
                t_step_param: params.t_step_param,
            });
        }

        let horizon = (max_period * params.num_evals_param).round();
        if !horizon.is_finite() || horizon < 1. {
            return Err(OnnError::DegenerateHorizon {
                max_period,
                num_evals_param: params.num_evals_param,
            });
        }

        Ok(Sizing {
            omegas,
            taus,
            min_tau,
            max_period,
            t_step,
            num_steps: horizon as usize,
        })
    }
}

/// Tags must truncate to an `i32` without saturating.
fn is_layer_tag(tag: f64) -> bool {
    tag.is_finite() && tag.trunc() >= i32::MIN as f64 && tag.trunc() <= i32::MAX as f64
}

/// A network of harmonic oscillators, sized and allocated but not yet stepped.
#[derive(Debug, Clone)]
pub struct Network {
    num_inputs: usize,
    num_outputs: usize,

    curr_step: usize,
    curr_time: f64,
    t_step: f64,
    num_steps: usize,

    nodes: Vec<Node>,
    connections: Array2<f64>,
}

impl Network {
    /// Builds a network from a node table and a connection matrix.
    ///
    /// Rows of `node_table` are `[state..., tag]`, with column 1 read as the
    /// node's rate. `connections` is copied, the caller keeps its buffer.
    pub fn new(
        node_table: ArrayView2<f64>,
        connections: ArrayView2<f64>,
        num_inputs: usize,
        num_outputs: usize,
        params: &BuildParams,
    ) -> OnnResult<Network> {
        let (size, width) = node_table.dim();

        if size == 0 {
            return Err(OnnError::EmptyNodeTable);
        }
        if width <= RATE_COLUMN + 1 {
            return Err(OnnError::RowTooNarrow { width });
        }

        if let Some((row, value)) = node_table
            .column(width - 1)
            .iter()
            .enumerate()
            .find(|(_, tag)| !is_layer_tag(**tag))
        {
            return Err(OnnError::InvalidLayerTag { row, value: *value });
        }

        let connections = connections.to_owned();

        let sizing = Sizing::from_rates(node_table.column(RATE_COLUMN), params)?;
        debug!(
            nodes = size,
            min_tau = sizing.min_tau,
            max_period = sizing.max_period,
            t_step = sizing.t_step,
            num_steps = sizing.num_steps,
            "(onn) sized network"
        );

        if connections.dim() != (size, size) {
            warn!(
                rows = connections.nrows(),
                cols = connections.ncols(),
                nodes = size,
                "(onn) connection matrix does not match node count"
            );
        }
        if num_inputs + num_outputs > size {
            warn!(
                num_inputs,
                num_outputs,
                nodes = size,
                "(onn) more inputs and outputs than nodes"
            );
        }

        let nodes = node_table
            .outer_iter()
            .map(|row| Node::new(row, sizing.num_steps))
            .collect::<Vec<Node>>();

        Ok(Network {
            num_inputs,
            num_outputs,

            curr_step: 0,
            curr_time: 0.,
            t_step: sizing.t_step,
            num_steps: sizing.num_steps,

            nodes,
            connections,
        })
    }

    pub fn current_step(&self) -> usize {
        self.curr_step
    }

    pub fn current_time(&self) -> f64 {
        self.curr_time
    }

    pub fn step_size(&self) -> f64 {
        self.t_step
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Nodes in the same order as the rows they were built from.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, ix: usize) -> Option<&Node> {
        self.nodes.get(ix)
    }

    pub fn connections(&self) -> ArrayView2<f64> {
        self.connections.view()
    }

    /// Distinct layer tags, ascending, with how many nodes carry each.
    pub fn layers(&self) -> Vec<(i32, usize)> {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for node in self.nodes.iter() {
            *counts.entry(node.layer()).or_insert(0) += 1;
        }

        counts.into_iter().collect::<Vec<(i32, usize)>>()
    }

    /// `(index, node)` pairs for every node tagged with `layer`, in row order.
    pub fn nodes_in_layer(&self, layer: i32) -> impl Iterator<Item = (usize, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.layer() == layer)
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            num_inputs: self.num_inputs,
            num_outputs: self.num_outputs,
            num_nodes: self.nodes.len(),
            t_step: self.t_step,
            num_steps: self.num_steps,
            curr_step: self.curr_step,
            curr_time: self.curr_time,
            connections_shape: self.connections.dim(),
            layers: self
                .layers()
                .into_iter()
                .map(|(layer, nodes)| LayerSummary { layer, nodes })
                .collect::<Vec<LayerSummary>>(),
        }
    }
}
