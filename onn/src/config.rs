use ndarray::Array2;
use ndarray_rand::{rand_distr::Uniform, RandomExt};
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    error::{OnnError, OnnResult},
    network::Network,
};

/// Fraction of the fastest node's quarter period used as the step size.
pub const DEFAULT_T_STEP_PARAM: f64 = 0.2;

/// Number of slowest-node periods the horizon covers.
pub const DEFAULT_NUM_EVALS_PARAM: f64 = 1.;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BuildParams {
    #[serde(default = "default_t_step_param")]
    pub t_step_param: f64,
    #[serde(default = "default_num_evals_param")]
    pub num_evals_param: f64,
}

fn default_t_step_param() -> f64 {
    DEFAULT_T_STEP_PARAM
}

fn default_num_evals_param() -> f64 {
    DEFAULT_NUM_EVALS_PARAM
}

impl Default for BuildParams {
    fn default() -> BuildParams {
        BuildParams {
            t_step_param: DEFAULT_T_STEP_PARAM,
            num_evals_param: DEFAULT_NUM_EVALS_PARAM,
        }
    }
}

impl BuildParams {
    pub fn new(t_step_param: f64, num_evals_param: f64) -> BuildParams {
        BuildParams {
            t_step_param,
            num_evals_param,
        }
    }

    pub fn validate(&self) -> OnnResult<()> {
        for (name, value) in [
            ("t_step_param", self.t_step_param),
            ("num_evals_param", self.num_evals_param),
        ] {
            if !value.is_finite() || value <= 0. {
                return Err(OnnError::InvalidParam { name, value });
            }
        }

        Ok(())
    }
}

/// A network description as stored on disk.
///
/// Each entry of `nodes` is `[state..., tag]` where column 1 doubles as the
/// node's rate `a` in `x'' = -a x`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub num_inputs: usize,
    pub num_outputs: usize,
    #[serde(default)]
    pub params: BuildParams,

    pub nodes: Vec<Vec<f64>>,
    pub connections: Vec<Vec<f64>>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> OnnResult<Config> {
        let config_bytes = fs::read(path)?;
        let config = serde_json::from_slice(&config_bytes)?;

        Ok(config)
    }

    /// Sample three-layer description: two inputs, three hidden, one output,
    /// with randomly drawn connection weights.
    pub fn new() -> Config {
        let num_inputs = 2;
        let num_outputs = 1;

        let nodes = vec![
            vec![1.0, 1.0, 0.0],
            vec![-1.0, 2.0, 0.0],
            vec![0.0, 4.0, 1.0],
            vec![0.5, 9.0, 1.0],
            vec![0.0, 16.0, 1.0],
            vec![0.0, 0.5, 2.0],
        ];

        let size = nodes.len();
        let bound = f64::sqrt(6.) / (num_inputs + num_outputs) as f64;
        let weights = Array2::random_using(
            (size, size),
            Uniform::new(-bound, bound),
            &mut thread_rng(),
        );

        Config {
            num_inputs,
            num_outputs,
            params: BuildParams::default(),
            nodes,
            connections: weights.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn dump(&self, path: impl AsRef<Path>) -> OnnResult<()> {
        let config_str = serde_json::to_string_pretty(&self)?;
        fs::write(path, config_str)?;

        Ok(())
    }

    pub fn node_table(&self) -> OnnResult<Array2<f64>> {
        to_matrix("nodes", &self.nodes)
    }

    pub fn connection_matrix(&self) -> OnnResult<Array2<f64>> {
        to_matrix("connections", &self.connections)
    }

    pub fn build(&self) -> OnnResult<Network> {
        let node_table = self.node_table()?;
        let connections = self.connection_matrix()?;

        Network::new(
            node_table.view(),
            connections.view(),
            self.num_inputs,
            self.num_outputs,
            &self.params,
        )
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

fn to_matrix(table: &'static str, rows: &[Vec<f64>]) -> OnnResult<Array2<f64>> {
    let ncols = rows.first().map(|r| r.len()).unwrap_or(0);

    if let Some((row, found)) = rows
        .iter()
        .map(|r| r.len())
        .enumerate()
        .find(|(_, len)| *len != ncols)
    {
        return Err(OnnError::RaggedRows {
            table,
            row,
            expected: ncols,
            found,
        });
    }

    Ok(Array2::from_shape_fn((rows.len(), ncols), |(i, j)| rows[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let params = BuildParams::default();
        assert_eq!(params.t_step_param, 0.2);
        assert_eq!(params.num_evals_param, 1.);
    }

    #[test]
    fn rejects_non_positive_params() {
        assert!(matches!(
            BuildParams::new(0., 1.).validate(),
            Err(OnnError::InvalidParam {
                name: "t_step_param",
                ..
            })
        ));
        assert!(matches!(
            BuildParams::new(0.2, f64::NAN).validate(),
            Err(OnnError::InvalidParam {
                name: "num_evals_param",
                ..
            })
        ));
        assert!(BuildParams::new(0.5, 3.).validate().is_ok());
    }

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let json = r#"{
            "num_inputs": 1,
            "num_outputs": 1,
            "nodes": [[0.0, 1.0, 0.0]],
            "connections": [[0.0]]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.params, BuildParams::default());

        let json = r#"{
            "num_inputs": 1,
            "num_outputs": 1,
            "params": { "t_step_param": 0.5 },
            "nodes": [[0.0, 1.0, 0.0]],
            "connections": [[0.0]]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.params, BuildParams::new(0.5, DEFAULT_NUM_EVALS_PARAM));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let mut config = Config::new();
        config.connections[3].pop();

        match config.connection_matrix() {
            Err(OnnError::RaggedRows {
                table,
                row,
                expected,
                found,
            }) => {
                assert_eq!(table, "connections");
                assert_eq!(row, 3);
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("expected ragged rows error, got {:?}", other),
        }
    }

    #[test]
    fn sample_weights_stay_in_bound() {
        let config = Config::new();
        let bound = f64::sqrt(6.) / 3.;
        let weights = config.connection_matrix().unwrap();

        assert_eq!(weights.dim(), (6, 6));
        assert!(weights.iter().all(|w| w.abs() <= bound));
    }

    #[test]
    fn dump_then_load_builds_same_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onn.cfg.json");

        let config = Config::new();
        config.dump(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.connection_matrix().unwrap(), config.connection_matrix().unwrap());

        let a = config.build().unwrap();
        let b = loaded.build().unwrap();
        assert_eq!(a.num_steps(), b.num_steps());
        assert_eq!(a.step_size(), b.step_size());
        assert_eq!(a.nodes().len(), 6);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("nope.json")),
            Err(OnnError::Io(_))
        ));
    }
}
