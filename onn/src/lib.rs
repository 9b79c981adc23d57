pub mod api;
pub mod config;
pub mod error;
pub mod network;
pub mod node;

pub use config::{BuildParams, Config, DEFAULT_NUM_EVALS_PARAM, DEFAULT_T_STEP_PARAM};
pub use error::{OnnError, OnnResult};
pub use network::{Network, Sizing};
pub use node::Node;
