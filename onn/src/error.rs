use thiserror::Error;

/// Everything that can stop a network from being built.
///
/// Allocation failure is not listed: running out of memory aborts the
/// process, construction either fully succeeds or does not happen.
#[derive(Error, Debug)]
pub enum OnnError {
    /// The node table has no rows, so there is no frequency to size against.
    #[error("node table is empty")]
    EmptyNodeTable,

    /// A node row needs a state component, the rate in column 1 and a trailing layer tag.
    #[error("node rows must have at least 3 columns, got {width}")]
    RowTooNarrow { width: usize },

    /// Rates must be finite and strictly positive.
    #[error("node {row} has rate {value}, expected a finite value > 0")]
    NonPositiveRate { row: usize, value: f64 },

    #[error("{name} must be finite and > 0, got {value}")]
    InvalidParam { name: &'static str, value: f64 },

    /// The layer tag is NaN, infinite or outside the `i32` range.
    #[error("node {row} has layer tag {value}, expected a finite value within i32 range")]
    InvalidLayerTag { row: usize, value: f64 },

    /// The step size underflowed to zero or overflowed to infinity.
    #[error("min tau {min_tau} x t_step_param {t_step_param} is not a finite step > 0")]
    DegenerateStep { min_tau: f64, t_step_param: f64 },

    /// The horizon rounded down to zero steps or overflowed.
    #[error("max period {max_period} x num_evals_param {num_evals_param} is not a positive finite step count")]
    DegenerateHorizon { max_period: f64, num_evals_param: f64 },

    #[error("{table} row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        table: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OnnResult<T> = Result<T, OnnError>;
