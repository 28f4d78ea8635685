use thiserror::Error;

pub type Result<T> = std::result::Result<T, LossError>;

/// Errors raised by the weighted losses and their config surface.
///
/// Every loss call either returns a scalar or fails with one of these before
/// any reduction happens; partial results are never produced.
#[derive(Error, Debug)]
pub enum LossError {
    /// Compared arrays differ in shape, or the label length is not the batch size.
    #[error("{what} shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("batch is empty")]
    EmptyBatch,

    #[error("weight `{name}` must be finite, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("array layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),
}

impl LossError {
    pub(crate) fn shape(what: &'static str, expected: &[usize], found: &[usize]) -> Self {
        LossError::ShapeMismatch {
            what,
            expected: expected.to_vec(),
            found: found.to_vec(),
        }
    }
}
