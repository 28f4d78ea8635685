use crate::error::{LossError, Result};

/// Validates a loss call and returns the batch size `N`.
///
/// `input` and `target` must have identical shapes with at least one (batch)
/// axis, and `label_len` must equal that batch axis.
pub(crate) fn batch_size(input: &[usize], target: &[usize], label_len: usize) -> Result<usize> {
    if input != target {
        return Err(LossError::shape("target", input, target));
    }
    let n = *input
        .first()
        .ok_or_else(|| LossError::shape("input", &[0], input))?;
    if label_len != n {
        return Err(LossError::shape("label", &[n], &[label_len]));
    }
    if n == 0 {
        return Err(LossError::EmptyBatch);
    }
    Ok(n)
}
