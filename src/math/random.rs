use std::f64::consts::PI;

use ndarray::{Array1, ArrayD, ErrorKind, IxDyn, ShapeError};
use rand::Rng;

use crate::error::Result;

/// Samples a single value from N(0, 1) using the Box-Muller transform.
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Draw two independent uniform samples in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Standard-normal array of the given shape, row-major.
pub fn randn<R: Rng + ?Sized>(rng: &mut R, shape: &[usize]) -> Result<ArrayD<f64>> {
    let len = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or_else(|| ShapeError::from_kind(ErrorKind::Overflow))?;
    let data = (0..len).map(|_| sample_standard_normal(rng)).collect();
    Ok(ArrayD::from_shape_vec(IxDyn(shape), data)?)
}

/// `n` labels drawn uniformly from {0, 1}.
pub fn random_labels<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array1<f64> {
    (0..n).map(|_| rng.gen_range(0..2) as f64).collect()
}
