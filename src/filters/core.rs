//! Core utilities shared by the convolution-based filters:
//! - Gaussian kernel generation
//! - Border index mapping for reflective padding

use ndarray::Array2;

use crate::error::{CannyError, Result};

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Generate a square 2D Gaussian kernel.
///
/// `kernel[y, x] = exp(-(dx² + dy²) / (2σ²)) / (2πσ²)` for offsets
/// `dx, dy` in `-(size / 2)..=size / 2`.
///
/// The kernel is **not** renormalized to sum to 1, so smoothing scales the
/// overall brightness slightly. Later stages are ratio based.
///
/// # Arguments
/// * `size` - Side length, must be odd and positive
/// * `sigma` - Standard deviation, must be finite and positive
///
/// # Returns
/// `size × size` kernel centered at `[size / 2, size / 2]`
pub fn gaussian_kernel(size: usize, sigma: f64) -> Result<Array2<f64>> {
    if size == 0 || size % 2 == 0 {
        return Err(CannyError::InvalidConfig(format!(
            "kernel_size must be a positive odd integer, got {size}"
        )));
    }
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(CannyError::InvalidConfig(format!(
            "sigma must be positive, got {sigma}"
        )));
    }

    let half = (size / 2) as f64;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let normal = 1.0 / (std::f64::consts::PI * two_sigma_sq);

    Ok(Array2::from_shape_fn((size, size), |(row, col)| {
        let y = row as f64 - half;
        let x = col as f64 - half;
        (-(x * x + y * y) / two_sigma_sq).exp() * normal
    }))
}

// ============================================================================
// Border Handling
// ============================================================================

/// Map a possibly out-of-range index into `0..len` by half-sample
/// reflection: `(d c b a | a b c d | d c b a)`.
///
/// Matches `scipy.ndimage` 'reflect' mode. The mapping is periodic with
/// period `2 * len`, so offsets larger than the image are still valid.
///
/// `len` must be non-zero.
#[inline]
pub fn reflect_index(i: isize, len: usize) -> usize {
    let n = len as isize;
    let m = i.rem_euclid(2 * n);
    if m < n {
        m as usize
    } else {
        (2 * n - 1 - m) as usize
    }
}
