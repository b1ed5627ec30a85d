//! Smoothing and gradient stages of the Canny pipeline.
//!
//! Both stages are thin compositions over [`convolve_2d`]:
//! - **Smoothing**: convolution with the unnormalized Gaussian kernel
//! - **Gradient**: Sobel derivatives, max-normalized magnitude and
//!   orientation in radians
//!
//! Borders use reflective padding, so border pixels carry real magnitudes.

use std::f64::consts::PI;

use ndarray::{Array2, ArrayView2, Zip};

use super::convolve::convolve_2d;
use super::core::gaussian_kernel;
use crate::error::Result;

/// Horizontal derivative kernel (responds to vertical edges).
pub const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical derivative kernel (responds to horizontal edges).
pub const SOBEL_Y: [[f64; 3]; 3] = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Peak value of the normalized gradient magnitude.
pub const MAGNITUDE_SCALE: f64 = 255.0;

/// Gradient magnitude and orientation of one image.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    /// Non-negative, max-normalized to [`MAGNITUDE_SCALE`]
    pub magnitude: Array2<f64>,
    /// Radians, range (-π, π]
    pub orientation: Array2<f64>,
}

// ============================================================================
// Smoothing
// ============================================================================

/// Smooth an image with a `kernel_size × kernel_size` Gaussian.
pub fn smooth(image: ArrayView2<f64>, kernel_size: usize, sigma: f64) -> Result<Array2<f64>> {
    let kernel = gaussian_kernel(kernel_size, sigma)?;
    convolve_2d(image, kernel.view())
}

// ============================================================================
// Sobel Gradients
// ============================================================================

fn kernel3(k: &[[f64; 3]; 3]) -> Array2<f64> {
    Array2::from_shape_fn((3, 3), |(y, x)| k[y][x])
}

/// Compute Sobel gradients of a (smoothed) image.
///
/// `magnitude = hypot(Ix, Iy) / max · 255` and `orientation = atan2(Iy, Ix)`.
/// A constant image has `max == 0`; its magnitude is all zero rather than a
/// division by zero.
pub fn sobel_gradients(image: ArrayView2<f64>) -> Result<GradientField> {
    let ix = convolve_2d(image, kernel3(&SOBEL_X).view())?;
    let iy = convolve_2d(image, kernel3(&SOBEL_Y).view())?;

    let mut magnitude = Zip::from(&ix).and(&iy).map_collect(|&gx, &gy| gx.hypot(gy));
    let orientation = Zip::from(&ix).and(&iy).map_collect(|&gx, &gy| {
        // atan2(-0.0, x < 0) yields -π; fold it onto π to keep the range half-open.
        let theta = gy.atan2(gx);
        if theta == -PI { PI } else { theta }
    });

    let max = magnitude.iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 {
        magnitude.mapv_inplace(|g| g / max * MAGNITUDE_SCALE);
    } else {
        log::warn!(
            "gradient magnitude is zero everywhere ({}x{} constant image)",
            magnitude.nrows(),
            magnitude.ncols()
        );
        magnitude.fill(0.0);
    }

    Ok(GradientField {
        magnitude,
        orientation,
    })
}
