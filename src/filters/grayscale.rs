//! RGB to single-channel intensity conversion.
//!
//! Uses the ITU-R BT.601 luma weights `0.2989 R + 0.5870 G + 0.1140 B`.
//!
//! ## Supported Formats
//!
//! Input arrays have shape (height, width, channels):
//! - **Grayscale**: 1 channel, copied through
//! - **RGB**: 3 channels
//! - **RGBA**: 4 channels, alpha ignored
//!
//! Output is a 2D `f64` image on the same scale as the input
//! (0-255 for u8, unchanged for f64).

use ndarray::{Array2, ArrayView3};

/// BT.601 luma coefficients
pub const LUMA_R: f64 = 0.2989;
pub const LUMA_G: f64 = 0.5870;
pub const LUMA_B: f64 = 0.1140;

#[inline]
fn luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

// ============================================================================
// 8-bit (u8) Implementation
// ============================================================================

/// Convert a u8 image with 1, 3 or 4 channels to gray intensities.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, channels), values 0-255
///
/// # Returns
/// 2D intensity image, values 0.0-255.0
pub fn rgb_to_gray_u8(input: ArrayView3<u8>) -> Array2<f64> {
    let (height, width, channels) = input.dim();
    Array2::from_shape_fn((height, width), |(y, x)| {
        if channels < 3 {
            f64::from(input[[y, x, 0]])
        } else {
            luma(
                f64::from(input[[y, x, 0]]),
                f64::from(input[[y, x, 1]]),
                f64::from(input[[y, x, 2]]),
            )
        }
    })
}

// ============================================================================
// Float (f64) Implementation
// ============================================================================

/// Convert a float image with 1, 3 or 4 channels to gray intensities.
pub fn rgb_to_gray_f64(input: ArrayView3<f64>) -> Array2<f64> {
    let (height, width, channels) = input.dim();
    Array2::from_shape_fn((height, width), |(y, x)| {
        if channels < 3 {
            input[[y, x, 0]]
        } else {
            luma(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
        }
    })
}
