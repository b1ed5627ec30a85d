//! Dense 2D convolution with reflective borders.

use ndarray::{Array2, ArrayView2};

use super::core::reflect_index;
use crate::error::{CannyError, Result};

/// Convolve a single-channel image with an odd-sized kernel.
///
/// This is a true convolution: the kernel is flipped, so
/// `out[y, x] = Σ k[a, b] · img[y + c - a, x + c - b]` with `c = k / 2`
/// (matches `scipy.ndimage.convolve`). Out-of-range samples are taken by
/// half-sample reflection, so every output pixel sees the full kernel.
///
/// # Arguments
/// * `image` - Input image (rows, cols), non-empty
/// * `kernel` - Square or rectangular kernel with odd side lengths
///
/// # Returns
/// New image with the same shape as `image`
pub fn convolve_2d(image: ArrayView2<f64>, kernel: ArrayView2<f64>) -> Result<Array2<f64>> {
    let (height, width) = image.dim();
    let (k_rows, k_cols) = kernel.dim();

    if height == 0 || width == 0 {
        return Err(CannyError::InvalidInput(format!(
            "cannot convolve an empty image ({height}x{width})"
        )));
    }
    if k_rows % 2 == 0 || k_cols % 2 == 0 {
        return Err(CannyError::InvalidConfig(format!(
            "kernel sides must be odd, got {k_rows}x{k_cols}"
        )));
    }

    let cy = (k_rows / 2) as isize;
    let cx = (k_cols / 2) as isize;

    // Reflected source indices only depend on (pixel, tap), so resolve them
    // once per axis instead of once per multiply.
    let row_taps: Vec<Vec<usize>> = (0..height)
        .map(|y| {
            (0..k_rows)
                .map(|a| reflect_index(y as isize + cy - a as isize, height))
                .collect()
        })
        .collect();
    let col_taps: Vec<Vec<usize>> = (0..width)
        .map(|x| {
            (0..k_cols)
                .map(|b| reflect_index(x as isize + cx - b as isize, width))
                .collect()
        })
        .collect();

    let mut output = Array2::<f64>::zeros((height, width));
    for (y, rows) in row_taps.iter().enumerate() {
        for (x, cols) in col_taps.iter().enumerate() {
            let mut sum = 0.0f64;
            for (a, &sy) in rows.iter().enumerate() {
                for (b, &sx) in cols.iter().enumerate() {
                    sum += kernel[[a, b]] * image[[sy, sx]];
                }
            }
            output[[y, x]] = sum;
        }
    }

    Ok(output)
}
