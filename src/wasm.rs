//! WebAssembly exports for the edge detector.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images cross
//! the boundary as flat row-major buffers plus their dimensions.

use ndarray::{Array2, Array3};
use wasm_bindgen::prelude::*;

use crate::canny::{CannyDetector, CannyParams, HysteresisMode};
use crate::filters::grayscale::rgb_to_gray_u8;

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Grayscale Conversion
// ============================================================================

/// Convert RGBA u8 pixels to gray intensities (0-255 scale).
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat row-major array of `width * height` gray values
#[wasm_bindgen]
pub fn rgba_to_gray_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<f64>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec()).map_err(js_err)?;
    Ok(rgb_to_gray_u8(input.view()).into_raw_vec_and_offset().0)
}

// ============================================================================
// Canny Edge Detection
// ============================================================================

/// Run Canny edge detection on a flat gray image.
///
/// # Arguments
/// * `data` - Flat row-major gray values (length = width * height)
/// * `width`, `height` - Image dimensions
/// * `sigma`, `kernel_size` - Gaussian smoothing parameters
/// * `weak_pixel`, `strong_pixel` - Output labels
/// * `low_threshold`, `high_threshold` - Threshold ratios
/// * `connected` - Flood-fill hysteresis instead of a single sweep
///
/// # Returns
/// Flat row-major label array, or an error string for invalid input
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn canny_wasm(
    data: &[f64],
    width: usize,
    height: usize,
    sigma: f64,
    kernel_size: usize,
    weak_pixel: i32,
    strong_pixel: i32,
    low_threshold: f64,
    high_threshold: f64,
    connected: bool,
) -> Result<Vec<i32>, JsValue> {
    let params = CannyParams {
        sigma,
        kernel_size,
        weak_pixel,
        strong_pixel,
        low_threshold,
        high_threshold,
        hysteresis: if connected {
            HysteresisMode::Connected
        } else {
            HysteresisMode::SinglePass
        },
    };
    let detector = CannyDetector::new(params).map_err(js_err)?;
    let image = Array2::from_shape_vec((height, width), data.to_vec()).map_err(js_err)?;
    let edges = detector.detect(image.view()).map_err(js_err)?;
    Ok(edges.into_raw_vec_and_offset().0)
}
