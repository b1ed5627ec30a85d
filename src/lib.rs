//! Canny Edge Detection
//!
//! Classic five-stage Canny edge detector on single-channel images,
//! with optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! - **Input**: `ndarray::Array2<f64>` of shape (rows, cols), any intensity
//!   scale (thresholds are relative to the image's own gradient maximum)
//! - **Output**: `ndarray::Array2<i32>` labeled `0`, `weak_pixel` or
//!   `strong_pixel` (defaults 75 and 255)
//!
//! ## Example
//! ```
//! use canny_edge::{CannyDetector, CannyParams};
//! use ndarray::Array2;
//!
//! let image = Array2::from_shape_fn((10, 10), |(_, x)| {
//!     if (3..7).contains(&x) { 255.0 } else { 0.0 }
//! });
//! let detector = CannyDetector::new(CannyParams::default()).unwrap();
//! let edges = detector.detect(image.view()).unwrap();
//! assert_eq!(edges.dim(), (10, 10));
//! ```
//!
//! ## Features
//! - `io` (default): directory loading, grayscale conversion and PNG saving
//! - `cli` (default): the `canny` command-line tool
//! - `python`: PyO3 extension module
//! - `wasm`: wasm-bindgen exports

pub mod canny;
pub mod error;
pub mod filters;

#[cfg(feature = "io")]
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use canny::{as_image, CannyDetector, CannyParams, HysteresisMode, StageTrace};
pub use error::{CannyError, Result};
pub use filters::convolve::convolve_2d;
pub use filters::core::gaussian_kernel;
pub use filters::edge::GradientField;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArrayDyn};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::canny::{as_image, CannyDetector, CannyParams, HysteresisMode};
    use crate::error::CannyError;
    use crate::filters::core;

    fn to_py_err(err: CannyError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Run Canny edge detection on a 2D float image.
    ///
    /// # Arguments
    /// * `image` - 2D array (rows, cols) of intensities
    /// * `sigma` - Gaussian sigma (default: 1.0)
    /// * `kernel_size` - Odd Gaussian kernel size (default: 5)
    /// * `weak_pixel` - Label for weak edges (default: 75)
    /// * `strong_pixel` - Label for strong edges (default: 255)
    /// * `low_threshold` - Low ratio, relative to the high threshold (default: 0.05)
    /// * `high_threshold` - High ratio, relative to the magnitude max (default: 0.15)
    /// * `connected` - Use flood-fill hysteresis instead of a single sweep
    #[pyfunction]
    #[pyo3(signature = (
        image,
        sigma=1.0,
        kernel_size=5,
        weak_pixel=75,
        strong_pixel=255,
        low_threshold=0.05,
        high_threshold=0.15,
        connected=false,
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn canny_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArrayDyn<'py, f64>,
        sigma: f64,
        kernel_size: usize,
        weak_pixel: i32,
        strong_pixel: i32,
        low_threshold: f64,
        high_threshold: f64,
        connected: bool,
    ) -> PyResult<Bound<'py, PyArray2<i32>>> {
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
        let detector = CannyDetector::new(params).map_err(to_py_err)?;
        let view = as_image(image.as_array()).map_err(to_py_err)?;
        let edges = detector.detect(view).map_err(to_py_err)?;
        Ok(edges.into_pyarray(py))
    }

    /// Build the unnormalized 2D Gaussian kernel used for smoothing.
    #[pyfunction]
    #[pyo3(signature = (size=5, sigma=1.0))]
    pub fn gaussian_kernel<'py>(
        py: Python<'py>,
        size: usize,
        sigma: f64,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let kernel = core::gaussian_kernel(size, sigma).map_err(to_py_err)?;
        Ok(kernel.into_pyarray(py))
    }

    /// Canny edge detection extension module
    #[pymodule]
    pub fn canny_edge(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(canny_edges, m)?)?;
        m.add_function(wrap_pyfunction!(gaussian_kernel, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::canny_edge;
