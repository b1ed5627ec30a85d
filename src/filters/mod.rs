//! Filter building blocks for the edge detector.
//!
//! All filters work on single-channel `f64` images stored as
//! `ndarray::Array2` in (rows, cols) order. Every filter returns a new
//! array of the same shape as its input.
//!
//! ## Modules
//!
//! - **core**: Gaussian kernel generation, reflective border indexing
//! - **convolve**: dense 2D convolution with reflective padding
//! - **edge**: Gaussian smoothing and Sobel gradients
//! - **grayscale**: RGB(A) to intensity conversion for loaded images

pub mod core;
pub mod convolve;
pub mod edge;
pub mod grayscale;
