//! Canny edge detection.
//!
//! ## Pipeline
//!
//! 1. Gaussian smoothing ([`smooth`])
//! 2. Sobel gradients, max-normalized to 255 ([`sobel_gradients`])
//! 3. Non-maximum suppression ([`non_max_suppression`])
//! 4. Double threshold ([`double_threshold`])
//! 5. Hysteresis ([`hysteresis`] or [`hysteresis_connected`])
//!
//! Stages run strictly in order and each returns a fresh array of the input
//! shape, except hysteresis which relabels the thresholded image it owns.
//! The output holds only `0`, `weak_pixel` (possible on the untouched outer
//! ring) and `strong_pixel`.

pub mod hysteresis;
pub mod nms;
pub mod params;
pub mod threshold;

use ndarray::{Array2, ArrayView2, ArrayViewD, Ix2};
use rayon::prelude::*;

use crate::error::{CannyError, Result};
use crate::filters::edge::{smooth, sobel_gradients, GradientField};

pub use hysteresis::{hysteresis, hysteresis_connected, HysteresisMode};
pub use nms::{non_max_suppression, Sector};
pub use params::CannyParams;
pub use threshold::double_threshold;

/// Every intermediate result of one detection run.
#[derive(Clone, Debug, PartialEq)]
pub struct StageTrace {
    pub smoothed: Array2<f64>,
    pub gradient: GradientField,
    pub suppressed: Array2<i32>,
    pub thresholded: Array2<i32>,
    pub edges: Array2<i32>,
}

impl StageTrace {
    /// Stage name and image, in pipeline order, with magnitudes and labels
    /// widened to `f64` for rendering.
    pub fn stages(&self) -> Vec<(&'static str, Array2<f64>)> {
        vec![
            ("smoothed", self.smoothed.clone()),
            ("gradient", self.gradient.magnitude.clone()),
            ("orientation", self.gradient.orientation.clone()),
            ("suppressed", self.suppressed.mapv(f64::from)),
            ("thresholded", self.thresholded.mapv(f64::from)),
            ("edges", self.edges.mapv(f64::from)),
        ]
    }
}

/// View a dynamically shaped array as a 2D image.
///
/// Fails with [`CannyError::InvalidInput`] when the array is not
/// 2-dimensional or has no rows or columns.
pub fn as_image(array: ArrayViewD<'_, f64>) -> Result<ArrayView2<'_, f64>> {
    let ndim = array.ndim();
    let image = array.into_dimensionality::<Ix2>().map_err(|_| {
        CannyError::InvalidInput(format!("expected a 2-dimensional image, got {ndim} dimensions"))
    })?;
    check_image(image)?;
    Ok(image)
}

fn check_image(image: ArrayView2<f64>) -> Result<()> {
    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return Err(CannyError::InvalidInput(format!(
            "image has no pixels ({height}x{width})"
        )));
    }
    Ok(())
}

/// Canny edge detector with validated, immutable parameters.
#[derive(Clone, Debug)]
pub struct CannyDetector {
    params: CannyParams,
}

impl CannyDetector {
    /// Create a detector; invalid parameters are rejected here.
    pub fn new(params: CannyParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Run the full pipeline and return the labeled edge map.
    ///
    /// Intermediate buffers are dropped as soon as the next stage has
    /// consumed them.
    pub fn detect(&self, image: ArrayView2<f64>) -> Result<Array2<i32>> {
        check_image(image)?;
        let p = &self.params;

        let smoothed = smooth(image, p.kernel_size, p.sigma)?;
        let gradient = sobel_gradients(smoothed.view())?;
        drop(smoothed);
        let suppressed =
            non_max_suppression(gradient.magnitude.view(), gradient.orientation.view())?;
        drop(gradient);
        let thresholded = self.threshold(&suppressed);
        drop(suppressed);
        let edges = self.link(thresholded);

        log::debug!(
            "detected {} edge pixels in {}x{} image",
            count_label(&edges, p.strong_pixel),
            image.nrows(),
            image.ncols()
        );
        Ok(edges)
    }

    /// Run the full pipeline and keep every intermediate stage.
    pub fn detect_with_trace(&self, image: ArrayView2<f64>) -> Result<StageTrace> {
        check_image(image)?;
        let p = &self.params;

        let smoothed = smooth(image, p.kernel_size, p.sigma)?;
        log::debug!(
            "smoothed {}x{} image (kernel_size={}, sigma={})",
            image.nrows(),
            image.ncols(),
            p.kernel_size,
            p.sigma
        );

        let gradient = sobel_gradients(smoothed.view())?;

        let suppressed =
            non_max_suppression(gradient.magnitude.view(), gradient.orientation.view())?;
        log::debug!(
            "non-max suppression kept {} ridge pixels",
            suppressed.iter().filter(|&&v| v > 0).count()
        );

        let thresholded = self.threshold(&suppressed);
        log::debug!(
            "double threshold: {} strong, {} weak",
            count_label(&thresholded, p.strong_pixel),
            count_label(&thresholded, p.weak_pixel)
        );

        let edges = self.link(thresholded.clone());
        log::debug!("hysteresis kept {} edge pixels", count_label(&edges, p.strong_pixel));

        Ok(StageTrace {
            smoothed,
            gradient,
            suppressed,
            thresholded,
            edges,
        })
    }

    /// Detect edges in every image of a batch.
    ///
    /// Images are processed in parallel, one task per image; results come
    /// back in input order. The first failing image aborts the batch.
    pub fn detect_batch(&self, images: &[Array2<f64>]) -> Result<Vec<Array2<i32>>> {
        log::info!("running edge detection on {} image(s)", images.len());
        images
            .par_iter()
            .map(|image| self.detect(image.view()))
            .collect()
    }

    fn threshold(&self, suppressed: &Array2<i32>) -> Array2<i32> {
        let p = &self.params;
        double_threshold(
            suppressed.view(),
            p.low_threshold,
            p.high_threshold,
            p.weak_pixel,
            p.strong_pixel,
        )
    }

    fn link(&self, thresholded: Array2<i32>) -> Array2<i32> {
        let p = &self.params;
        match p.hysteresis {
            HysteresisMode::SinglePass => hysteresis(thresholded, p.weak_pixel, p.strong_pixel),
            HysteresisMode::Connected => {
                hysteresis_connected(thresholded, p.weak_pixel, p.strong_pixel)
            }
        }
    }
}

fn count_label(image: &Array2<i32>, label: i32) -> usize {
    image.iter().filter(|&&v| v == label).count()
}
