//! Non-maximum suppression: thin gradient ridges to single-pixel width.

use ndarray::{Array2, ArrayView2};

use crate::error::{CannyError, Result};

/// Gradient direction bucket, 45° wide, over angles folded into `[0, 180]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sector {
    /// [0, 22.5) ∪ [157.5, 180]: compare left/right
    Horizontal,
    /// [22.5, 67.5): compare down-left/up-right
    Diagonal45,
    /// [67.5, 112.5): compare up/down
    Vertical,
    /// [112.5, 157.5): compare up-left/down-right
    Diagonal135,
}

impl Sector {
    /// Bucket an orientation given in radians.
    ///
    /// Negative angles are shifted by 180° first, which folds opposite
    /// gradient directions onto the same sector.
    pub fn from_radians(theta: f64) -> Self {
        let mut angle = theta.to_degrees();
        if angle < 0.0 {
            angle += 180.0;
        }
        Self::from_degrees(angle)
    }

    /// Bucket an angle already folded into `[0, 180]`.
    pub fn from_degrees(angle: f64) -> Self {
        if angle < 22.5 || angle >= 157.5 {
            Sector::Horizontal
        } else if angle < 67.5 {
            Sector::Diagonal45
        } else if angle < 112.5 {
            Sector::Vertical
        } else {
            Sector::Diagonal135
        }
    }

    /// The two (Δrow, Δcol) neighbors lying along the gradient direction.
    pub fn neighbors(self) -> [(isize, isize); 2] {
        match self {
            Sector::Horizontal => [(0, -1), (0, 1)],
            Sector::Diagonal45 => [(1, -1), (-1, 1)],
            Sector::Vertical => [(-1, 0), (1, 0)],
            Sector::Diagonal135 => [(-1, -1), (1, 1)],
        }
    }
}

/// Suppress every pixel that is not a local maximum along its gradient.
///
/// Only interior pixels (`1..rows-1`, `1..cols-1`) are visited; the outer
/// ring stays 0. A kept pixel takes its magnitude truncated to an integer.
///
/// # Arguments
/// * `magnitude` - Normalized gradient magnitude
/// * `orientation` - Gradient orientation in radians, same shape
///
/// # Returns
/// Suppressed magnitude as integers, same shape, or
/// [`CannyError::InvalidInput`] when the two fields differ in shape
pub fn non_max_suppression(
    magnitude: ArrayView2<f64>,
    orientation: ArrayView2<f64>,
) -> Result<Array2<i32>> {
    if magnitude.dim() != orientation.dim() {
        return Err(CannyError::InvalidInput(format!(
            "magnitude is {:?} but orientation is {:?}",
            magnitude.dim(),
            orientation.dim()
        )));
    }
    let (height, width) = magnitude.dim();
    let mut output = Array2::<i32>::zeros((height, width));

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let m = magnitude[[y, x]];
            let [q, r] = Sector::from_radians(orientation[[y, x]])
                .neighbors()
                .map(|(dy, dx)| {
                    magnitude[[(y as isize + dy) as usize, (x as isize + dx) as usize]]
                });

            if m >= q && m >= r {
                output[[y, x]] = m as i32;
            }
        }
    }

    Ok(output)
}
