//! Double thresholding of the suppressed magnitude.

use ndarray::{Array2, ArrayView2};

/// Classify pixels as strong, weak or suppressed.
///
/// Absolute thresholds are derived from the image maximum:
/// `high = max · high_ratio` and `low = high · low_ratio`. The low threshold
/// is relative to the high one, not to the maximum.
///
/// - `value >= high` → `strong_pixel`
/// - `low <= value < high` → `weak_pixel`
/// - `value < low` → 0
///
/// With an all-zero input both thresholds are 0, so every pixel is strong.
///
/// # Arguments
/// * `image` - Non-max suppressed magnitude
/// * `low_ratio` - Low threshold as a fraction of the high threshold
/// * `high_ratio` - High threshold as a fraction of the image maximum
/// * `weak_pixel`, `strong_pixel` - Output labels
pub fn double_threshold(
    image: ArrayView2<i32>,
    low_ratio: f64,
    high_ratio: f64,
    weak_pixel: i32,
    strong_pixel: i32,
) -> Array2<i32> {
    let max = image.iter().copied().max().unwrap_or(0);
    let high = f64::from(max) * high_ratio;
    let low = high * low_ratio;

    image.mapv(|v| {
        let v = f64::from(v);
        if v >= high {
            strong_pixel
        } else if v >= low {
            weak_pixel
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const WEAK: i32 = 75;
    const STRONG: i32 = 255;

    fn count(img: &Array2<i32>, label: i32) -> usize {
        img.iter().filter(|&&v| v == label).count()
    }

    #[test]
    fn test_classification() {
        // max = 200 -> high = 30, low = 1.5
        let img = array![[0, 1, 2, 29], [30, 31, 200, 0]];
        let out = double_threshold(img.view(), 0.05, 0.15, WEAK, STRONG);
        assert_eq!(out, array![[0, 0, WEAK, WEAK], [STRONG, STRONG, STRONG, 0]]);
    }

    #[test]
    fn test_low_is_relative_to_high() {
        // max = 100, high = 50, low = 25 rather than 0.5 · max = 50
        let img = array![[100, 26, 24]];
        let out = double_threshold(img.view(), 0.5, 0.5, WEAK, STRONG);
        assert_eq!(out, array![[STRONG, WEAK, 0]]);
    }

    #[test]
    fn test_value_equal_to_high_is_strong() {
        let img = array![[100, 50]];
        let out = double_threshold(img.view(), 0.5, 0.5, WEAK, STRONG);
        assert_eq!(out[[0, 1]], STRONG);
    }

    #[test]
    fn test_all_zero_input_is_strong() {
        // max = 0 -> high = low = 0, and 0 >= 0 holds everywhere.
        let img = Array2::<i32>::zeros((4, 4));
        let out = double_threshold(img.view(), 0.05, 0.15, WEAK, STRONG);
        assert!(out.iter().all(|&v| v == STRONG));
    }

    #[test]
    fn test_output_labels_restricted() {
        let img = Array2::from_shape_fn((8, 8), |(y, x)| ((y * 31 + x * 17) % 97) as i32);
        let out = double_threshold(img.view(), 0.3, 0.6, WEAK, STRONG);
        assert!(out.iter().all(|&v| v == 0 || v == WEAK || v == STRONG));
        assert_eq!(out.dim(), img.dim());
    }

    #[test]
    fn test_monotonic_in_high_threshold() {
        let img = Array2::from_shape_fn((10, 10), |(y, x)| ((y * 13 + x * 7) % 50) as i32 * 5);
        let mut prev_strong = usize::MAX;
        for high in [0.05, 0.1, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let out = double_threshold(img.view(), 0.5, high, WEAK, STRONG);
            let strong = count(&out, STRONG);
            assert!(strong <= prev_strong, "high={high}: {strong} > {prev_strong}");
            prev_strong = strong;
        }
    }

    #[test]
    fn test_monotonic_in_low_threshold() {
        let img = Array2::from_shape_fn((10, 10), |(y, x)| ((y * 13 + x * 7) % 50) as i32 * 5);
        let mut prev_weak = usize::MAX;
        for low in [0.05, 0.1, 0.2, 0.4, 0.6, 0.8, 0.99] {
            let out = double_threshold(img.view(), low, 0.5, WEAK, STRONG);
            let weak = count(&out, WEAK);
            assert!(weak <= prev_weak, "low={low}: {weak} > {prev_weak}");
            prev_weak = weak;
        }
    }
}
