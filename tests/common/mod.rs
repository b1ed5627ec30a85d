#![allow(dead_code)]

use ndarray::Array2;

/// Bright vertical band `[start, end)` at 255 on a black background.
pub fn vertical_band(rows: usize, cols: usize, start: usize, end: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(_, x)| {
        if (start..end).contains(&x) {
            255.0
        } else {
            0.0
        }
    })
}

/// Filled bright square with its top-left corner at `(origin, origin)`.
pub fn square(size: usize, origin: usize, side: usize) -> Array2<f64> {
    let inside = origin..origin + side;
    Array2::from_shape_fn((size, size), |(y, x)| {
        if inside.contains(&y) && inside.contains(&x) {
            200.0
        } else {
            10.0
        }
    })
}

/// Columns holding at least one pixel equal to `label`.
pub fn columns_with(edges: &Array2<i32>, label: i32) -> Vec<usize> {
    (0..edges.ncols())
        .filter(|&x| edges.column(x).iter().any(|&v| v == label))
        .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
