//! Hysteresis linking: keep weak pixels that touch strong ones.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 8-connected neighborhood offsets (Δrow, Δcol).
const NEIGHBORS_8: [(isize, isize); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// How weak pixels are linked to strong ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HysteresisMode {
    /// One forward row-major sweep; promotions are not propagated backwards.
    #[default]
    SinglePass,
    /// Full transitive 8-connectivity from every strong pixel.
    Connected,
}

#[inline]
fn offset(y: usize, x: usize, dy: isize, dx: isize) -> [usize; 2] {
    [(y as isize + dy) as usize, (x as isize + dx) as usize]
}

/// Single-sweep hysteresis, in place.
///
/// Interior pixels are visited once in row-major order. A weak pixel is
/// promoted to strong if any 8-neighbor is strong *at the moment it is
/// visited*, otherwise it is cleared. A weak pixel whose only strong link is
/// a neighbor promoted later in the sweep is therefore dropped.
///
/// The outer ring is never visited and keeps its classification.
pub fn hysteresis(mut image: Array2<i32>, weak_pixel: i32, strong_pixel: i32) -> Array2<i32> {
    let (height, width) = image.dim();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if image[[y, x]] != weak_pixel {
                continue;
            }
            let linked = NEIGHBORS_8
                .iter()
                .any(|&(dy, dx)| image[offset(y, x, dy, dx)] == strong_pixel);
            image[[y, x]] = if linked { strong_pixel } else { 0 };
        }
    }

    image
}

/// Flood-fill hysteresis, in place.
///
/// Every interior weak pixel 8-connected to a strong pixel through a chain
/// of weak pixels becomes strong; the remaining interior weak pixels are
/// cleared. Strong pixels on the outer ring seed the fill, but the ring
/// itself is never modified.
pub fn hysteresis_connected(
    mut image: Array2<i32>,
    weak_pixel: i32,
    strong_pixel: i32,
) -> Array2<i32> {
    let (height, width) = image.dim();
    if height < 3 || width < 3 {
        return image;
    }

    let interior = |y: usize, x: usize| y >= 1 && y + 1 < height && x >= 1 && x + 1 < width;

    let mut stack: Vec<(usize, usize)> = image
        .indexed_iter()
        .filter(|&(_, &v)| v == strong_pixel)
        .map(|((y, x), _)| (y, x))
        .collect();

    while let Some((y, x)) = stack.pop() {
        for &(dy, dx) in NEIGHBORS_8.iter() {
            let ny = y as isize + dy;
            let nx = x as isize + dx;
            if ny < 0 || nx < 0 {
                continue;
            }
            let (ny, nx) = (ny as usize, nx as usize);
            if interior(ny, nx) && image[[ny, nx]] == weak_pixel {
                image[[ny, nx]] = strong_pixel;
                stack.push((ny, nx));
            }
        }
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if image[[y, x]] == weak_pixel {
                image[[y, x]] = 0;
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const W: i32 = 75;
    const S: i32 = 255;

    #[test]
    fn test_weak_next_to_strong_is_promoted() {
        let img = array![
            [0, 0, 0, 0],
            [0, W, S, 0],
            [0, 0, 0, 0],
        ];
        let out = hysteresis(img, W, S);
        assert_eq!(out[[1, 1]], S);
        assert_eq!(out[[1, 2]], S);
    }

    #[test]
    fn test_isolated_weak_is_cleared() {
        let img = array![
            [0, 0, 0, 0, 0],
            [0, W, 0, 0, 0],
            [0, 0, 0, W, 0],
            [0, 0, 0, 0, 0],
        ];
        let out = hysteresis(img, W, S);
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_diagonal_link() {
        let img = array![
            [0, 0, 0, 0],
            [0, 0, S, 0],
            [0, W, 0, 0],
            [0, 0, 0, 0],
        ];
        let out = hysteresis(img, W, S);
        assert_eq!(out[[2, 1]], S);
    }

    #[test]
    fn test_single_pass_is_not_retroactive() {
        // (1,1) is visited before (1,2) gets promoted, so it is dropped.
        let img = array![
            [0, 0, 0, 0, 0],
            [0, W, W, S, 0],
            [0, 0, 0, 0, 0],
        ];
        let out = hysteresis(img, W, S);
        assert_eq!(out.row(1).to_vec(), vec![0, 0, S, S, 0]);
    }

    #[test]
    fn test_single_pass_propagates_forward() {
        // Promotions earlier in the sweep are visible to later pixels.
        let img = array![
            [0, 0, 0, 0, 0, 0],
            [0, S, W, W, W, 0],
            [0, 0, 0, 0, 0, 0],
        ];
        let out = hysteresis(img, W, S);
        assert_eq!(out.row(1).to_vec(), vec![0, S, S, S, S, 0]);
    }

    #[test]
    fn test_border_ring_untouched() {
        let img = array![
            [W, W, 0, S],
            [0, 0, 0, 0],
            [W, 0, 0, W],
        ];
        let out = hysteresis(img.clone(), W, S);
        assert_eq!(out, img);
    }

    #[test]
    fn test_border_strong_links_interior() {
        let img = array![
            [S, 0, 0],
            [0, W, 0],
            [0, 0, 0],
        ];
        let out = hysteresis(img, W, S);
        assert_eq!(out[[1, 1]], S);
    }

    #[test]
    fn test_connected_links_chains() {
        let img = array![
            [0, 0, 0, 0, 0],
            [0, W, W, S, 0],
            [0, 0, 0, 0, 0],
        ];
        let out = hysteresis_connected(img, W, S);
        assert_eq!(out.row(1).to_vec(), vec![0, S, S, S, 0]);
    }

    #[test]
    fn test_connected_clears_unlinked_and_keeps_ring() {
        let img = array![
            [W, 0, 0, 0, 0, W],
            [0, W, 0, 0, W, 0],
            [0, 0, 0, 0, S, 0],
            [0, 0, 0, 0, 0, 0],
        ];
        let out = hysteresis_connected(img, W, S);
        assert_eq!(out[[1, 1]], 0);
        assert_eq!(out[[1, 4]], S);
        // The ring keeps its weak labels.
        assert_eq!(out[[0, 0]], W);
        assert_eq!(out[[0, 5]], W);
    }

    #[test]
    fn test_connected_is_superset_of_single_pass() {
        let img = Array2::from_shape_fn((9, 9), |(y, x)| match (y * 5 + x * 3) % 7 {
            0 => S,
            1 | 2 | 3 => W,
            _ => 0,
        });
        let single = hysteresis(img.clone(), W, S);
        let connected = hysteresis_connected(img, W, S);
        for (a, b) in single.iter().zip(connected.iter()) {
            if *a == S {
                assert_eq!(*b, S);
            }
        }
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: HysteresisMode = serde_json::from_str("\"connected\"").unwrap();
        assert_eq!(mode, HysteresisMode::Connected);
        assert_eq!(
            serde_json::to_string(&HysteresisMode::SinglePass).unwrap(),
            "\"single_pass\""
        );
    }
}
