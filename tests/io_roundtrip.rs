#![cfg(feature = "io")]

mod common;

use canny_edge::io::{load_images, save_images, save_trace};
use canny_edge::{CannyDetector, CannyParams};
use common::{columns_with, init_logging};
use image::{GrayImage, Luma};

#[test]
fn directory_pipeline_writes_edge_maps() {
    init_logging();
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("output_images");

    // Written out of order to exercise sorting.
    GrayImage::from_fn(10, 10, |x, _| Luma([if (3..7).contains(&x) { 255 } else { 0 }]))
        .save(input.path().join("b_band.png"))
        .unwrap();
    GrayImage::from_pixel(8, 6, Luma([90]))
        .save(input.path().join("a_flat.png"))
        .unwrap();

    let detector = CannyDetector::new(CannyParams::default()).unwrap();
    let (paths, images): (Vec<_>, Vec<_>) = load_images(input.path()).unwrap().into_iter().unzip();
    assert!(paths[0].ends_with("a_flat.png"));
    assert!(paths[1].ends_with("b_band.png"));

    let edges = detector.detect_batch(&images).unwrap();
    // A flat image has no gradient, so every pixel clears the zero threshold.
    assert!(edges[0].iter().all(|&v| v == 255));
    let band_columns = columns_with(&edges[1], 255);
    assert!(!band_columns.is_empty());
    assert!(band_columns.iter().all(|x| [2, 3, 6, 7].contains(x)));
    assert!(edges[1].row(0).iter().all(|&v| v == 0));

    let written = save_images(&edges, &out_dir).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("edges_000.png"));

    let reread = image::open(&written[1]).unwrap().to_luma8();
    assert_eq!(reread.dimensions(), (10, 10));
    for (x, y, pixel) in reread.enumerate_pixels() {
        assert_eq!(i32::from(pixel[0]), edges[1][[y as usize, x as usize]]);
    }
}

#[test]
fn trace_directory_holds_one_file_per_stage() {
    let dir = tempfile::tempdir().unwrap();
    let detector = CannyDetector::new(CannyParams::default()).unwrap();
    let image = common::vertical_band(10, 10, 3, 7);
    let trace = detector.detect_with_trace(image.view()).unwrap();

    let written = save_trace(&trace, &dir.path().join("trace"), "band").unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "band_smoothed.png",
            "band_gradient.png",
            "band_orientation.png",
            "band_suppressed.png",
            "band_thresholded.png",
            "band_edges.png",
        ]
    );
}
