//! Image file collaborators: loading, rendering and saving.
//!
//! - `load_images`: decode every file of a directory into a gray image.
//! - `render_stage`: rescale any 2D stage output to an 8-bit raster.
//! - `save_images`: write final edge maps as PNG files.
//! - `save_trace`: write every stage of a detection run for inspection.
use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma};
use ndarray::{Array2, Array3, ArrayView2};

use crate::canny::StageTrace;
use crate::error::{CannyError, Result};
use crate::filters::grayscale::{rgb_to_gray_f64, rgb_to_gray_u8};

/// Convert a decoded image to gray intensities on the 0-255 scale.
///
/// 8-bit images go through the integer path. Deeper images (16-bit and
/// float) are read as floats so their extra precision survives.
pub fn rgb_to_gray(img: &DynamicImage) -> Array2<f64> {
    let color = img.color();
    if color.bytes_per_pixel() > color.channel_count() {
        let rgb = img.to_rgb32f();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let pixels = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            f64::from(rgb.get_pixel(x as u32, y as u32)[c]) * 255.0
        });
        return rgb_to_gray_f64(pixels.view());
    }

    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        rgb.get_pixel(x as u32, y as u32)[c]
    });
    rgb_to_gray_u8(pixels.view())
}

/// Load a single image file as gray intensities.
pub fn load_image(path: &Path) -> Result<Array2<f64>> {
    let img = image::open(path).map_err(|e| CannyError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(rgb_to_gray(&img))
}

/// Load every regular file of `dir`, sorted by file name.
///
/// Any file that cannot be decoded fails the whole load.
pub fn load_images(dir: &Path) -> Result<Vec<(PathBuf, Array2<f64>)>> {
    let load_err = |e: std::io::Error| CannyError::Load {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(load_err)? {
        let path = entry.map_err(load_err)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let image = load_image(&path)?;
        log::debug!("loaded {} ({}x{})", path.display(), image.nrows(), image.ncols());
        images.push((path, image));
    }
    log::info!("loaded {} image(s) from {}", images.len(), dir.display());
    Ok(images)
}

/// Rescale a 2D array linearly to 0-255 for display.
///
/// A constant array renders black.
pub fn render_stage(image: ArrayView2<f64>) -> GrayImage {
    let (height, width) = image.dim();
    let (min, max) = image
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;

    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let v = image[[y as usize, x as usize]];
        let scaled = if range > 0.0 { (v - min) / range * 255.0 } else { 0.0 };
        Luma([scaled.round().clamp(0.0, 255.0) as u8])
    })
}

fn labels_to_gray(image: &Array2<i32>) -> GrayImage {
    let (height, width) = image.dim();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([image[[y as usize, x as usize]].clamp(0, 255) as u8])
    })
}

fn save_gray(img: &GrayImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| CannyError::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| CannyError::Save {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save final edge maps as `edges_000.png`, `edges_001.png`, ...
///
/// The directory is created if absent. Labels are clamped to 0-255.
pub fn save_images(images: &[Array2<i32>], dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;
    let mut written = Vec::with_capacity(images.len());
    for (i, image) in images.iter().enumerate() {
        let path = dir.join(format!("edges_{i:03}.png"));
        save_gray(&labels_to_gray(image), &path)?;
        log::info!("saved {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Save every stage of a run as `<stem>_<stage>.png` under `dir`.
pub fn save_trace(trace: &StageTrace, dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;
    let mut written = Vec::new();
    for (stage, image) in trace.stages() {
        let path = dir.join(format!("{stem}_{stage}.png"));
        save_gray(&render_stage(image.view()), &path)?;
        written.push(path);
    }
    log::debug!("wrote {} stage image(s) for {stem}", written.len());
    Ok(written)
}
