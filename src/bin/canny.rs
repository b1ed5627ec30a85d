use std::path::PathBuf;

use anyhow::{Context, Result};
use canny_edge::io::{load_images, save_images, save_trace};
use canny_edge::{CannyDetector, CannyParams, HysteresisMode};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "canny")]
#[command(about = "Detect edges in every image of a directory")]
struct Cli {
    /// Directory of input images
    #[arg(long, default_value = "input_images")]
    input: PathBuf,
    /// Directory for the edge maps (created if absent)
    #[arg(long, default_value = "output_images")]
    output: PathBuf,
    /// JSON parameter file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    sigma: Option<f64>,
    #[arg(long)]
    kernel_size: Option<usize>,
    #[arg(long)]
    weak_pixel: Option<i32>,
    #[arg(long)]
    strong_pixel: Option<i32>,
    #[arg(long)]
    low_threshold: Option<f64>,
    #[arg(long)]
    high_threshold: Option<f64>,
    /// Link weak pixels transitively instead of in a single sweep
    #[arg(long)]
    connected: bool,
    /// Also write every intermediate stage to this directory
    #[arg(long)]
    trace: Option<PathBuf>,
}

impl Cli {
    fn params(&self) -> Result<CannyParams> {
        let mut params = match &self.config {
            Some(path) => CannyParams::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CannyParams::default(),
        };
        if let Some(v) = self.sigma {
            params.sigma = v;
        }
        if let Some(v) = self.kernel_size {
            params.kernel_size = v;
        }
        if let Some(v) = self.weak_pixel {
            params.weak_pixel = v;
        }
        if let Some(v) = self.strong_pixel {
            params.strong_pixel = v;
        }
        if let Some(v) = self.low_threshold {
            params.low_threshold = v;
        }
        if let Some(v) = self.high_threshold {
            params.high_threshold = v;
        }
        if self.connected {
            params.hysteresis = HysteresisMode::Connected;
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let detector = CannyDetector::new(cli.params()?).context("invalid detection parameters")?;
    log::info!("parameters: {:?}", detector.params());

    let loaded = load_images(&cli.input)
        .with_context(|| format!("reading images from {}", cli.input.display()))?;
    let (paths, images): (Vec<_>, Vec<_>) = loaded.into_iter().unzip();

    let edges = match &cli.trace {
        Some(trace_dir) => {
            let mut edges = Vec::with_capacity(images.len());
            for (path, image) in paths.iter().zip(&images) {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "image".to_string());
                let trace = detector
                    .detect_with_trace(image.view())
                    .with_context(|| format!("detecting edges in {}", path.display()))?;
                save_trace(&trace, trace_dir, &stem)?;
                edges.push(trace.edges);
            }
            edges
        }
        None => detector.detect_batch(&images)?,
    };

    let written = save_images(&edges, &cli.output)
        .with_context(|| format!("writing results to {}", cli.output.display()))?;
    println!("wrote {} edge map(s) to {}", written.len(), cli.output.display());
    Ok(())
}
