mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use silhouette_core::consts::DEFAULT_IMAGE_PATH;
use silhouette_core::detection::{Connectivity, DetectionConfig, SilhouetteCounter};
use silhouette_core::io::{ImageFileSource, ImageSource};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum ConnectivityArg {
    /// Up, down, left, right
    Four,
    /// Four-way plus diagonals (default)
    Eight,
}

impl From<ConnectivityArg> for Connectivity {
    fn from(arg: ConnectivityArg) -> Self {
        match arg {
            ConnectivityArg::Four => Connectivity::Four,
            ConnectivityArg::Eight => Connectivity::Eight,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "silhouette",
    about = "Count large dark silhouettes on a light background"
)]
#[command(version)]
struct Cli {
    /// Input image file
    #[arg(default_value = DEFAULT_IMAGE_PATH)]
    image: PathBuf,

    /// Detection config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum mean RGB brightness (0-255) of an object pixel
    #[arg(long)]
    edge_threshold: Option<u8>,

    /// Minimum object size as a fraction of the image area (exclusive)
    #[arg(long)]
    min_relative_size: Option<f64>,

    /// Pixel neighborhood used to join object pixels
    #[arg(long, value_enum)]
    connectivity: Option<ConnectivityArg>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Print a summary before the count
    #[arg(long)]
    report: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = build_config(&cli)?;
    debug!(?config, "Effective detection config");

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let counter = SilhouetteCounter::new(config).context("Invalid detection config")?;
    let grid = ImageFileSource
        .load(&cli.image)
        .with_context(|| format!("Failed to read {}", cli.image.display()))?;
    let report = counter
        .analyze(&grid)
        .with_context(|| format!("Failed to count silhouettes in {}", cli.image.display()))?;

    if cli.report {
        summary::print_report(&cli.image, counter.config(), &report);
    }
    println!("{}", report.large_objects);

    Ok(())
}

/// Config file values first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<DetectionConfig> {
    let mut config = if let Some(ref config_path) = cli.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid detection config")?
    } else {
        DetectionConfig::default()
    };

    if let Some(threshold) = cli.edge_threshold {
        config.edge_threshold = threshold;
    }
    if let Some(ratio) = cli.min_relative_size {
        config.min_relative_size = ratio;
    }
    if let Some(connectivity) = cli.connectivity {
        config.connectivity = connectivity.into();
    }
    Ok(config)
}
