use clap::Parser;
use std::path::PathBuf;
use thumbcache::{AppConfig, ImageCrateBackend, ResizeOptions, Resizer};

#[derive(Parser)]
#[command(name = "thumbcache")]
#[command(about = "Cached crop/scale derivatives for web-served images")]
#[command(long_about = "\
Cached crop/scale derivatives for web-served images

Resolves the URL path against the document root, computes a proportional
center crop covering the target box, and writes the derivative next to the
source as {stem}-{w}x{h}.{ext}. GIF and PNG sources keep their format;
everything else becomes JPEG. If the derivative file already exists it is
reused as-is.

Prints the resulting descriptor as JSON:

  {\"url\": \"/uploads/photo-150x150.jpg\", \"width\": 150, \"height\": 150,
   \"type\": \"image/jpeg\"}")]
#[command(version)]
struct Cli {
    /// Public URL of the source image (absolute or path-only)
    url: String,

    /// Target box width in pixels
    #[arg(long, default_value_t = 150)]
    width: u32,

    /// Target box height in pixels
    #[arg(long, default_value_t = 150)]
    height: u32,

    /// Stretch into the target box instead of cropping proportionally
    #[arg(long)]
    no_crop: bool,

    /// Double both target dimensions for high-DPI displays
    #[arg(long)]
    retina: bool,

    /// Document root the URL path is resolved against (overrides config)
    #[arg(long)]
    root: Option<PathBuf>,

    /// JPEG encode quality, 1-100 (overrides config)
    #[arg(long)]
    quality: Option<u32>,

    /// Path to a thumbcache.toml config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(root) = cli.root {
        config.document_root = root;
    }
    if let Some(quality) = cli.quality {
        config.jpeg_quality = quality;
    }
    config.validate()?;

    let backend = ImageCrateBackend::new();
    let resizer = Resizer::new(&config, &backend);
    let opts = ResizeOptions {
        width: cli.width,
        height: cli.height,
        crop: !cli.no_crop,
        retina: cli.retina,
    };

    let derivative = resizer.resize(&cli.url, &opts)?;
    println!("{}", serde_json::to_string_pretty(&derivative)?);

    Ok(())
}
