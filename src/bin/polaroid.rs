use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "polaroid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame a photo and write the result as a PNG.
    Frame(FrameArgs),
    /// Print the computed frame layout as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input photo (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Regular caption font (TTF/OTF).
    #[arg(long)]
    font: PathBuf,

    /// Bold caption font for the device name; defaults to the regular font.
    #[arg(long)]
    bold_font: Option<PathBuf>,

    /// Caption JSON (`deviceName`, `focalLength`, `aperture`, `shutterSpeed`, `iso`).
    #[arg(long)]
    captions: Option<PathBuf>,

    /// Frame config JSON (`padding`, `titleSize`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Device name, overrides the caption file.
    #[arg(long)]
    device: Option<String>,

    /// Focal length in mm, overrides the caption file.
    #[arg(long)]
    focal_length: Option<f64>,

    /// Aperture f-number, overrides the caption file.
    #[arg(long)]
    aperture: Option<f64>,

    /// Shutter speed such as `1/400`, overrides the caption file.
    #[arg(long)]
    shutter: Option<String>,

    /// ISO, overrides the caption file.
    #[arg(long)]
    iso: Option<u32>,
}

struct Prepared {
    image: polaroid::ImageSource,
    layout: polaroid::FrameLayout,
    text: polaroid::TextLayoutEngine,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let Prepared {
        image,
        layout,
        mut text,
    } = prepare(&args.input)?;

    let mut surface = polaroid::RasterSurface::new(layout.canvas_width, layout.canvas_height)?;
    polaroid::render(&mut surface, &image, &layout, &mut text)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface.save_png(&args.out)?;
    tracing::info!(event = "export", path = %args.out.display(), "frame exported");

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let Prepared { layout, .. } = prepare(&args.input)?;
    let json = serde_json::to_string_pretty(&layout).context("serialize frame layout")?;
    println!("{json}");
    Ok(())
}

fn prepare(input: &InputArgs) -> anyhow::Result<Prepared> {
    let bytes = std::fs::read(&input.in_path)
        .with_context(|| format!("read photo '{}'", input.in_path.display()))?;
    let image = polaroid::ImageSource::decode(&bytes)
        .with_context(|| format!("decode photo '{}'", input.in_path.display()))?;
    tracing::info!(
        event = "upload_success",
        width = image.width(),
        height = image.height(),
        "photo loaded"
    );

    let captions = resolve_captions(input)?;
    let config = match &input.config {
        Some(path) => polaroid::FrameConfig::from_path(path)?,
        None => polaroid::FrameConfig::default(),
    };

    let regular = read_font(&input.font)?;
    let bold = input.bold_font.as_deref().map(read_font).transpose()?;
    let mut text = polaroid::TextLayoutEngine::with_fonts(regular, bold)?;
    tracing::debug!(family = text.family_name().unwrap_or_default(), "caption font loaded");

    let layout = polaroid::compute_layout(image.size(), &captions, &config, &mut text)?;
    Ok(Prepared {
        image,
        layout,
        text,
    })
}

fn resolve_captions(input: &InputArgs) -> anyhow::Result<polaroid::CaptionSet> {
    let mut captions = match &input.captions {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read captions '{}'", path.display()))?;
            polaroid::CaptionSet::from_json_str(&s)?
        }
        None => polaroid::CaptionSet::default(),
    };

    if let Some(device) = &input.device {
        captions.device_name = device.clone();
    }
    if let Some(v) = input.focal_length {
        captions.focal_length = v;
    }
    if let Some(v) = input.aperture {
        captions.aperture = v;
    }
    if let Some(shutter) = &input.shutter {
        captions.shutter_speed = shutter.clone();
    }
    if let Some(v) = input.iso {
        captions.iso = v;
    }

    if !captions.device_name.is_empty() {
        tracing::info!(
            event = "metadata_detected",
            device = %captions.device_name,
            "captions resolved"
        );
    }
    Ok(captions)
}

fn read_font(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))
}
