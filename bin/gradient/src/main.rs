use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hslcolor::{Color, Quirks, Space};
use image::RgbaImage;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const NAMED: [(&str, Color); 10] = [
    ("black", Color::BLACK),
    ("gray", Color::GRAY),
    ("white", Color::WHITE),
    ("clear", Color::CLEAR),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
    ("cyan", Color::CYAN),
    ("magenta", Color::MAGENTA),
];

const PAIRS: [(Color, Color); 6] = [
    (Color::RED, Color::BLUE),
    (Color::RED, Color::YELLOW),
    (Color::GREEN, Color::MAGENTA),
    (Color::CYAN, Color::YELLOW),
    (Color::BLUE, Color::WHITE),
    (Color::BLACK, Color::RED),
];

/// Print sample conversions and render hue interpolation strips to a PNG.
#[derive(Parser, Debug)]
#[command(name = "hslcolor-gradient")]
#[command(author, version, about)]
struct Cli {
    /// Where to write the rendered image
    #[arg(short, long, default_value = "gradient.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(short, long, default_value = "1000")]
    width: u32,

    /// Height of each strip in pixels
    #[arg(long, default_value = "80")]
    strip_height: u32,

    /// Interpolate with the legacy hue formula
    #[arg(long)]
    legacy: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    print_samples()?;

    let quirks = if cli.legacy {
        Quirks::LEGACY
    } else {
        Quirks::empty()
    };
    let img = render(&cli, quirks)?;

    img.save(&cli.output)
        .with_context(|| format!("could not write image to {}", cli.output.display()))?;
    info!(output = %cli.output.display(), "wrote gradient");

    Ok(())
}

fn print_samples() -> Result<()> {
    for (name, color) in NAMED {
        println!(
            "{name:<8} {color}  {}  luminance {:.4}  luma {:.4}",
            color.to_hex_string()?,
            color.luminance()?,
            color.luma()?,
        );
        for space in Space::ALL {
            let [a, b, c, alpha] = color.to_space(space)?;
            let label = format!("{space:?}");
            println!("  {label:<8} {a:.4} {b:.4} {c:.4} {alpha:.4}");
        }
    }
    Ok(())
}

fn render(cli: &Cli, quirks: Quirks) -> Result<RgbaImage> {
    anyhow::ensure!(
        cli.width > 1 && cli.strip_height > 0,
        "image must be at least 2 pixels wide and strips at least 1 pixel high"
    );

    let height = cli.strip_height * PAIRS.len() as u32;
    let mut img = RgbaImage::new(cli.width, height);

    for (index, (left, right)) in PAIRS.iter().enumerate() {
        debug!(%left, %right, "rendering strip");

        let top = index as u32 * cli.strip_height;
        for x in 0..cli.width {
            let weight = x as f64 / (cli.width - 1) as f64;
            let color = left.interpolate_with(right, weight as _, quirks)?;
            let pixel = to_pixel(&color)?;

            for y in top..top + cli.strip_height {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    Ok(img)
}

fn to_pixel(color: &Color) -> Result<image::Rgba<u8>> {
    let channels = color.to_srgba()?.to_array();
    Ok(image::Rgba(
        channels.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8),
    ))
}
