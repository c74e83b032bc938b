use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pixhold::{FontFace, Renderer};

/// Render a placeholder PNG: solid fill plus a centered dimension label.
#[derive(Parser)]
#[command(name = "pixhold", version, about)]
struct Args {
    /// Edge length in pixels (width, and height unless --height is given)
    size: i32,

    /// Background color as hex: "FF5733", "#336699" or shorthand "F0A"
    color: String,

    /// Height in pixels, for non-square output
    #[arg(long)]
    height: Option<i32>,

    /// Output file
    #[arg(short, long, default_value = "placeholder.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let font = FontFace::embedded().context("failed to load the embedded font")?;
    let renderer = Renderer::new(font);

    let height = args.height.unwrap_or(args.size);
    let png = renderer.render_hex(args.size, height, &args.color)?;

    std::fs::write(&args.output, &png)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} ({} x {}, {} bytes)",
        args.output.display(),
        args.size,
        height,
        png.len()
    );
    Ok(())
}
