//! Render both gradient fill variants and write them as PNG files
//!
//! Run with: cargo run -p gradfill_raster --example render_fill [out_dir]
//! Set RUST_LOG=debug to see which ramp branch each fill took.

use std::path::PathBuf;

use anyhow::{Context, Result};
use gradfill::{gradient_fill, gradient_fill_about_level, FillOptions, LevelClip};
use gradfill_core::{Axes, Color, LineStyle};
use gradfill_raster::{RasterRenderer, RenderOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradfill=info".parse()?)
                .add_directive("render_fill=info".parse()?),
        )
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
    let y: Vec<f64> = x.iter().map(|x| x.sin() * (1.0 + 0.1 * x)).collect();
    let renderer = RasterRenderer::new(RenderOptions::new(800, 400));

    let mut below = Axes::new();
    gradient_fill(
        &mut below,
        &x,
        &y,
        &LineStyle::new(2.0),
        &FillOptions::new().with_min_alpha(0.1),
    )?;
    write_png(&renderer, &below, out_dir.join("gradient_fill.png"))?;

    let mut about = Axes::new();
    let color: Color = "tab:green".parse()?;
    gradient_fill_about_level(
        &mut about,
        &x,
        &y,
        0.0,
        &LineStyle::new(2.0).with_color(color),
        &FillOptions::new().with_fill_alpha(0.8),
    )?;
    gradient_fill_about_level(
        &mut about,
        &x,
        &y.iter().map(|v| v + 4.0).collect::<Vec<_>>(),
        2.0,
        &LineStyle::new(1.0).with_color(Color::BLACK),
        &FillOptions::new()
            .with_fill_color("C1".parse()?)
            .with_level_clip(LevelClip::CloseAtLevel),
    )?;
    write_png(&renderer, &about, out_dir.join("gradient_fill_about_level.png"))?;

    Ok(())
}

fn write_png(renderer: &RasterRenderer, axes: &Axes, path: PathBuf) -> Result<()> {
    let plot = renderer.render(axes)?;
    std::fs::write(&path, plot.to_png()?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
