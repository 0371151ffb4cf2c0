//! The render pipeline: import, aggregate, lay out, paint, persist.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};

use gantt_core::{ColorTable, LayoutConfig, Renderer, TimeLine};
use gantt_png::PngCanvas;
use gantt_xlsx::import_workbook;

use crate::report;

/// Resolved inputs of one run.
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Input workbook.
    pub path: PathBuf,
    /// Canvas width in pixels.
    pub width: f64,
    /// Output image path.
    pub output: PathBuf,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An image was written.
    Written { path: PathBuf, width: u32, height: u32 },
    /// The timeline spans no time; no image was written.
    Skipped,
}

pub fn run<W: Write>(writer: &mut W, args: &RenderArgs, layout: LayoutConfig) -> Result<Outcome> {
    ensure!(
        args.width.is_finite() && args.width > 0.0,
        "width must be a positive number of pixels, got {}",
        args.width
    );

    let colors = ColorTable::standard();
    let tracks = import_workbook(&args.path, &colors)
        .with_context(|| format!("failed to import {}", args.path.display()))?;

    let timeline = TimeLine::new(&tracks);
    let rendered = Renderer::new(layout)
        .render(&timeline, args.width, PngCanvas::new)
        .context("failed to allocate canvas")?;

    let outcome = match rendered {
        Some(rendered) => {
            report::write_placements(writer, &rendered.layout)?;
            rendered
                .save(&args.output)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            Outcome::Written {
                path: args.output.clone(),
                width: rendered.canvas.width(),
                height: rendered.canvas.height(),
            }
        }
        None => {
            tracing::info!(
                output = %args.output.display(),
                "nothing to draw, output left untouched"
            );
            Outcome::Skipped
        }
    };

    report::write_tracks(writer, &tracks)?;
    Ok(outcome)
}
