//! Painting a layout onto a raster surface.

use std::path::Path;

use crate::color::Color;
use crate::layout::{Layout, LayoutConfig, Rect};
use crate::timeline::TimeLine;

/// Background painted before any event.
pub const BACKGROUND: Color = Color::WHITE;

/// A surface that accepts opaque filled rectangles and can be persisted.
///
/// This allows the layout to be drawn by different backends (e.g. the PNG
/// canvas in `gantt-png`, or a recording canvas in tests).
pub trait Canvas {
    type Error;

    /// Fills the whole surface.
    fn fill(&mut self, color: Color);

    /// Fills `rect`, replacing whatever was painted there before.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Writes the surface to `path`.
    fn save(&self, path: &Path) -> Result<(), Self::Error>;
}

/// Lays out timelines and paints them onto canvases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    config: LayoutConfig,
}

/// A painted canvas and the layout it was painted from.
#[derive(Debug)]
pub struct Rendered<'a, C> {
    pub layout: Layout<'a>,
    pub canvas: C,
}

impl<C: Canvas> Rendered<'_, C> {
    pub fn save(&self, path: &Path) -> Result<(), C::Error> {
        self.canvas.save(path)
    }
}

impl Renderer {
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Renders `timeline` onto a canvas `width` pixels wide.
    ///
    /// `new_canvas` receives the canvas width and height and is only called
    /// when there is something to draw: a timeline spanning no time yields
    /// `Ok(None)` and no canvas at all.
    pub fn render<'a, C, F>(
        &self,
        timeline: &TimeLine<'a>,
        width: f64,
        new_canvas: F,
    ) -> Result<Option<Rendered<'a, C>>, C::Error>
    where
        C: Canvas,
        F: FnOnce(f64, f64) -> Result<C, C::Error>,
    {
        let Some(layout) = Layout::compute(timeline, width, &self.config) else {
            tracing::info!(
                event_count = timeline.event_count(),
                "timeline spans no time, nothing to render"
            );
            return Ok(None);
        };

        tracing::info!(
            width = layout.width,
            height = layout.height,
            scale_factor = layout.scale_factor,
            "rendering timeline"
        );
        let mut canvas = new_canvas(layout.width, layout.height)?;
        paint(&layout, &mut canvas);
        Ok(Some(Rendered { layout, canvas }))
    }
}

/// Paints the background, then every placement in drawing order.
pub fn paint<C: Canvas + ?Sized>(layout: &Layout<'_>, canvas: &mut C) {
    canvas.fill(BACKGROUND);
    for placement in &layout.placements {
        canvas.fill_rect(placement.rect, placement.event.color);
    }
}
