//! PNG raster canvas.
//!
//! Implements [`gantt_core::Canvas`] on top of an in-memory RGBA buffer from
//! the `image` crate. Rectangles are snapped to whole pixels by rounding
//! their edges and are clipped to the canvas.

use std::path::Path;

use image::error::{LimitError, LimitErrorKind};
use image::{ImageError, ImageFormat, Rgba, RgbaImage};

use gantt_core::{Canvas, Color, Rect};

/// Largest accepted canvas, in pixels (1 GiB of RGBA data).
pub const MAX_PIXELS: u64 = 1 << 28;

/// An RGBA pixel buffer persisted as PNG.
#[derive(Debug, Clone)]
pub struct PngCanvas {
    image: RgbaImage,
}

impl PngCanvas {
    /// Allocates a transparent canvas of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns a dimension error if either side rounds to zero or is not
    /// finite, if the canvas exceeds [`MAX_PIXELS`], or if the buffer cannot
    /// be allocated.
    pub fn new(width: f64, height: f64) -> Result<Self, ImageError> {
        let width = pixel_dimension(width)?;
        let height = pixel_dimension(height)?;
        let pixels = u64::from(width) * u64::from(height);
        if pixels > MAX_PIXELS {
            tracing::warn!(width, height, max = MAX_PIXELS, "canvas too large");
            return Err(dimension_error());
        }
        let len = usize::try_from(pixels * 4).map_err(|_| dimension_error())?;

        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| dimension_error())?;
        buffer.resize(len, 0);
        let image = RgbaImage::from_raw(width, height, buffer).ok_or_else(dimension_error)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color of the pixel at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|&Rgba([r, g, b, a])| Color { r, g, b, a })
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Canvas for PngCanvas {
    type Error = ImageError;

    fn fill(&mut self, color: Color) {
        let pixel = Rgba(color.to_rgba());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let pixel = Rgba(color.to_rgba());
        let x0 = snap(rect.x, self.image.width());
        let x1 = snap(rect.x + rect.width, self.image.width());
        let y0 = snap(rect.y, self.image.height());
        let y1 = snap(rect.y + rect.height, self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    fn save(&self, path: &Path) -> Result<(), Self::Error> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        tracing::info!(
            path = %path.display(),
            width = self.image.width(),
            height = self.image.height(),
            "wrote image"
        );
        Ok(())
    }
}

fn dimension_error() -> ImageError {
    ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and range-checked first"
)]
fn pixel_dimension(value: f64) -> Result<u32, ImageError> {
    let rounded = value.round();
    if rounded.is_finite() && (1.0..=f64::from(u32::MAX)).contains(&rounded) {
        Ok(rounded as u32)
    } else {
        Err(dimension_error())
    }
}

/// Rounds a coordinate to the nearest pixel edge within `0..=limit`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the canvas first"
)]
fn snap(value: f64, limit: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(limit)) as u32
}
