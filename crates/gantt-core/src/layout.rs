//! Time-to-pixel layout.
//!
//! # Algorithm Summary
//!
//! 1. Skip timelines that span no time (empty, or collapsed to an instant).
//! 2. Derive one scale factor, `width / total_seconds`, shared by all events.
//! 3. Give every event its own fixed-height row, top to bottom, in track order
//!    then event order. Rows are not grouped by track.
//! 4. Place each event at `(start - timeline.start) * scale` with a width of
//!    `(end - start) * scale`, clamped to zero for malformed events.

use chrono::TimeDelta;

use crate::event::{Event, EventsList};
use crate::timeline::TimeLine;

pub const DEFAULT_ROW_HEIGHT: f64 = 10.0;
pub const DEFAULT_MIN_HEIGHT: f64 = 100.0;
pub const DEFAULT_FALLBACK_HEIGHT: f64 = 1000.0;

/// Vertical sizing rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Height of a single event row, in pixels.
    pub row_height: f64,
    /// Smallest canvas height that is used as computed.
    pub min_height: f64,
    /// Canvas height used when the computed one is below `min_height`.
    pub fallback_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            min_height: DEFAULT_MIN_HEIGHT,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// One row per event, or the fallback height for small inputs.
    #[expect(
        clippy::cast_precision_loss,
        reason = "event counts are far below 2^52"
    )]
    pub fn canvas_height(&self, event_count: usize) -> f64 {
        let height = self.row_height * event_count as f64;
        if height < self.min_height {
            self.fallback_height
        } else {
            height
        }
    }
}

/// Axis-aligned rectangle in canvas pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// An event together with the rectangle it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub track: &'a EventsList,
    pub event: &'a Event,
    pub rect: Rect,
}

/// Pixel geometry of a whole timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<'a> {
    pub width: f64,
    pub height: f64,
    /// Pixels per second.
    pub scale_factor: f64,
    /// One entry per event, in drawing order.
    pub placements: Vec<Placement<'a>>,
}

impl<'a> Layout<'a> {
    /// Computes the layout for a canvas `width` pixels wide.
    ///
    /// Returns `None` when the timeline spans no positive amount of time;
    /// there is nothing meaningful to scale in that case.
    pub fn compute(timeline: &TimeLine<'a>, width: f64, config: &LayoutConfig) -> Option<Self> {
        let range = timeline.range()?;
        let total = seconds(range.duration());
        if total <= 0.0 {
            tracing::debug!(?range, "timeline spans no time");
            return None;
        }

        let scale_factor = width / total;
        let height = config.canvas_height(timeline.event_count());

        let mut y = 0.0;
        let placements = timeline
            .events()
            .map(|(track, event)| {
                let rect = Rect {
                    x: seconds(event.start - range.start) * scale_factor,
                    y,
                    width: (seconds(event.duration()) * scale_factor).max(0.0),
                    height: config.row_height,
                };
                y += config.row_height;
                Placement { track, event, rect }
            })
            .collect();

        Some(Self {
            width,
            height,
            scale_factor,
            placements,
        })
    }
}

/// Fractional seconds in a time delta, at millisecond precision.
#[expect(
    clippy::cast_precision_loss,
    reason = "millisecond counts of realistic timelines fit in f64"
)]
pub fn seconds(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDateTime;

    use crate::color::Color;
    use crate::event::TIME_FORMAT;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    fn event(name: &str, start: &str, end: &str) -> Event {
        Event::new(at(start), at(end), name, Color::RED)
    }

    fn track(name: &str, events: Vec<Event>) -> EventsList {
        EventsList {
            name: name.to_string(),
            events,
        }
    }

    #[test]
    fn single_event_spans_full_width() {
        let tracks = vec![track(
            "Sheet1",
            vec![event("Task A", "2024-01-01 00:00:00", "2024-01-01 01:00:00")],
        )];
        let timeline = TimeLine::new(&tracks);
        let layout = Layout::compute(&timeline, 1000.0, &LayoutConfig::default()).unwrap();

        assert!((layout.scale_factor - 1000.0 / 3600.0).abs() < 1e-12);
        assert_eq!(layout.width, 1000.0);
        assert_eq!(layout.height, 1000.0);
        assert_eq!(layout.placements.len(), 1);

        let rect = layout.placements[0].rect;
        assert_eq!(rect.x, 0.0);
        assert!((rect.width - 1000.0).abs() < 1e-9);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.height, 10.0);
    }

    #[test]
    fn rows_stack_across_tracks() {
        let tracks = vec![
            track(
                "Morning",
                vec![event("A", "2024-01-01 08:00:00", "2024-01-01 09:00:00")],
            ),
            track(
                "Afternoon",
                vec![event("B", "2024-01-01 13:00:00", "2024-01-01 14:00:00")],
            ),
        ];
        let timeline = TimeLine::new(&tracks);
        let layout = Layout::compute(&timeline, 600.0, &LayoutConfig::default()).unwrap();

        // 6 hours over 600 pixels: 100 pixels per hour.
        let rects: Vec<Rect> = layout.placements.iter().map(|p| p.rect).collect();
        assert!((rects[0].x - 0.0).abs() < 1e-9);
        assert!((rects[0].width - 100.0).abs() < 1e-9);
        assert!((rects[1].x - 500.0).abs() < 1e-9);
        assert!((rects[1].width - 100.0).abs() < 1e-9);
        assert_eq!(rects[0].y, 0.0);
        assert_eq!(rects[1].y, 10.0);
        assert_eq!(layout.placements[1].track.name, "Afternoon");
    }

    #[test]
    fn geometry_follows_scale_factor() {
        let tracks = vec![track(
            "t",
            vec![
                event("a", "2024-03-01 10:00:00", "2024-03-01 10:00:30"),
                event("b", "2024-03-01 10:00:15", "2024-03-01 10:01:40"),
                event("c", "2024-03-01 10:00:05", "2024-03-01 10:00:05"),
            ],
        )];
        let timeline = TimeLine::new(&tracks);
        let width = 4000.0;
        let layout = Layout::compute(&timeline, width, &LayoutConfig::default()).unwrap();
        let start = timeline.start().unwrap();
        let scale = width / seconds(timeline.total_duration());

        for placement in &layout.placements {
            let expected_x = seconds(placement.event.start - start) * scale;
            let expected_width = seconds(placement.event.duration()) * scale;
            assert!((placement.rect.x - expected_x).abs() < 1e-9);
            assert!((placement.rect.width - expected_width).abs() < 1e-9);
        }
        assert_eq!(layout.placements[2].rect.width, 0.0);
    }

    #[test]
    fn negative_width_is_clamped_to_zero() {
        let tracks = vec![track(
            "t",
            vec![
                event("ok", "2024-01-01 00:00:00", "2024-01-01 02:00:00"),
                event("backwards", "2024-01-01 01:30:00", "2024-01-01 01:00:00"),
            ],
        )];
        let timeline = TimeLine::new(&tracks);
        let layout = Layout::compute(&timeline, 200.0, &LayoutConfig::default()).unwrap();
        let rect = layout.placements[1].rect;
        assert!((rect.x - 150.0).abs() < 1e-9);
        assert_eq!(rect.width, 0.0);
    }

    #[test]
    fn zero_duration_timeline_has_no_layout() {
        let tracks = vec![track(
            "t",
            vec![
                event("a", "2024-01-01 00:00:00", "2024-01-01 00:00:00"),
                event("b", "2024-01-01 00:00:00", "2024-01-01 00:00:00"),
            ],
        )];
        let timeline = TimeLine::new(&tracks);
        assert!(Layout::compute(&timeline, 1000.0, &LayoutConfig::default()).is_none());
    }

    #[test]
    fn backwards_timeline_has_no_layout() {
        // A lone reversed event makes the timeline end before it starts.
        let tracks = vec![track(
            "t",
            vec![event("backwards", "2024-01-01 02:00:00", "2024-01-01 01:00:00")],
        )];
        let timeline = TimeLine::new(&tracks);
        assert!(timeline.total_duration() < TimeDelta::zero());
        assert!(Layout::compute(&timeline, 1000.0, &LayoutConfig::default()).is_none());
    }

    #[test]
    fn empty_timeline_has_no_layout() {
        let tracks = vec![track("header only", vec![])];
        let timeline = TimeLine::new(&tracks);
        assert!(Layout::compute(&timeline, 1000.0, &LayoutConfig::default()).is_none());
    }

    #[test]
    fn canvas_height_uses_rows_above_minimum() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_height(0), 1000.0);
        assert_eq!(config.canvas_height(1), 1000.0);
        assert_eq!(config.canvas_height(9), 1000.0);
        assert_eq!(config.canvas_height(10), 100.0);
        assert_eq!(config.canvas_height(250), 2500.0);
    }

    #[test]
    fn canvas_height_respects_custom_config() {
        let config = LayoutConfig {
            row_height: 4.0,
            min_height: 20.0,
            fallback_height: 50.0,
        };
        assert_eq!(config.canvas_height(4), 50.0);
        assert_eq!(config.canvas_height(5), 20.0);
    }

    #[test]
    fn seconds_keeps_millisecond_precision() {
        assert_eq!(seconds(TimeDelta::milliseconds(1500)), 1.5);
        assert_eq!(seconds(TimeDelta::hours(-1)), -3600.0);
    }
}
