//! Core timeline model for Gantt-style charts.
//!
//! This crate contains the fundamental types and logic for:
//! - Events and tracks: timed records grouped by input sheet
//! - Timeline aggregation: global bounds and event count over all tracks
//! - Color resolution: mapping symbolic color names to concrete colors
//! - Layout and rendering: mapping time to pixels and painting a canvas

mod color;
mod event;
pub mod layout;
pub mod render;
mod timeline;

pub use color::{Color, ColorTable, UnrecognizedColor};
pub use event::{Event, EventsList, TIME_FORMAT, TimestampError, parse_timestamp};
pub use layout::{Layout, LayoutConfig, Placement, Rect};
pub use render::{Canvas, Rendered, Renderer};
pub use timeline::{TimeLine, TimeRange};
