//! Console output: the drawn-event dump and the track listing.

use std::io::{self, Write};

use chrono::TimeDelta;

use gantt_core::{EventsList, Layout, TIME_FORMAT};

/// Writes one line per drawn event with its pixel geometry.
pub fn write_placements<W: Write>(writer: &mut W, layout: &Layout<'_>) -> io::Result<()> {
    for placement in &layout.placements {
        let event = placement.event;
        let rect = placement.rect;
        writeln!(
            writer,
            "'{}' ({} - {}) x:{:.3} y:{:.3} w:{:.3} ({})",
            event.name,
            event.start.format(TIME_FORMAT),
            event.end.format(TIME_FORMAT),
            rect.x,
            rect.y,
            rect.width,
            format_duration(event.duration()),
        )?;
    }
    Ok(())
}

/// Writes every track followed by its events.
pub fn write_tracks<W: Write>(writer: &mut W, tracks: &[EventsList]) -> io::Result<()> {
    for track in tracks {
        writeln!(writer, "{track}")?;
    }
    Ok(())
}

/// Formats a duration as hours, minutes and seconds, e.g. `1h30m0s`.
pub fn format_duration(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let total = delta.num_seconds().unsigned_abs();
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}
