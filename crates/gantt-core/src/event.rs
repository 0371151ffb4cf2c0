//! Timed events and the tracks that group them.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use thiserror::Error;

use crate::color::Color;

/// The only accepted timestamp layout, e.g. `2024-01-01 13:45:00`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A timestamp that is not a valid [`TIME_FORMAT`] value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// The text does not have the `YYYY-MM-DD HH:MM:SS` shape.
    #[error("expected YYYY-MM-DD HH:MM:SS")]
    Layout,
    /// The shape is right but a field is out of range.
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}

/// Parses a timestamp in exactly the [`TIME_FORMAT`] layout.
///
/// Every field must be zero-padded and separated by a single character;
/// surrounding whitespace and signs are rejected.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let bytes = value.as_bytes();
    if bytes.len() != 19 {
        return Err(TimestampError::Layout);
    }
    let shaped = bytes.iter().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => *byte == b'-',
        10 => *byte == b' ',
        13 | 16 => *byte == b':',
        _ => byte.is_ascii_digit(),
    });
    if !shaped {
        return Err(TimestampError::Layout);
    }
    Ok(NaiveDateTime::parse_from_str(value, TIME_FORMAT)?)
}

/// A single time-bounded record drawn as one rectangle.
///
/// `end` is expected to be at or after `start`, but this is not enforced:
/// malformed events are kept and rendered with a zero-width rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Display label.
    pub name: String,
    /// Resolved display color.
    pub color: Color,
}

impl Event {
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        name: impl Into<String>,
        color: Color,
    ) -> Self {
        Self {
            start,
            end,
            name: name.into(),
            color,
        }
    }

    /// Time between `start` and `end`; negative for malformed events.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' {} {}",
            self.name,
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// A named track of events, one per input sheet.
///
/// Events keep their insertion order, which decides their vertical position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsList {
    pub name: String,
    pub events: Vec<Event>,
}

impl EventsList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Display for EventsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for event in &self.events {
            writeln!(f, " - {event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    #[test]
    fn parse_timestamp_accepts_exact_layout() {
        assert_eq!(parse_timestamp("2024-02-29 23:59:59"), Ok(at("2024-02-29 23:59:59")));
    }

    #[test]
    fn parse_timestamp_rejects_loose_layouts() {
        for value in [
            "2024-1-1 1:2:3",
            "2024-01-0100:00:00",
            " 2024-01-01 00:00:00",
            "2024-01-01 00:00:00 ",
            "+2024-01-01 00:00:00",
            "2024-01-01  00:00:00",
            "2024-01-01T00:00:00",
            "2024/01/01 00:00:00",
            "",
        ] {
            assert_eq!(
                parse_timestamp(value),
                Err(TimestampError::Layout),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn parse_timestamp_rejects_out_of_range_fields() {
        assert!(matches!(
            parse_timestamp("2024-13-01 00:00:00"),
            Err(TimestampError::Parse(_))
        ));
        assert!(matches!(
            parse_timestamp("2023-02-29 00:00:00"),
            Err(TimestampError::Parse(_))
        ));
    }

    #[test]
    fn duration_is_end_minus_start() {
        let event = Event::new(
            at("2024-01-01 00:00:00"),
            at("2024-01-01 01:30:00"),
            "Task",
            Color::RED,
        );
        assert_eq!(event.duration(), TimeDelta::minutes(90));
    }

    #[test]
    fn malformed_event_has_negative_duration() {
        let event = Event::new(
            at("2024-01-01 02:00:00"),
            at("2024-01-01 01:00:00"),
            "Backwards",
            Color::BLACK,
        );
        assert!(event.duration() < TimeDelta::zero());
    }

    #[test]
    fn events_keep_insertion_order() {
        let mut list = EventsList::new("Sheet1");
        assert!(list.is_empty());
        for name in ["b", "a", "c"] {
            list.add_event(Event::new(
                at("2024-01-01 00:00:00"),
                at("2024-01-01 00:00:00"),
                name,
                Color::BLACK,
            ));
        }
        let names: Vec<_> = list.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn display_lists_track_and_events() {
        let mut list = EventsList::new("Build");
        list.add_event(Event::new(
            at("2024-01-01 00:00:00"),
            at("2024-01-01 01:00:00"),
            "Compile",
            Color::BLUE,
        ));
        assert_eq!(
            list.to_string(),
            "[Build]\n - 'Compile' 2024-01-01 00:00:00 2024-01-01 01:00:00\n"
        );
    }
}
