//! Aggregation of event tracks into one shared time range.
//!
//! The bounds are the minimum start and the maximum end over every event of
//! every track. They are computed once, by folding an optional range over all
//! events: the first event seeds both bounds and every following event can
//! only widen them, so the result does not depend on traversal order.

use chrono::{NaiveDateTime, TimeDelta};

use crate::event::{Event, EventsList};

/// Temporal bounding box of a set of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// The range spanned by a single event.
    pub const fn of(event: &Event) -> Self {
        Self {
            start: event.start,
            end: event.end,
        }
    }

    /// Widens the range so it also covers `event`.
    ///
    /// Start and end are widened independently.
    #[must_use]
    pub fn widen(self, event: &Event) -> Self {
        Self {
            start: self.start.min(event.start),
            end: self.end.max(event.end),
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Aggregate view over a set of tracks.
///
/// Borrows the tracks it was built from; the tracks cannot change while the
/// timeline exists, so the bounds stay valid.
#[derive(Debug, Clone, Copy)]
pub struct TimeLine<'a> {
    tracks: &'a [EventsList],
    range: Option<TimeRange>,
    event_count: usize,
}

impl<'a> TimeLine<'a> {
    /// Scans every event once, in track order then event order.
    pub fn new(tracks: &'a [EventsList]) -> Self {
        let (range, event_count) = tracks
            .iter()
            .flat_map(|track| &track.events)
            .fold((None, 0), |(range, count), event| {
                let range = match range {
                    None => TimeRange::of(event),
                    Some(range) => TimeRange::widen(range, event),
                };
                (Some(range), count + 1)
            });

        tracing::debug!(
            tracks = tracks.len(),
            event_count,
            ?range,
            "built timeline"
        );

        Self {
            tracks,
            range,
            event_count,
        }
    }

    pub const fn tracks(&self) -> &'a [EventsList] {
        self.tracks
    }

    /// `None` when no track holds any event.
    pub const fn range(&self) -> Option<TimeRange> {
        self.range
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.range.map(|range| range.start)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.range.map(|range| range.end)
    }

    /// Total number of events, malformed ones included.
    pub const fn event_count(&self) -> usize {
        self.event_count
    }

    /// Span between the global start and end; zero for an empty timeline.
    pub fn total_duration(&self) -> TimeDelta {
        self.range.map_or_else(TimeDelta::zero, |range| range.duration())
    }

    /// Every event paired with its track, in drawing order.
    pub fn events(&self) -> impl Iterator<Item = (&'a EventsList, &'a Event)> + 'a {
        self.tracks
            .iter()
            .flat_map(|track| track.events.iter().map(move |event| (track, event)))
    }
}
