//! Event selection for the home carousel, the events page and the countdown.
//!
//! All functions take "today" or "now" explicitly so callers decide the
//! clock and time zone. Date tests work on calendar days: an event dated
//! today stays upcoming until the day is over.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use avn_types::{Event, EventStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::seed::{placeholder_listing_events, placeholder_upcoming_events};

/// Number of upcoming events the home page shows.
pub const HOME_UPCOMING_LIMIT: usize = 4;

/// Filter buttons on the events page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    /// Every event.
    #[default]
    All,
    /// Marked upcoming, or dated today or later.
    Upcoming,
    /// Marked past, or dated before today.
    Past,
    /// Archive entries (`type == "historical"`).
    Historical,
    /// Events of one `type`.
    Type(String),
}

impl FromStr for EventFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "all" => Self::All,
            "upcoming" => Self::Upcoming,
            "past" => Self::Past,
            "historical" => Self::Historical,
            other => Self::Type(other.to_owned()),
        })
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Upcoming => f.write_str("upcoming"),
            Self::Past => f.write_str("past"),
            Self::Historical => f.write_str("historical"),
            Self::Type(kind) => f.write_str(kind),
        }
    }
}

/// Parse an event `date`: `YYYY-MM-DD`, or a full RFC 3339 timestamp whose
/// calendar date is used.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|t| t.date_naive()))
}

/// Start of a time label such as `10:00 - 16:00` or `09:30`.
pub fn parse_start_time(raw: &str) -> Option<NaiveTime> {
    let start = raw.split('-').next().unwrap_or(raw).trim();
    NaiveTime::parse_from_str(start, "%H:%M").ok()
}

/// When the event begins: its date plus the start of its `time` label, or
/// midnight when the label is missing or unreadable.
pub fn event_start(event: &Event) -> Option<NaiveDateTime> {
    let date = event.date.as_deref().and_then(parse_event_date)?;
    let time = event
        .time
        .as_deref()
        .and_then(parse_start_time)
        .unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

fn event_date(event: &Event) -> Option<NaiveDate> {
    event.date.as_deref().and_then(parse_event_date)
}

/// Whether `event` passes `filter` on `today`.
///
/// An event without a readable date fails both date tests. A status marker
/// adds to the date test rather than replacing it.
pub fn matches_filter(event: &Event, filter: &EventFilter, today: NaiveDate) -> bool {
    match filter {
        EventFilter::All => true,
        EventFilter::Upcoming => {
            event.status == Some(EventStatus::Upcoming)
                || event_date(event).is_some_and(|d| d >= today)
        }
        EventFilter::Past => {
            event.status == Some(EventStatus::Past) || event_date(event).is_some_and(|d| d < today)
        }
        EventFilter::Historical => event.is_historical(),
        EventFilter::Type(kind) => event.event_type.as_deref() == Some(kind.as_str()),
    }
}

/// Events passing `filter`, in stored order.
pub fn filter_events<'a>(
    events: &'a [Event],
    filter: &EventFilter,
    today: NaiveDate,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| matches_filter(e, filter, today))
        .collect()
}

/// The first `limit` non-historical events dated today or later, in stored
/// order.
pub fn upcoming_events(events: &[Event], today: NaiveDate, limit: usize) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| !e.is_historical() && event_date(e).is_some_and(|d| d >= today))
        .take(limit)
        .collect()
}

/// What the events page lists: the stored events, or placeholder cards when
/// nothing is stored.
pub fn listing_events(stored: Vec<Event>) -> Vec<Event> {
    if stored.is_empty() {
        tracing::debug!("no stored events, listing placeholders");
        return placeholder_listing_events();
    }
    stored
}

/// What the home carousel shows: [`upcoming_events`], or placeholder cards
/// dated after `today` when none qualify.
pub fn carousel_events(events: &[Event], today: NaiveDate, limit: usize) -> Vec<Event> {
    let picked: Vec<Event> = upcoming_events(events, today, limit)
        .into_iter()
        .cloned()
        .collect();
    if picked.is_empty() {
        tracing::debug!("no upcoming events, showing placeholders");
        return placeholder_upcoming_events(today);
    }
    picked
}

/// The non-historical event that starts soonest at or after `now`, with its
/// start time. Ties go to the earlier stored event.
pub fn next_event(events: &[Event], now: NaiveDateTime) -> Option<(&Event, NaiveDateTime)> {
    events
        .iter()
        .filter(|e| !e.is_historical())
        .filter_map(|e| event_start(e).map(|start| (e, start)))
        .filter(|(_, start)| *start >= now)
        .min_by_key(|(_, start)| *start)
}
