use std::fmt;

use chrono::{Duration, NaiveTime, Timelike, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EventError;
use crate::month::Month;

#[cfg(feature = "serde")]
fn serialize_naive_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted_time = format!("{:02}:{:02}", time.hour(), time.minute());
    serializer.serialize_str(&formatted_time)
}

#[cfg(feature = "serde")]
fn deserialize_naive_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(serde::de::Error::custom)
}

/// A single occurrence in the calendar. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEvent"))]
pub struct Event {
    name: String,
    month: Month,
    day_of_week: u8,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_naive_time"))]
    start: NaiveTime,
    duration_minutes: u32,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawEvent {
    name: String,
    month: Month,
    day_of_week: u8,
    #[serde(deserialize_with = "deserialize_naive_time")]
    start: NaiveTime,
    duration_minutes: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEvent> for Event {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Event::new(raw.name, raw.month, raw.day_of_week, raw.start, raw.duration_minutes)
    }
}

impl Event {
    /// Builds an event, rejecting a blank name or a day of week outside
    /// `1..=7` (1 is Monday).
    pub fn new(
        name: impl Into<String>,
        month: Month,
        day_of_week: u8,
        start: NaiveTime,
        duration_minutes: u32,
    ) -> Result<Self, EventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventError::BlankName);
        }

        if !(1..=7).contains(&day_of_week) {
            return Err(EventError::DayOfWeekOutOfRange(day_of_week));
        }

        Ok(Self {
            name,
            month,
            day_of_week,
            start,
            duration_minutes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    pub fn weekday(&self) -> Weekday {
        match self.day_of_week {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Start plus duration. Wraps past midnight.
    pub fn end(&self) -> NaiveTime {
        let duration = Duration::minutes(i64::from(self.duration_minutes));
        self.start.overflowing_add_signed(duration).0
    }

    /// True when this event starts strictly earlier than `other`, compared to
    /// the minute.
    pub fn precedes(&self, other: &Event) -> bool {
        minute_of_day(self.start) < minute_of_day(other.start)
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {} ({}, {} min)",
            self.start.hour(),
            self.start.minute(),
            self.name,
            self.weekday(),
            self.duration_minutes
        )
    }
}
