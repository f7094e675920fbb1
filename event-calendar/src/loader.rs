//! Reads events from plain text, one per line:
//!
//! ```text
//! # name; month; day of week; start; duration in minutes
//! Dentist; FEBRUARY; 3; 10:00; 30
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use chrono::NaiveTime;
use log::debug;

use crate::calendar::Calendar;
use crate::error::LoadError;
use crate::event::Event;
use crate::month::Month;

const SEPARATOR: char = ';';

/// Parses a single event line. `line_number` is only used for error reporting.
pub fn parse_event(line: &str, line_number: usize) -> Result<Event, LoadError> {
    let malformed = |reason: String| LoadError::malformed(line_number, reason);

    let fields = line.split(SEPARATOR).map(str::trim).collect::<Vec<_>>();
    let [name, month, day, start, duration] = fields[..] else {
        return Err(malformed(format!("expected 5 fields, found {}", fields.len())));
    };

    let month = month.parse::<Month>().map_err(|err| malformed(err.to_string()))?;

    let day = day
        .parse::<u8>()
        .map_err(|err| malformed(format!("invalid day of week `{day}`: {err}")))?;

    let start = NaiveTime::parse_from_str(start, "%H:%M")
        .map_err(|err| malformed(format!("invalid start time `{start}`: {err}")))?;

    let duration = duration
        .parse::<u32>()
        .map_err(|err| malformed(format!("invalid duration `{duration}`: {err}")))?;

    Event::new(name, month, day, start, duration).map_err(|err| malformed(err.to_string()))
}

/// Adds every event read from `reader` to `calendar` and returns how many were
/// added. Stops at the first malformed line; events before it stay added.
pub fn load_events<R: BufRead>(reader: R, calendar: &mut Calendar) -> Result<usize, LoadError> {
    let mut added = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        calendar.add_event(parse_event(trimmed, idx + 1)?);
        added += 1;
    }

    debug!("loaded {added} events");
    Ok(added)
}

pub fn load_str<S: AsRef<str>>(source: S, calendar: &mut Calendar) -> Result<usize, LoadError> {
    load_events(source.as_ref().as_bytes(), calendar)
}
