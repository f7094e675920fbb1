use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

use crate::event::Event;
use crate::month::Month;

/// Events grouped by month.
///
/// Only months holding at least one event are present. Months iterate in
/// calendar order and each month's events are kept ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<Month, Vec<Event>>"))]
pub struct Calendar {
    months: BTreeMap<Month, Vec<Event>>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `event` into its month, right before the first stored event it
    /// precedes, or at the end when it precedes none of them.
    pub fn add_event(&mut self, event: Event) {
        let month = event.month();
        let events = self.months.entry(month).or_default();

        let position = events
            .iter()
            .position(|existing| event.precedes(existing))
            .unwrap_or(events.len());

        trace!("inserting {} into {month} at position {position}", event.name());
        events.insert(position, event);
    }

    /// Number of events stored for `month`, `0` when the month is absent.
    pub fn total_events_in_month(&self, month: Month) -> usize {
        self.months.get(&month).map_or(0, Vec::len)
    }

    /// Multi-line rendering: each present month's name followed by its events,
    /// one per line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Months whose event count equals the largest count in the calendar.
    ///
    /// Computed in a single pass: a strictly larger count restarts the set,
    /// an equal count joins it.
    pub fn months_with_most_events(&self) -> BTreeSet<Month> {
        let mut most = BTreeSet::new();
        let mut highest = 0;

        for (month, events) in &self.months {
            if events.len() > highest {
                highest = events.len();
                most.clear();
            }

            if events.len() == highest {
                most.insert(*month);
            }
        }

        most
    }

    /// Name of the longest event. The first one found wins on ties; empty when
    /// the calendar holds no events.
    pub fn longest_event(&self) -> &str {
        let mut longest: Option<&Event> = None;

        for event in self.months.values().flatten() {
            match longest {
                Some(current) if event.duration_minutes() <= current.duration_minutes() => {}
                _ => longest = Some(event),
            }
        }

        longest.map_or("", Event::name)
    }

    /// Removes every event falling on `day_of_week` within the given months
    /// and returns how many were removed. Months left empty are dropped;
    /// months not in the calendar are skipped.
    pub fn cancel_events(&mut self, months: &[Month], day_of_week: u8) -> usize {
        if !(1..=7).contains(&day_of_week) {
            warn!("ignoring cancellation for day of week {day_of_week}, expected 1..=7");
            return 0;
        }

        let mut removed = 0;

        for month in months {
            let Some(events) = self.months.get_mut(month) else {
                continue;
            };

            let before = events.len();
            events.retain(|event| event.day_of_week() != day_of_week);
            removed += before - events.len();

            if events.is_empty() {
                debug!("{month} has no events left, dropping it");
                self.months.remove(month);
            }
        }

        debug!("cancelled {removed} events on day {day_of_week}");
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total number of events across all months.
    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.keys().copied()
    }

    pub fn events_in(&self, month: Month) -> &[Event] {
        self.months.get(&month).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, &[Event])> + '_ {
        self.months
            .iter()
            .map(|(month, events)| (*month, events.as_slice()))
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (month, events) in &self.months {
            writeln!(f, "{month}")?;
            for event in events {
                writeln!(f, "  {event}")?;
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Calendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.months.serialize(serializer)
    }
}

impl Extend<Event> for Calendar {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        for event in iter {
            self.add_event(event);
        }
    }
}

impl FromIterator<Event> for Calendar {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        let mut calendar = Calendar::new();
        calendar.extend(iter);
        calendar
    }
}

impl From<BTreeMap<Month, Vec<Event>>> for Calendar {
    fn from(months: BTreeMap<Month, Vec<Event>>) -> Self {
        months.into_values().flatten().collect()
    }
}
