use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseMonthError;

/// One of the twelve calendar months, ordered January to December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Position in the year, `1` for January through `12` for December.
    pub const fn rank(self) -> u8 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Month::January => "JANUARY",
            Month::February => "FEBRUARY",
            Month::March => "MARCH",
            Month::April => "APRIL",
            Month::May => "MAY",
            Month::June => "JUNE",
            Month::July => "JULY",
            Month::August => "AUGUST",
            Month::September => "SEPTEMBER",
            Month::October => "OCTOBER",
            Month::November => "NOVEMBER",
            Month::December => "DECEMBER",
        }
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Accepts full names and three-letter abbreviations in any case, or a
    /// numeric rank between 1 and 12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(rank) = trimmed.parse::<u8>() {
            return Self::from_rank(rank).ok_or_else(|| ParseMonthError(trimmed.to_string()));
        }

        let upper = trimmed.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|month| month.name() == upper || (upper.len() == 3 && month.name().starts_with(&upper)))
            .ok_or_else(|| ParseMonthError(trimmed.to_string()))
    }
}

impl From<Month> for chrono::Month {
    fn from(month: Month) -> chrono::Month {
        match month {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Month {
        match month {
            chrono::Month::January => Month::January,
            chrono::Month::February => Month::February,
            chrono::Month::March => Month::March,
            chrono::Month::April => Month::April,
            chrono::Month::May => Month::May,
            chrono::Month::June => Month::June,
            chrono::Month::July => Month::July,
            chrono::Month::August => Month::August,
            chrono::Month::September => Month::September,
            chrono::Month::October => Month::October,
            chrono::Month::November => Month::November,
            chrono::Month::December => Month::December,
        }
    }
}
