use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::ParseMonthError;

pub const MONTH_COUNT: usize = 12;

/// Calendar month. Variant order is the canonical cycle order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
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
    pub const ALL: [Month; MONTH_COUNT] = [
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

    /// Zero-based position in the cycle (January = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month at `index`, taken modulo 12.
    pub fn from_index(index: usize) -> Month {
        Month::ALL[index % MONTH_COUNT]
    }

    /// Month at `index`, or `None` past December.
    pub fn at_position(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }

    /// Steps around the cycle; negative offsets go backwards.
    pub fn offset(self, delta: i64) -> Month {
        let index = (self.index() as i64 + delta).rem_euclid(MONTH_COUNT as i64);
        Month::ALL[index as usize]
    }

    pub fn succ(self) -> Month {
        self.offset(1)
    }

    pub fn pred(self) -> Month {
        self.offset(-1)
    }

    pub fn from_date<D: Datelike>(date: &D) -> Month {
        Month::from_index(date.month0() as usize)
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Capitalized name for headers, e.g. "March".
    pub fn display_name(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Accepts full names, three-letter abbreviations and 1-based numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        if let Ok(number) = input.parse::<usize>() {
            return match number {
                1..=12 => Ok(Month::from_index(number - 1)),
                _ => Err(ParseMonthError(s.to_string())),
            };
        }
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name() == input || (input.len() == 3 && m.name().starts_with(&input)))
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}
