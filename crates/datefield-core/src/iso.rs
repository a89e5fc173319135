//! ISO date and month values.
//!
//! Dates are limited to four-digit years and months to
//! [`YearMonthIso::MIN`]..=[`YearMonthIso::MAX`], so every cell of a month
//! grid, spill-over weeks included, formats as a fixed-width ISO string.
//! Within those bounds ordering by value matches lexical ordering.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::FieldError;

/// A calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateIso(NaiveDate);

/// Years a [`DateIso`] may fall in.
const DATE_YEARS: RangeInclusive<i32> = 0..=9999;

impl DateIso {
    /// Create a date from its components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| Self::try_from(date).ok())
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The month this date falls in, clamped to the browsable range.
    pub fn month_iso(&self) -> YearMonthIso {
        YearMonthIso::containing(self.0)
    }
}

impl TryFrom<NaiveDate> for DateIso {
    type Error = FieldError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if DATE_YEARS.contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(FieldError::InvalidDate(date.to_string()))
        }
    }
}

impl fmt::Display for DateIso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateIso {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject non-padded forms such as "2026-1-5" that chrono would accept.
        if s.len() != 10 {
            return Err(FieldError::InvalidDate(s.to_string()));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| FieldError::InvalidDate(s.to_string()))?;
        Self::try_from(date)
    }
}

impl Serialize for DateIso {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateIso {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar month in `YYYY-MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonthIso {
    year: i32,
    month: u32,
}

impl YearMonthIso {
    /// Earliest browsable month.
    pub const MIN: Self = Self { year: 1, month: 1 };
    /// Latest browsable month.
    pub const MAX: Self = Self { year: 9998, month: 12 };

    /// Create a month, returning `None` when `month` is not in `1..=12` or
    /// the month lies outside [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let candidate = Self { year, month };
        ((1..=12).contains(&month) && (Self::MIN..=Self::MAX).contains(&candidate))
            .then_some(candidate)
    }

    /// The browsable month containing `date`, clamped to the range ends.
    pub(crate) fn containing(date: NaiveDate) -> Self {
        Self::from_index(Self::month_index(date.year(), date.month()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month `delta` months away (negative goes back), stopping at
    /// [`MIN`](Self::MIN) and [`MAX`](Self::MAX).
    pub fn shifted(&self, delta: i32) -> Self {
        Self::from_index(Self::month_index(self.year, self.month) + i64::from(delta))
    }

    fn month_index(year: i32, month: u32) -> i64 {
        i64::from(year) * 12 + i64::from(month) - 1
    }

    /// Month for a month index, clamped to the browsable range.
    fn from_index(idx: i64) -> Self {
        let idx = idx.clamp(
            Self::month_index(Self::MIN.year, Self::MIN.month),
            Self::month_index(Self::MAX.year, Self::MAX.month),
        );
        // The clamp keeps both parts well inside i32/u32.
        Self {
            year: idx.div_euclid(12) as i32,
            month: idx.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// First day of the month.
    pub fn first_day(&self) -> Option<DateIso> {
        DateIso::from_ymd(self.year, self.month, 1)
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for YearMonthIso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonthIso {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FieldError::InvalidMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for YearMonthIso {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonthIso {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
