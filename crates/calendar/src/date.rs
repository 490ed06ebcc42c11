//! Calendar-tagged date value.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::kind::CalendarKind;
use crate::system::CalendarSystem;

/// Granularity used when shifting dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// Whole years; the day is clamped into short months.
    Year,
    /// Whole months; the day is clamped into short months.
    Month,
    /// Single days.
    Day,
}

/// A valid date in a specific calendar system.
///
/// Values are only produced by [`CalendarSystem::make`] and the other
/// system operations, so the `(year, month, day)` triple is always a real
/// date of [`CalendarDate::kind`]. Year, month and day are numbered in that
/// system, never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    kind: CalendarKind,
    year: i32,
    month: u8,
    day: u8,
}

/// Dates of the same system order chronologically; dates of different
/// systems are incomparable here (use [`CalendarSystem::compare`]).
impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.kind != other.kind {
            return None;
        }
        Some((self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)))
    }
}

impl CalendarDate {
    /// Creates a date in the given system.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the triple is not a date of `kind`.
    pub fn new(kind: CalendarKind, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        kind.system().make(year, month, day)
    }

    /// Builds a date whose triple has already been validated by `kind`'s rules.
    pub(crate) fn from_parts(kind: CalendarKind, year: i32, month: u8, day: u8) -> Self {
        Self {
            kind,
            year,
            month,
            day,
        }
    }

    /// Returns the calendar system this date is expressed in.
    pub fn kind(self) -> CalendarKind {
        self.kind
    }

    /// Returns the arithmetic implementation for this date's system.
    pub fn system(self) -> &'static dyn CalendarSystem {
        self.kind.system()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self { day: 1, ..self }
    }

    /// Returns the first day of this date's year.
    pub fn first_of_year(self) -> Self {
        Self {
            month: 1,
            day: 1,
            ..self
        }
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        // A valid date's year is always inside its system's range.
        self.system()
            .days_in_month(self.year, self.month)
            .expect("CalendarDate always holds a supported year")
    }

    /// Returns the last day of this date's month.
    pub fn last_of_month(self) -> Self {
        Self {
            day: self.days_in_month(),
            ..self
        }
    }

    /// Returns the last day of this date's year.
    pub fn last_of_year(self) -> Self {
        Self {
            month: 12,
            day: 1,
            ..self
        }
        .last_of_month()
    }

    /// Returns the same day on the Gregorian day line.
    pub fn to_gregorian(self) -> NaiveDate {
        self.system().to_gregorian(self)
    }

    /// Re-expresses this date in another calendar system.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the day cannot be
    /// represented in `kind`.
    pub fn convert(self, kind: CalendarKind) -> Result<Self, CalendarError> {
        if kind == self.kind {
            return Ok(self);
        }
        kind.system().from_gregorian(self.to_gregorian())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
