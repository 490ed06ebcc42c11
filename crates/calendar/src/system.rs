//! The calendar system interface shared by every date system.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::date::{CalendarDate, DateUnit};
use crate::error::CalendarError;
use crate::kind::CalendarKind;

/// Date arithmetic for one calendar system.
///
/// Implementors supply validation, month lengths, the week start and the
/// mapping onto the Gregorian day line; shifting, weekday alignment,
/// comparison and cross-system conversion are derived from those.
///
/// The trait is object safe so that callers can pick a system at runtime
/// through [`CalendarKind::system`].
pub trait CalendarSystem: fmt::Debug + Send + Sync {
    /// Returns the discriminator of this system.
    fn kind(&self) -> CalendarKind;

    /// Returns the current local date in this system.
    fn today(&self) -> CalendarDate;

    /// Validates a `(year, month, day)` triple and builds a date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`], [`CalendarError::InvalidDay`]
    /// or [`CalendarError::YearOutOfRange`] when the triple is not a date of
    /// this system.
    fn make(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError>;

    /// Returns the number of days in `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::YearOutOfRange`].
    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError>;

    /// Returns the first day of the week in this system.
    fn week_start(&self) -> Weekday;

    /// Maps a date of this system onto the Gregorian day line.
    fn to_gregorian(&self, date: CalendarDate) -> NaiveDate;

    /// Expresses a Gregorian day in this system.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the day falls outside
    /// the range this system supports.
    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError>;

    /// Builds a date, clamping `day` to the length of the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or year is invalid.
    fn make_clamped(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        let max_day = self.days_in_month(year, month)?;
        self.make(year, month, day.clamp(1, max_day))
    }

    /// Returns the column of the month's first day, counted from
    /// [`CalendarSystem::week_start`] (0..=6).
    fn first_weekday_of_month(&self, date: CalendarDate) -> u8 {
        let first = self.to_gregorian(date.first_of_month());
        let weekday = first.weekday().num_days_from_monday();
        let start = self.week_start().num_days_from_monday();
        ((weekday + 7 - start) % 7) as u8
    }

    /// Moves `date` by `amount` units.
    ///
    /// Year and month shifts keep the day of month where possible and clamp
    /// it into shorter months (Jan 31 + 1 month = Feb 28/29). Day shifts walk
    /// the Gregorian day line, so they are exact in every system. A date of
    /// another system is converted into this one first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] when the result cannot be
    /// represented.
    fn shift(
        &self,
        date: CalendarDate,
        unit: DateUnit,
        amount: i32,
    ) -> Result<CalendarDate, CalendarError> {
        let date = self.from_other_system(date)?;
        let out_of_range = || CalendarError::YearOutOfRange {
            year: date.year(),
            system: self.kind(),
        };
        match unit {
            DateUnit::Year => {
                let year = date.year().checked_add(amount).ok_or_else(out_of_range)?;
                self.make_clamped(year, date.month(), date.day())
            }
            DateUnit::Month => {
                let total = i64::from(date.year()) * 12
                    + i64::from(date.month() - 1)
                    + i64::from(amount);
                let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range())?;
                let month = (total.rem_euclid(12) + 1) as u8;
                self.make_clamped(year, month, date.day())
            }
            DateUnit::Day => {
                let shifted = self
                    .to_gregorian(date)
                    .checked_add_signed(TimeDelta::days(i64::from(amount)))
                    .ok_or_else(out_of_range)?;
                self.from_gregorian(shifted)
            }
        }
    }

    /// Orders two dates chronologically, whatever systems they use.
    fn compare(&self, a: CalendarDate, b: CalendarDate) -> Ordering {
        a.to_gregorian().cmp(&b.to_gregorian())
    }

    /// Converts a date of this system into the alternate system.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the alternate system
    /// cannot represent the day.
    fn to_other_system(&self, date: CalendarDate) -> Result<CalendarDate, CalendarError> {
        date.convert(self.kind().other())
    }

    /// Converts a date of any system into this one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if this system cannot
    /// represent the day.
    fn from_other_system(&self, date: CalendarDate) -> Result<CalendarDate, CalendarError> {
        date.convert(self.kind())
    }
}
