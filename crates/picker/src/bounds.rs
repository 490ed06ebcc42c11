//! Inclusive selectable range, independent of calendar system.

use std::fmt;

use chrono::NaiveDate;
use tgcal_calendar::{CalendarDate, CalendarError};

use crate::error::PickerError;

/// Optional inclusive `[min, max]` bounds.
///
/// Bounds are stored on the Gregorian day line so a date of either calendar
/// system can be tested against them; a bound given as a Jalali date means
/// the same day when the picker shows Gregorian pages, and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl DateBounds {
    /// Creates bounds from dates in any calendar system.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvertedBounds`] if `min` lies after `max`.
    pub fn new(
        min: Option<CalendarDate>,
        max: Option<CalendarDate>,
    ) -> Result<Self, PickerError> {
        let min = min.map(CalendarDate::to_gregorian);
        let max = max.map(CalendarDate::to_gregorian);
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(PickerError::InvertedBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Returns bounds that admit every date.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns the lower bound.
    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    /// Returns `true` if `date` is not before the lower bound.
    pub fn is_at_or_after_min(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| date.to_gregorian() >= min)
    }

    /// Returns `true` if `date` is not after the upper bound.
    pub fn is_at_or_before_max(&self, date: CalendarDate) -> bool {
        self.max.is_none_or(|max| date.to_gregorian() <= max)
    }

    /// Returns `true` if `date` lies inside the bounds.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.is_at_or_after_min(date) && self.is_at_or_before_max(date)
    }

    /// Returns `true` if the period `[first, last]` shares a day with the bounds.
    pub fn overlaps(&self, first: CalendarDate, last: CalendarDate) -> bool {
        self.is_at_or_after_min(last) && self.is_at_or_before_max(first)
    }

    /// Moves `date` onto the nearest bound if it lies outside, keeping its
    /// calendar system.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the bound cannot be
    /// expressed in `date`'s system.
    pub fn clamp(&self, date: CalendarDate) -> Result<CalendarDate, CalendarError> {
        let system = date.system();
        match (self.min, self.max) {
            (Some(min), _) if date.to_gregorian() < min => system.from_gregorian(min),
            (_, Some(max)) if date.to_gregorian() > max => system.from_gregorian(max),
            _ => Ok(date),
        }
    }
}

impl fmt::Display for DateBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write!(f, "[{min}, ")?,
            None => f.write_str("[-inf, ")?,
        }
        match self.max {
            Some(max) => write!(f, "{max}]"),
            None => f.write_str("+inf]"),
        }
    }
}
