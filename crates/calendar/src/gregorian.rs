//! Proleptic Gregorian calendar backed by `chrono`.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::kind::CalendarKind;
use crate::system::CalendarSystem;

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The Gregorian calendar with a Monday week start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar;

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl GregorianCalendar {
    fn check_year(year: i32) -> Result<(), CalendarError> {
        if (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            Ok(())
        } else {
            Err(CalendarError::YearOutOfRange {
                year,
                system: CalendarKind::Gregorian,
            })
        }
    }
}

impl CalendarSystem for GregorianCalendar {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
    }

    fn today(&self) -> CalendarDate {
        let today = Local::now().date_naive();
        CalendarDate::from_parts(
            CalendarKind::Gregorian,
            today.year(),
            today.month() as u8,
            today.day() as u8,
        )
    }

    fn make(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        let max_day = self.days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        // chrono's range ends mid-year at both extremes.
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or(
            CalendarError::YearOutOfRange {
                year,
                system: CalendarKind::Gregorian,
            },
        )?;
        Ok(CalendarDate::from_parts(
            CalendarKind::Gregorian,
            year,
            month,
            day,
        ))
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Self::check_year(year)?;
        if month == 2 && is_leap_year(year) {
            Ok(29)
        } else {
            Ok(DAYS_PER_MONTH[month as usize])
        }
    }

    fn week_start(&self) -> Weekday {
        Weekday::Mon
    }

    fn to_gregorian(&self, date: CalendarDate) -> NaiveDate {
        debug_assert_eq!(date.kind(), CalendarKind::Gregorian);
        NaiveDate::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
            .expect("CalendarDate always holds a valid Gregorian date")
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        Ok(CalendarDate::from_parts(
            CalendarKind::Gregorian,
            date.year(),
            date.month() as u8,
            date.day() as u8,
        ))
    }
}
