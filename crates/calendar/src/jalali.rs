//! Solar hijri (Jalali) calendar.
//!
//! Leap years follow the arithmetic 33-year cycle with the published break
//! years, which matches the astronomical calendar for Jalali years -61..=3177.
//! Months 1-6 have 31 days, months 7-11 have 30 days and Esfand (month 12)
//! has 29 days, or 30 in a leap year.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::kind::CalendarKind;
use crate::system::CalendarSystem;

/// Jalali years at which the leap cycle is re-aligned. The last entry is the
/// first unsupported year.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Offset between Jalali and Gregorian year numbers around Nowruz.
const YEAR_OFFSET: i32 = 621;

/// Days from 1 Farvardin to 1 Mehr (six 31-day months).
const FIRST_HALF_DAYS: i64 = 186;

/// The Jalali calendar with a Saturday week start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JalaliCalendar;

/// Position of a Jalali year in the leap cycle.
#[derive(Debug, Clone, Copy)]
struct YearInfo {
    /// Years since the last leap year (0 = this year is leap).
    leap: i32,
    /// Gregorian year in which this Jalali year begins.
    gy: i32,
    /// March day of 1 Farvardin in `gy`.
    march: i32,
}

fn out_of_range(year: i32) -> CalendarError {
    CalendarError::YearOutOfRange {
        year,
        system: CalendarKind::Jalali,
    }
}

fn year_info(jy: i32) -> Result<YearInfo, CalendarError> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return Err(out_of_range(jy));
    }

    let gy = jy + YEAR_OFFSET;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearInfo { leap, gy, march })
}

fn nowruz(info: YearInfo) -> NaiveDate {
    NaiveDate::from_ymd_opt(info.gy, 3, info.march as u32)
        .expect("Nowruz of a supported year is a valid March day")
}

/// Returns `true` if the Jalali year has a 30-day Esfand.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] outside -61..=3177.
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    Ok(year_info(year)?.leap == 0)
}

impl CalendarSystem for JalaliCalendar {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Jalali
    }

    fn today(&self) -> CalendarDate {
        self.from_gregorian(chrono::Local::now().date_naive())
            .expect("the current date lies inside the supported Jalali range")
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
        Ok(CalendarDate::from_parts(CalendarKind::Jalali, year, month, day))
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        match month {
            1..=6 => year_info(year).map(|_| 31),
            7..=11 => year_info(year).map(|_| 30),
            12 => Ok(if is_leap_year(year)? { 30 } else { 29 }),
            _ => Err(CalendarError::InvalidMonth { month }),
        }
    }

    fn week_start(&self) -> Weekday {
        Weekday::Sat
    }

    fn to_gregorian(&self, date: CalendarDate) -> NaiveDate {
        debug_assert_eq!(date.kind(), CalendarKind::Jalali);
        let info = year_info(date.year()).expect("CalendarDate always holds a supported year");
        let month = i64::from(date.month());
        let month_start = if month <= 6 {
            (month - 1) * 31
        } else {
            FIRST_HALF_DAYS + (month - 7) * 30
        };
        let offset = month_start + i64::from(date.day()) - 1;
        nowruz(info)
            .checked_add_signed(TimeDelta::days(offset))
            .expect("a day within a Jalali year maps onto chrono's range")
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        let mut jy = date.year() - YEAR_OFFSET;
        let info = year_info(jy)?;
        let mut k = (date - nowruz(info)).num_days();

        if k >= 0 {
            if k < FIRST_HALF_DAYS {
                let month = 1 + k / 31;
                let day = k % 31 + 1;
                return self.make(jy, month as u8, day as u8);
            }
            k -= FIRST_HALF_DAYS;
        } else {
            // Before Nowruz: the tail of the previous Jalali year.
            jy -= 1;
            k += 179;
            if info.leap == 1 {
                k += 1;
            }
        }

        let month = 7 + k / 30;
        let day = k % 30 + 1;
        self.make(jy, month as u8, day as u8)
    }
}
