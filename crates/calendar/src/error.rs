//! Error types for the tgcal-calendar crate.

use crate::kind::CalendarKind;

/// Error type for all fallible operations in the tgcal-calendar crate.
///
/// Every variant describes a year/month/day triple (or a system name) that
/// the selected calendar system cannot represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The year of the rejected date.
        year: i32,
        /// The month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a year cannot be represented by the calendar system.
    #[error("year {year} is outside the supported range of the {system} calendar")]
    YearOutOfRange {
        /// The unsupported year, numbered in `system`.
        year: i32,
        /// The calendar system that rejected the year.
        system: CalendarKind,
    },

    /// Returned when a calendar system name or tag is not recognised.
    #[error("unknown calendar system: {name:?}")]
    UnknownSystem {
        /// The unrecognised name.
        name: String,
    },
}
