//! Error types for the tgcal-picker crate.

use chrono::NaiveDate;
use tgcal_calendar::{CalendarDate, CalendarError};

use crate::bounds::DateBounds;
use crate::step::Action;

/// Reasons a callback string is rejected by the token decoder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    /// The string does not start with the calendar prefix.
    #[error("not a calendar token")]
    NotACalendarToken,

    /// The string has the prefix but the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },

    /// A numeric field does not hold an integer of the expected width.
    #[error("field {field} is not a canonical integer: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field contents.
        value: String,
    },

    /// The calendar system tag is empty.
    #[error("missing calendar system tag")]
    MissingSystem,

    /// The calendar system tag is not recognised.
    #[error("unknown calendar system tag: {tag:?}")]
    UnknownSystem {
        /// Raw tag.
        tag: String,
    },

    /// The action tag is not recognised.
    #[error("unknown action: {tag:?}")]
    UnknownAction {
        /// Raw tag.
        tag: String,
    },

    /// The step tag is not recognised.
    #[error("unknown step: {tag:?}")]
    UnknownStep {
        /// Raw tag.
        tag: String,
    },

    /// A navigating or selecting token carries no step.
    #[error("{action} token without a step")]
    MissingStep {
        /// The action that requires a step.
        action: Action,
    },

    /// The date triple is not a date of the token's calendar system.
    #[error("invalid date in token: {0}")]
    InvalidDate(#[from] CalendarError),

    /// The token belongs to another picker.
    #[error("token belongs to calendar {found}, expected {expected}")]
    ForeignCalendar {
        /// Calendar id of the receiving picker.
        expected: u32,
        /// Calendar id found in the token.
        found: u32,
    },
}

/// Error type for all fallible operations in the tgcal-picker crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickerError {
    /// A calendar system rejected a date.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] CalendarError),

    /// A callback string could not be decoded.
    #[error("malformed token: {0}")]
    MalformedToken(#[from] TokenError),

    /// A decoded date lies outside the picker's bounds.
    #[error("date {date} is outside the allowed range {bounds}")]
    OutOfRange {
        /// The rejected date.
        date: CalendarDate,
        /// The picker's bounds.
        bounds: DateBounds,
    },

    /// A locale key has no label table.
    #[error("unknown locale: {key:?}")]
    UnknownLocale {
        /// The unrecognised key.
        key: String,
    },

    /// The minimum date lies after the maximum date.
    #[error("min date {min} is after max date {max}")]
    InvertedBounds {
        /// Lower bound on the Gregorian day line.
        min: NaiveDate,
        /// Upper bound on the Gregorian day line.
        max: NaiveDate,
    },

    /// The year grid is empty or larger than a keyboard can hold.
    #[error("year grid must hold 1..={max} cells, got {rows}x{columns}", max = crate::config::MAX_YEAR_CELLS)]
    InvalidYearGrid {
        /// Configured rows.
        rows: usize,
        /// Configured columns.
        columns: usize,
    },

    /// The month grid width does not fit the 12 months.
    #[error("month grid must have 1..=12 columns, got {columns}")]
    InvalidMonthColumns {
        /// Configured columns.
        columns: usize,
    },

    /// The codec and the state machine disagree; this is a bug.
    #[error("internal state error: {reason}")]
    Internal {
        /// What went wrong.
        reason: &'static str,
    },
}

impl PickerError {
    /// Returns `false` only for internal contract violations.
    ///
    /// Every other error comes from user input (a stale or tampered button)
    /// or configuration, and the caller can answer it by acknowledging the
    /// tap or re-rendering with [`crate::DatePicker::build`].
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PickerError::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_error_messages() {
        assert_eq!(
            TokenError::FieldCount {
                expected: 8,
                found: 3
            }
            .to_string(),
            "expected 8 fields, found 3"
        );
        assert_eq!(
            TokenError::MissingStep {
                action: Action::Goto
            }
            .to_string(),
            "GOTO token without a step"
        );
        assert_eq!(
            TokenError::InvalidNumber {
                field: "year",
                value: "x".to_string()
            }
            .to_string(),
            "field year is not a canonical integer: \"x\""
        );
    }

    #[test]
    fn picker_error_wraps_token_error() {
        let err: PickerError = TokenError::NotACalendarToken.into();
        assert_eq!(err.to_string(), "malformed token: not a calendar token");
        assert!(err.is_recoverable());
    }

    #[test]
    fn internal_is_not_recoverable() {
        let err = PickerError::Internal {
            reason: "step missing",
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<TokenError>();
        assert_impl::<PickerError>();
    }
}
