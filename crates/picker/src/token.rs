//! Callback token codec.
//!
//! A token is the whole picker state carried on a button:
//!
//! ```text
//! CALENDAR_<calendar_id>_<system>_<action>_<step>_<year>_<month>_<day>
//! ```
//!
//! `system` is the one-character calendar tag (`g` or `j`) and is required
//! on every token. `step` is empty only on inert `NOTHING` buttons. The
//! date is numbered in the token's own calendar system.

use std::fmt;
use std::str::FromStr;

use tgcal_calendar::{CalendarDate, CalendarKind};

use crate::error::TokenError;
use crate::step::{Action, Step};

/// Leading field of every calendar token.
pub const TOKEN_PREFIX: &str = "CALENDAR";

/// Longest token the hosting platform accepts as callback data.
pub const MAX_TOKEN_LEN: usize = 64;

const SEPARATOR: char = '_';
const FIELD_COUNT: usize = 8;

/// Decoded button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    calendar_id: u32,
    action: Action,
    step: Option<Step>,
    date: CalendarDate,
}

impl Token {
    /// Creates a navigation token that repaints `step` at `date`.
    pub fn goto(calendar_id: u32, step: Step, date: CalendarDate) -> Self {
        Self {
            calendar_id,
            action: Action::Goto,
            step: Some(step),
            date,
        }
    }

    /// Creates a token that selects the `step` cell containing `date`.
    pub fn select(calendar_id: u32, step: Step, date: CalendarDate) -> Self {
        Self {
            calendar_id,
            action: Action::Select,
            step: Some(step),
            date,
        }
    }

    /// Creates a token for a button that does nothing when tapped.
    pub fn inert(calendar_id: u32, step: Option<Step>, date: CalendarDate) -> Self {
        Self {
            calendar_id,
            action: Action::Nothing,
            step,
            date,
        }
    }

    /// Returns the id of the picker that emitted the token.
    pub fn calendar_id(&self) -> u32 {
        self.calendar_id
    }

    /// Returns the calendar system the date is expressed in.
    pub fn calendar_system(&self) -> CalendarKind {
        self.date.kind()
    }

    /// Returns the action.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns the step; always `Some` unless the action is
    /// [`Action::Nothing`].
    pub fn step(&self) -> Option<Step> {
        self.step
    }

    /// Returns the carried date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Serializes the token into its wire form.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parses a wire token.
    ///
    /// The date triple is validated against the token's calendar system; a
    /// triple that is not a real date fails with
    /// [`TokenError::InvalidDate`]. Decoding never panics, whatever the input.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] describing the first malformed field.
    pub fn decode(data: &str) -> Result<Self, TokenError> {
        let fields: Vec<&str> = data.split(SEPARATOR).collect();
        if fields[0] != TOKEN_PREFIX {
            return Err(TokenError::NotACalendarToken);
        }
        if fields.len() != FIELD_COUNT {
            return Err(TokenError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let calendar_id: u32 = parse_number("calendar_id", fields[1])?;
        let kind = match fields[2] {
            "" => return Err(TokenError::MissingSystem),
            tag => CalendarKind::from_tag(tag).ok_or_else(|| TokenError::UnknownSystem {
                tag: tag.to_string(),
            })?,
        };
        let action = Action::from_tag(fields[3]).ok_or_else(|| TokenError::UnknownAction {
            tag: fields[3].to_string(),
        })?;
        let step = match fields[4] {
            "" => None,
            tag => Some(Step::from_tag(tag).ok_or_else(|| TokenError::UnknownStep {
                tag: tag.to_string(),
            })?),
        };
        if step.is_none() && action != Action::Nothing {
            return Err(TokenError::MissingStep { action });
        }

        let year: i32 = parse_number("year", fields[5])?;
        let month: u8 = parse_number("month", fields[6])?;
        let day: u8 = parse_number("day", fields[7])?;
        let date = kind.system().make(year, month, day)?;

        Ok(Self {
            calendar_id,
            action,
            step,
            date,
        })
    }
}

/// Parses a numeric field, accepting only the form `encode` writes.
fn parse_number<T: FromStr + ToString>(field: &'static str, value: &str) -> Result<T, TokenError> {
    match value.parse::<T>() {
        Ok(parsed) if parsed.to_string() == value => Ok(parsed),
        _ => Err(TokenError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

/// Returns `true` if `data` was emitted by the picker with `calendar_id`.
///
/// Only the prefix is checked, so this is a cheap routing predicate; the
/// rest of the token is validated by [`Token::decode`].
pub fn is_own_token(data: &str, calendar_id: u32) -> bool {
    data.strip_prefix(TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .and_then(|rest| rest.split(SEPARATOR).next())
        .is_some_and(|id| id == calendar_id.to_string())
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.date.ymd();
        write!(
            f,
            "{TOKEN_PREFIX}_{}_{}_{}_{}_{year}_{month}_{day}",
            self.calendar_id,
            self.date.kind().tag(),
            self.action.tag(),
            self.step.map_or("", Step::tag),
        )
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use tgcal_calendar::CalendarError;

    use super::*;

    fn g(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(CalendarKind::Gregorian, y, m, d).unwrap()
    }

    fn j(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(CalendarKind::Jalali, y, m, d).unwrap()
    }

    #[test]
    fn encode_select() {
        let token = Token::select(0, Step::Year, g(2024, 1, 1));
        assert_eq!(token.encode(), "CALENDAR_0_g_SELECT_YEAR_2024_1_1");
    }

    #[test]
    fn encode_inert_without_step() {
        let token = Token::inert(3, None, j(1403, 1, 1));
        assert_eq!(token.encode(), "CALENDAR_3_j_NOTHING__1403_1_1");
    }

    #[test]
    fn decode_select() {
        let token = Token::decode("CALENDAR_0_g_SELECT_DAY_2024_6_15").unwrap();
        assert_eq!(token.calendar_id(), 0);
        assert_eq!(token.calendar_system(), CalendarKind::Gregorian);
        assert_eq!(token.action(), Action::Select);
        assert_eq!(token.step(), Some(Step::Day));
        assert_eq!(token.date(), g(2024, 6, 15));
    }

    #[test]
    fn round_trip_each_shape() {
        let tokens = [
            Token::goto(7, Step::Month, j(1403, 12, 30)),
            Token::select(0, Step::Day, g(2024, 2, 29)),
            Token::inert(1, Some(Step::Year), g(1999, 12, 31)),
            Token::inert(1, None, j(1, 1, 1)),
            Token::goto(0, Step::Year, g(-44, 3, 15)),
        ];
        for token in tokens {
            assert_eq!(Token::decode(&token.encode()).unwrap(), token);
            assert_eq!(token.encode().parse::<Token>().unwrap(), token);
        }
    }

    #[test]
    fn longest_tokens_fit_callback_limit() {
        let token = Token::select(u32::MAX, Step::Month, g(-99999, 12, 31));
        assert!(token.encode().len() <= MAX_TOKEN_LEN, "{}", token.encode());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Token::decode("garbage"), Err(TokenError::NotACalendarToken));
        assert_eq!(Token::decode(""), Err(TokenError::NotACalendarToken));
        assert_eq!(
            Token::decode("cbcal_0_s_y_2024_1_1"),
            Err(TokenError::NotACalendarToken)
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        // The legacy layout without a system tag has seven fields.
        assert_eq!(
            Token::decode("CALENDAR_0_SELECT_DAY_2024_6_15"),
            Err(TokenError::FieldCount {
                expected: 8,
                found: 7
            })
        );
        assert!(matches!(
            Token::decode("CALENDAR_0_g_SELECT_DAY_2024_6_15_1"),
            Err(TokenError::FieldCount { found: 9, .. })
        ));
    }

    #[test]
    fn rejects_non_canonical_numbers() {
        for (data, field) in [
            ("CALENDAR_+0_g_SELECT_DAY_2024_6_15", "calendar_id"),
            ("CALENDAR_00_g_SELECT_DAY_2024_6_15", "calendar_id"),
            ("CALENDAR_0_g_SELECT_DAY_+2024_6_15", "year"),
            ("CALENDAR_0_g_SELECT_DAY_-0_6_15", "year"),
            ("CALENDAR_0_g_SELECT_DAY_2024_06_15", "month"),
            ("CALENDAR_0_g_SELECT_DAY_2024_6_015", "day"),
        ] {
            assert!(
                matches!(
                    Token::decode(data),
                    Err(TokenError::InvalidNumber { field: f, .. }) if f == field
                ),
                "{data}"
            );
        }
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            Token::decode("CALENDAR_x_g_SELECT_DAY_2024_6_15"),
            Err(TokenError::InvalidNumber {
                field: "calendar_id",
                value: "x".to_string()
            })
        );
        assert!(matches!(
            Token::decode("CALENDAR_0_g_SELECT_DAY_2024_6_1.5"),
            Err(TokenError::InvalidNumber { field: "day", .. })
        ));
        assert!(matches!(
            Token::decode("CALENDAR_0_g_SELECT_DAY_2024_300_1"),
            Err(TokenError::InvalidNumber { field: "month", .. })
        ));
        assert!(matches!(
            Token::decode("CALENDAR_-1_g_SELECT_DAY_2024_6_1"),
            Err(TokenError::InvalidNumber {
                field: "calendar_id",
                ..
            })
        ));
    }

    #[test]
    fn rejects_missing_or_unknown_tags() {
        assert_eq!(
            Token::decode("CALENDAR_0__SELECT_DAY_2024_6_15"),
            Err(TokenError::MissingSystem)
        );
        assert_eq!(
            Token::decode("CALENDAR_0_h_SELECT_DAY_2024_6_15"),
            Err(TokenError::UnknownSystem {
                tag: "h".to_string()
            })
        );
        assert_eq!(
            Token::decode("CALENDAR_0_g_JUMP_DAY_2024_6_15"),
            Err(TokenError::UnknownAction {
                tag: "JUMP".to_string()
            })
        );
        assert_eq!(
            Token::decode("CALENDAR_0_g_GOTO_WEEK_2024_6_15"),
            Err(TokenError::UnknownStep {
                tag: "WEEK".to_string()
            })
        );
    }

    #[test]
    fn rejects_stepless_navigation() {
        assert_eq!(
            Token::decode("CALENDAR_0_g_GOTO__2024_6_15"),
            Err(TokenError::MissingStep {
                action: Action::Goto
            })
        );
        assert!(Token::decode("CALENDAR_0_g_NOTHING__2024_6_15").is_ok());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            Token::decode("CALENDAR_0_j_SELECT_DAY_1402_12_30"),
            Err(TokenError::InvalidDate(CalendarError::InvalidDay {
                year: 1402,
                month: 12,
                day: 30,
                max_day: 29,
            }))
        );
        assert!(matches!(
            Token::decode("CALENDAR_0_g_SELECT_DAY_2023_2_29"),
            Err(TokenError::InvalidDate(_))
        ));
    }

    #[test]
    fn own_token_routing() {
        assert!(is_own_token("CALENDAR_0_g_SELECT_DAY_2024_6_15", 0));
        assert!(!is_own_token("CALENDAR_0_g_SELECT_DAY_2024_6_15", 1));
        assert!(!is_own_token("CALENDAR_10_g_SELECT_DAY_2024_6_15", 1));
        assert!(is_own_token("CALENDAR_10_g_SELECT_DAY_2024_6_15", 10));
        assert!(!is_own_token("CALENDAR0_g", 0));
        assert!(!is_own_token("garbage", 0));
        // Routing only looks at the prefix.
        assert!(is_own_token("CALENDAR_5", 5));
    }
}
