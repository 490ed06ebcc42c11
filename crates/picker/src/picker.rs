//! Public entry point: build the first page, process taps.

use tgcal_calendar::CalendarDate;
use tracing::debug;

use crate::bounds::DateBounds;
use crate::config::PickerConfig;
use crate::error::{PickerError, TokenError};
use crate::keyboard::Keyboard;
use crate::machine::{CalendarState, Transition};
use crate::step::Step;
use crate::token::{self, Token};

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Buttons to show.
    pub keyboard: Keyboard,
    /// Granularity of the page.
    pub step: Step,
}

/// What a tap led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The button was inert; nothing to update.
    Ignored,
    /// Replace the keyboard with this page.
    Page(Page),
    /// The user picked a day.
    Selected(CalendarDate),
}

impl Outcome {
    /// Splits the outcome into `(selected date, keyboard, step)`.
    ///
    /// At most one of the date and the keyboard is `Some`; both are `None`
    /// for an inert tap.
    pub fn into_parts(self) -> (Option<CalendarDate>, Option<Keyboard>, Option<Step>) {
        match self {
            Outcome::Ignored => (None, None, None),
            Outcome::Page(page) => (None, Some(page.keyboard), Some(page.step)),
            Outcome::Selected(date) => (Some(date), None, Some(Step::Day)),
        }
    }
}

/// A date picker bound to one configuration.
///
/// The picker holds no session state: every call either starts from the
/// configuration or from the tapped token, so one instance can serve any
/// number of chats concurrently.
///
/// # Example
///
/// ```
/// use tgcal_calendar::{CalendarDate, CalendarKind};
/// use tgcal_picker::{DatePicker, Outcome, PickerConfig, Step};
///
/// let today = CalendarDate::new(CalendarKind::Gregorian, 2024, 6, 15).unwrap();
/// let picker = DatePicker::new(PickerConfig::new().with_current_date(Some(today))).unwrap();
///
/// let page = picker.build(None).unwrap();
/// assert_eq!(page.step, Step::Year);
///
/// let outcome = picker.process("CALENDAR_0_g_SELECT_DAY_2024_6_15").unwrap();
/// assert_eq!(outcome, Outcome::Selected(today));
/// ```
#[derive(Debug, Clone)]
pub struct DatePicker {
    config: PickerConfig,
    bounds: DateBounds,
}

impl DatePicker {
    /// Creates a picker.
    ///
    /// # Errors
    ///
    /// Returns the first problem [`PickerConfig::validate`] finds.
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        let bounds = config.bounds()?;
        Ok(Self { config, bounds })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Returns the selectable range.
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// Renders the first page, at [`Step::Year`] unless `step` says otherwise.
    ///
    /// The anchor is the configured current date (or today) expressed in the
    /// configured calendar system and moved into the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidDate`] if the anchor cannot be expressed
    /// in the configured system.
    pub fn build(&self, step: Option<Step>) -> Result<Page, PickerError> {
        let system = self.config.calendar_system().system();
        let anchor = match self.config.current_date() {
            Some(date) => system.from_other_system(date)?,
            None => system.today(),
        };
        let anchor = self.bounds.clamp(anchor)?;
        let state = CalendarState::new(
            self.config.calendar_id(),
            step.unwrap_or(Step::Year),
            anchor,
        );
        Ok(self.page(state))
    }

    /// Applies a tapped token.
    ///
    /// The token's own calendar system tag decides how its date is read and
    /// which system the next page uses.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::MalformedToken`] if the token cannot be decoded
    /// or belongs to another picker, [`PickerError::OutOfRange`] if its date
    /// lies outside the bounds. All of these leave nothing to undo; the
    /// caller can acknowledge the tap and carry on.
    pub fn process(&self, data: &str) -> Result<Outcome, PickerError> {
        let token = Token::decode(data).inspect_err(|err| {
            debug!(calendar_id = self.config.calendar_id(), %err, "rejected token");
        })?;
        if token.calendar_id() != self.config.calendar_id() {
            debug!(
                calendar_id = self.config.calendar_id(),
                found = token.calendar_id(),
                "token for another picker"
            );
            return Err(TokenError::ForeignCalendar {
                expected: self.config.calendar_id(),
                found: token.calendar_id(),
            }
            .into());
        }

        let outcome = match CalendarState::transition(&token, self.bounds)? {
            Transition::Ignore => Outcome::Ignored,
            Transition::Render(state) => Outcome::Page(self.page(state)),
            Transition::Finish(date) => Outcome::Selected(date),
        };
        Ok(outcome)
    }

    /// Returns `true` if `data` is a token of this picker.
    pub fn is_own_token(&self, data: &str) -> bool {
        token::is_own_token(data, self.config.calendar_id())
    }

    fn page(&self, state: CalendarState) -> Page {
        Page {
            keyboard: state.render(&self.config, self.bounds),
            step: state.step(),
        }
    }
}
