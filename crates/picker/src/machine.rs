//! Step state machine: page rendering and token transitions.
//!
//! ```text
//!            SELECT YEAR          SELECT MONTH          SELECT DAY
//!   [YEAR] ──────────────► [MONTH] ──────────────► [DAY] ──────────► date
//!     ▲  ◄──────────────────  │ ▲ ◄──────────────────  │
//!     │     GOTO YEAR (up)    │ │    GOTO MONTH (up)    │
//!     └─ GOTO YEAR (page) ────┘ └─ GOTO DAY (page) ─────┘
//! ```
//!
//! A state is rebuilt from the tapped token on every request, so nothing
//! here holds data between calls.

use tgcal_calendar::{CalendarDate, CalendarError, DateUnit};
use tracing::{debug, error, trace};

use crate::bounds::DateBounds;
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::keyboard::{self, Button, Keyboard};
use crate::period::{self, Cell};
use crate::step::{Action, Step};
use crate::token::Token;

const WEEK: usize = 7;

/// The displayed page: which picker, at which granularity, around which date.
///
/// The anchor's calendar system is the system of the whole page; every
/// token the page emits carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarState {
    calendar_id: u32,
    step: Step,
    anchor: CalendarDate,
}

/// Result of applying one decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The tapped button was inert.
    Ignore,
    /// A new page must be shown.
    Render(CalendarState),
    /// A day was chosen; the session is over.
    Finish(CalendarDate),
}

impl CalendarState {
    /// Creates a state.
    pub fn new(calendar_id: u32, step: Step, anchor: CalendarDate) -> Self {
        Self {
            calendar_id,
            step,
            anchor,
        }
    }

    /// Returns the picker id.
    pub fn calendar_id(&self) -> u32 {
        self.calendar_id
    }

    /// Returns the displayed step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Returns the anchor date.
    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    /// Maps a decoded token onto the next state.
    ///
    /// `GOTO` repaints at the token's step and date, `SELECT` drills into the
    /// next finer step or finishes at [`Step::Day`], and `NOTHING` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::OutOfRange`] if the token's date lies outside
    /// `bounds`, and [`PickerError::Internal`] if a navigating token reaches
    /// this point without a step.
    pub fn transition(token: &Token, bounds: DateBounds) -> Result<Transition, PickerError> {
        let calendar_id = token.calendar_id();
        let date = token.date();
        if token.action() == Action::Nothing {
            trace!(calendar_id, action = %token.action(), "inert button");
            return Ok(Transition::Ignore);
        }
        let Some(step) = token.step() else {
            error!(calendar_id, action = %token.action(), "navigating token without a step");
            return Err(PickerError::Internal {
                reason: "navigating token without a step",
            });
        };
        if !bounds.contains(date) {
            debug!(calendar_id, %date, %bounds, "token date outside bounds");
            return Err(PickerError::OutOfRange { date, bounds });
        }

        let next = match (token.action(), step) {
            (Action::Goto, step) => Transition::Render(Self::new(calendar_id, step, date)),
            (Action::Select, Step::Year) => {
                let anchor = bounds.clamp(date.first_of_year())?;
                Transition::Render(Self::new(calendar_id, Step::Month, anchor))
            }
            (Action::Select, Step::Month) => {
                let anchor = bounds.clamp(date.first_of_month())?;
                Transition::Render(Self::new(calendar_id, Step::Day, anchor))
            }
            (Action::Select, Step::Day) => Transition::Finish(date),
            (Action::Nothing, _) => Transition::Ignore,
        };
        trace!(
            calendar_id,
            action = %token.action(),
            %step,
            system = %date.kind(),
            %date,
            "transition"
        );
        Ok(next)
    }

    /// Lays out the keyboard of this page.
    ///
    /// The grid comes first (preceded by a weekday header at
    /// [`Step::Day`]), followed by a navigation row of exactly three
    /// buttons: previous page, one level up, next page. The configured
    /// additional rows close the keyboard.
    pub fn render(&self, config: &PickerConfig, bounds: DateBounds) -> Keyboard {
        let mut keyboard = Keyboard::new();
        match self.step {
            Step::Year => {
                let cells = period::years(self.anchor, config.year_page_size(), bounds);
                let buttons = cells.map(|cell| {
                    self.cell_button(cell, config, |date| date.year().to_string())
                });
                keyboard.extend_rows(keyboard::rows(buttons, config.year_columns()));
            }
            Step::Month => {
                let locale = config.locale();
                let cells = period::months(self.anchor, bounds);
                let buttons = cells.map(|cell| {
                    self.cell_button(cell, config, |date| {
                        locale.month_name(date.kind(), date.month()).to_string()
                    })
                });
                keyboard.extend_rows(keyboard::rows(buttons, config.month_columns()));
            }
            Step::Day => {
                let header = config
                    .locale()
                    .weekday_headers(self.anchor.kind())
                    .into_iter()
                    .map(|name| Button::new(name, self.inert_token(None)))
                    .collect();
                keyboard.push_row(header);

                let mut cells: Vec<Cell> = period::days(self.anchor, bounds).collect();
                let trailing = (WEEK - cells.len() % WEEK) % WEEK;
                cells.extend(std::iter::repeat_n(None, trailing));
                let buttons = cells
                    .into_iter()
                    .map(|cell| self.cell_button(cell, config, |date| date.day().to_string()));
                keyboard.extend_rows(keyboard::rows(buttons, WEEK));
            }
        }
        keyboard.push_row(self.nav_row(config, bounds));
        keyboard.extend_rows(config.additional_buttons().iter().cloned());
        keyboard
    }

    fn inert_token(&self, step: Option<Step>) -> String {
        Token::inert(self.calendar_id, step, self.anchor).encode()
    }

    fn cell_button(
        &self,
        cell: Cell,
        config: &PickerConfig,
        label: impl Fn(CalendarDate) -> String,
    ) -> Button {
        match cell {
            Some(date) => Button::new(
                label(date),
                Token::select(self.calendar_id, self.step, date).encode(),
            ),
            None => Button::new(
                config.labels().empty_cell(self.step),
                self.inert_token(None),
            ),
        }
    }

    fn nav_row(&self, config: &PickerConfig, bounds: DateBounds) -> Vec<Button> {
        let labels = config.labels();
        let system = self.anchor.system();
        let (unit, amount) = self.page_shift(config);
        let (first, last) = self.page_span(config);

        let prev_edge = first.and_then(|first| system.shift(first, DateUnit::Day, -1));
        let prev = match prev_edge {
            Ok(edge) if bounds.is_at_or_after_min(edge) => {
                self.nav_target(unit, -amount, bounds).ok()
            }
            _ => None,
        };
        let next_edge = last.and_then(|last| system.shift(last, DateUnit::Day, 1));
        let next = match next_edge {
            Ok(edge) if bounds.is_at_or_before_max(edge) => {
                self.nav_target(unit, amount, bounds).ok()
            }
            _ => None,
        };

        let month_name = config
            .locale()
            .month_name(self.anchor.kind(), self.anchor.month());
        let middle_label = labels.middle(self.step, self.anchor.year(), month_name);
        let middle_token = match self.step.coarser() {
            Some(up) => Token::goto(self.calendar_id, up, self.anchor).encode(),
            None => self.inert_token(Some(self.step)),
        };

        vec![
            self.nav_button(prev, &labels.prev, &labels.empty_nav),
            Button::new(middle_label, middle_token),
            self.nav_button(next, &labels.next, &labels.empty_nav),
        ]
    }

    fn nav_button(&self, target: Option<CalendarDate>, label: &str, disabled: &str) -> Button {
        match target {
            Some(date) => Button::new(
                label,
                Token::goto(self.calendar_id, self.step, date).encode(),
            ),
            None => Button::new(disabled, self.inert_token(Some(self.step))),
        }
    }

    fn nav_target(
        &self,
        unit: DateUnit,
        amount: i32,
        bounds: DateBounds,
    ) -> Result<CalendarDate, CalendarError> {
        let shifted = self.anchor.system().shift(self.anchor, unit, amount)?;
        bounds.clamp(shifted)
    }

    /// Unit and size of one page turn.
    fn page_shift(&self, config: &PickerConfig) -> (DateUnit, i32) {
        match self.step {
            Step::Year => (
                DateUnit::Year,
                i32::try_from(config.year_page_size()).unwrap_or(i32::MAX),
            ),
            Step::Month => (DateUnit::Year, 1),
            Step::Day => (DateUnit::Month, 1),
        }
    }

    /// First and last day shown on this page.
    fn page_span(
        &self,
        config: &PickerConfig,
    ) -> (
        Result<CalendarDate, CalendarError>,
        Result<CalendarDate, CalendarError>,
    ) {
        let system = self.anchor.system();
        match self.step {
            Step::Year => {
                let years = period::year_page(self.anchor.year(), config.year_page_size());
                (
                    system.make(*years.start(), 1, 1),
                    system.make(*years.end(), 1, 1).map(CalendarDate::last_of_year),
                )
            }
            Step::Month => (
                Ok(self.anchor.first_of_year()),
                Ok(self.anchor.last_of_year()),
            ),
            Step::Day => (
                Ok(self.anchor.first_of_month()),
                Ok(self.anchor.last_of_month()),
            ),
        }
    }
}
