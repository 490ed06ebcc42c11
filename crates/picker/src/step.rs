//! Picker granularity and button actions.

use std::fmt;

use serde::Serialize;
use tgcal_calendar::DateUnit;

/// Granularity of the page currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// A page of years.
    Year,
    /// The twelve months of one year.
    Month,
    /// The days of one month.
    Day,
}

impl Step {
    /// All steps from coarsest to finest.
    pub const ALL: [Step; 3] = [Step::Year, Step::Month, Step::Day];

    /// Returns the wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            Step::Year => "YEAR",
            Step::Month => "MONTH",
            Step::Day => "DAY",
        }
    }

    /// Parses a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "YEAR" => Some(Step::Year),
            "MONTH" => Some(Step::Month),
            "DAY" => Some(Step::Day),
            _ => None,
        }
    }

    /// Returns the lowercase name, suitable for prompts like "Select year".
    pub fn name(self) -> &'static str {
        match self {
            Step::Year => "year",
            Step::Month => "month",
            Step::Day => "day",
        }
    }

    /// Returns the step a selection drills into, `None` at [`Step::Day`].
    pub fn finer(self) -> Option<Step> {
        match self {
            Step::Year => Some(Step::Month),
            Step::Month => Some(Step::Day),
            Step::Day => None,
        }
    }

    /// Returns the step the middle navigation button leads to, `None` at
    /// [`Step::Year`].
    pub fn coarser(self) -> Option<Step> {
        match self {
            Step::Year => None,
            Step::Month => Some(Step::Year),
            Step::Day => Some(Step::Month),
        }
    }

    /// Returns the date unit one cell of this step spans.
    pub fn unit(self) -> DateUnit {
        match self {
            Step::Year => DateUnit::Year,
            Step::Month => DateUnit::Month,
            Step::Day => DateUnit::Day,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a button does when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Inert label or disabled cell.
    Nothing,
    /// Repaint a page at the token's step and date.
    Goto,
    /// Choose the cell: drill into a finer step, or finish at [`Step::Day`].
    Select,
}

impl Action {
    /// Returns the wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            Action::Nothing => "NOTHING",
            Action::Goto => "GOTO",
            Action::Select => "SELECT",
        }
    }

    /// Parses a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NOTHING" => Some(Action::Nothing),
            "GOTO" => Some(Action::Goto),
            "SELECT" => Some(Action::Select),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
