//! Calendar system discriminator.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::gregorian::GregorianCalendar;
use crate::jalali::JalaliCalendar;
use crate::system::CalendarSystem;

/// Identifies which date-arithmetic rules a date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarKind {
    /// The proleptic Gregorian calendar.
    #[default]
    Gregorian,
    /// The solar hijri (Jalali, Persian) calendar.
    Jalali,
}

impl CalendarKind {
    /// Both supported systems, Gregorian first.
    pub const ALL: [CalendarKind; 2] = [CalendarKind::Gregorian, CalendarKind::Jalali];

    /// Returns the single-character wire tag (`g` or `j`).
    pub fn tag(self) -> char {
        match self {
            CalendarKind::Gregorian => 'g',
            CalendarKind::Jalali => 'j',
        }
    }

    /// Parses a wire tag produced by [`CalendarKind::tag`].
    ///
    /// Only the exact single-character tags are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "g" => Some(CalendarKind::Gregorian),
            "j" => Some(CalendarKind::Jalali),
            _ => None,
        }
    }

    /// Returns the lowercase system name.
    pub fn name(self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Jalali => "jalali",
        }
    }

    /// Returns the alternate system.
    pub fn other(self) -> Self {
        match self {
            CalendarKind::Gregorian => CalendarKind::Jalali,
            CalendarKind::Jalali => CalendarKind::Gregorian,
        }
    }

    /// Returns the arithmetic implementation for this system.
    pub fn system(self) -> &'static dyn CalendarSystem {
        match self {
            CalendarKind::Gregorian => &GregorianCalendar,
            CalendarKind::Jalali => &JalaliCalendar,
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gregorian" => Ok(CalendarKind::Gregorian),
            "j" | "jalali" | "persian" | "solar-hijri" => Ok(CalendarKind::Jalali),
            _ => Err(CalendarError::UnknownSystem {
                name: s.to_string(),
            }),
        }
    }
}
