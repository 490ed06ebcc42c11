//! # tgcal-picker
//!
//! Inline date picker for chat bots. Each page is a keyboard of buttons
//! whose callback tokens carry the whole picker state, so the bot keeps no
//! session memory between taps.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     B["DatePicker::build"] --> S["CalendarState"]
//!     T["callback data"] -->|"Token::decode"| K["Token"]
//!     K -->|"CalendarState::transition"| S
//!     K -->|"SELECT DAY"| D["CalendarDate"]
//!     S -->|"period::years / months / days"| C["cells"]
//!     C -->|"keyboard::rows"| KB["Keyboard"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tgcal_calendar::{CalendarDate, CalendarKind};
//! use tgcal_picker::{DatePicker, Outcome, PickerConfig, Step};
//!
//! let today = CalendarDate::new(CalendarKind::Gregorian, 2024, 6, 15).unwrap();
//! let picker = DatePicker::new(PickerConfig::new().with_current_date(Some(today))).unwrap();
//!
//! // Tapping year 2024 opens its months.
//! let Outcome::Page(page) = picker.process("CALENDAR_0_g_SELECT_YEAR_2024_1_1").unwrap() else {
//!     panic!("expected a page");
//! };
//! assert_eq!(page.step, Step::Month);
//! assert_eq!(page.keyboard.rows()[0][0].label, "Jan");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `token` | Callback token codec |
//! | `period` | Cells of year, month and day pages |
//! | `machine` | Step state machine and page rendering |
//! | `keyboard` | Button rows handed to the transport |
//! | `picker` | `DatePicker` entry point |
//! | `config` | Picker configuration and button labels |
//! | `bounds` | Inclusive date range |
//! | `locale` | Month and weekday names |
//! | `step` | Steps and actions |
//! | `error` | Error types |

mod bounds;
mod config;
mod error;
mod locale;
mod machine;
mod picker;
mod step;

pub mod keyboard;
pub mod period;
pub mod token;

pub use bounds::DateBounds;
pub use config::{ButtonLabels, MAX_YEAR_CELLS, PickerConfig};
pub use error::{PickerError, TokenError};
pub use keyboard::{Button, Keyboard};
pub use locale::Locale;
pub use machine::{CalendarState, Transition};
pub use picker::{DatePicker, Outcome, Page};
pub use step::{Action, Step};
pub use token::{MAX_TOKEN_LEN, Token, is_own_token};
