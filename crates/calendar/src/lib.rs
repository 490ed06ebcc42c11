//! # tgcal-calendar
//!
//! Date arithmetic for the calendar systems a date picker can display.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     K["CalendarKind (g / j)"] -->|".system()"| S["&dyn CalendarSystem"]
//!     S -->|".make(y, m, d)"| D["CalendarDate"]
//!     D -->|".to_gregorian()"| N["chrono::NaiveDate"]
//!     N -->|"from_gregorian()"| D
//!     S -->|".shift(date, unit, n)"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tgcal_calendar::{CalendarKind, DateUnit};
//!
//! let jalali = CalendarKind::Jalali.system();
//! let nowruz = jalali.make(1403, 1, 1).unwrap();
//! assert_eq!(nowruz.to_gregorian().to_string(), "2024-03-20");
//!
//! let esfand = jalali.shift(nowruz, DateUnit::Day, -1).unwrap();
//! assert_eq!(esfand.ymd(), (1402, 12, 29));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `kind` | System discriminator and wire tag |
//! | `date` | Calendar-tagged date value and shift units |
//! | `system` | The `CalendarSystem` trait |
//! | `gregorian` | Gregorian implementation (chrono) |
//! | `jalali` | Solar hijri implementation |
//! | `error` | Error types |

mod date;
mod error;
mod kind;
mod system;

pub mod gregorian;
pub mod jalali;

pub use date::{CalendarDate, DateUnit};
pub use error::CalendarError;
pub use gregorian::GregorianCalendar;
pub use jalali::JalaliCalendar;
pub use kind::CalendarKind;
pub use system::CalendarSystem;
