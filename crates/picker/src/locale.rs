//! Static label tables.
//!
//! Language and calendar system are independent: month names are looked up
//! by both, and weekday headers are the language's names rotated to the
//! system's week start.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use tgcal_calendar::CalendarKind;

use crate::error::PickerError;

/// Language of the button labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (`en`).
    #[default]
    English,
    /// Russian (`ru`).
    Russian,
    /// Farsi (`fa`).
    Farsi,
}

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const GREGORIAN_MONTHS_RU: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

const GREGORIAN_MONTHS_FA: [&str; 12] = [
    "ژانویه", "فوریه", "مارس", "آوریل", "مه", "ژوئن", "ژوئیه", "اوت", "سپتامبر", "اکتبر", "نوامبر",
    "دسامبر",
];

const JALALI_MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const JALALI_MONTHS_RU: [&str; 12] = [
    "Фарвардин",
    "Ордибехешт",
    "Хордад",
    "Тир",
    "Мордад",
    "Шахривар",
    "Мехр",
    "Абан",
    "Азар",
    "Дей",
    "Бахман",
    "Эсфанд",
];

const JALALI_MONTHS_FA: [&str; 12] = [
    "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور", "مهر", "آبان", "آذر", "دی", "بهمن",
    "اسفند",
];

/// Weekday abbreviations, Monday first.
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAYS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];
const WEEKDAYS_FA: [&str; 7] = ["د", "س", "چ", "پ", "ج", "ش", "ی"];

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Russian, Locale::Farsi];

    /// Returns the locale key (`en`, `ru`, `fa`).
    pub fn key(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Russian => "ru",
            Locale::Farsi => "fa",
        }
    }

    /// Returns the name of `month` (1..=12) of the given calendar system.
    ///
    /// Out-of-range months yield an empty label.
    pub fn month_name(self, kind: CalendarKind, month: u8) -> &'static str {
        let table = match (kind, self) {
            (CalendarKind::Gregorian, Locale::English) => &GREGORIAN_MONTHS_EN,
            (CalendarKind::Gregorian, Locale::Russian) => &GREGORIAN_MONTHS_RU,
            (CalendarKind::Gregorian, Locale::Farsi) => &GREGORIAN_MONTHS_FA,
            (CalendarKind::Jalali, Locale::English) => &JALALI_MONTHS_EN,
            (CalendarKind::Jalali, Locale::Russian) => &JALALI_MONTHS_RU,
            (CalendarKind::Jalali, Locale::Farsi) => &JALALI_MONTHS_FA,
        };
        usize::from(month)
            .checked_sub(1)
            .and_then(|i| table.get(i))
            .copied()
            .unwrap_or("")
    }

    /// Returns the seven weekday headers, starting at `kind`'s week start.
    pub fn weekday_headers(self, kind: CalendarKind) -> [&'static str; 7] {
        let names = match self {
            Locale::English => &WEEKDAYS_EN,
            Locale::Russian => &WEEKDAYS_RU,
            Locale::Farsi => &WEEKDAYS_FA,
        };
        let start = week_start_offset(kind.system().week_start());
        std::array::from_fn(|i| names[(start + i) % 7])
    }
}

fn week_start_offset(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Locale {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "ru" => Ok(Locale::Russian),
            "fa" => Ok(Locale::Farsi),
            _ => Err(PickerError::UnknownLocale { key: s.to_string() }),
        }
    }
}
