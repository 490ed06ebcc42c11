//! Pure conversion functions: TOML config structs + CLI overrides -> picker config.

use anyhow::{Context, Result, bail};

use tgcal_calendar::{CalendarDate, CalendarKind};
use tgcal_picker::{Button, ButtonLabels, Locale, PickerConfig, Step};

use crate::cli::{PickerArgs, StepArg};
use crate::config::{ButtonToml, LabelsToml, TgcalConfig};

/// Parses a calendar system name (`gregorian`, `jalali`, or a one-letter tag).
pub fn parse_calendar_system(s: &str) -> Result<CalendarKind> {
    s.parse::<CalendarKind>()
        .with_context(|| format!("invalid calendar system {s:?}"))
}

/// Parses a locale key (`en`, `ru`, `fa`).
pub fn parse_locale(s: &str) -> Result<Locale> {
    s.parse::<Locale>()
        .with_context(|| format!("invalid locale {s:?}"))
}

/// Parses a `YYYY-MM-DD` date in the given calendar system.
///
/// A leading minus sign is accepted on the year.
pub fn parse_date(s: &str, kind: CalendarKind) -> Result<CalendarDate> {
    let trimmed = s.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed),
    };
    let parts: Vec<&str> = digits.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("invalid date {s:?}: expected YYYY-MM-DD");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in date {s:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in date {s:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in date {s:?}"))?;
    CalendarDate::new(kind, sign * year, month, day)
        .with_context(|| format!("invalid {kind} date {s:?}"))
}

/// Maps a command-line step onto the picker step.
pub fn step_from_arg(step: StepArg) -> Step {
    match step {
        StepArg::Year => Step::Year,
        StepArg::Month => Step::Month,
        StepArg::Day => Step::Day,
    }
}

/// Builds [`ButtonLabels`] from the TOML overrides.
pub fn build_labels(labels: &LabelsToml) -> ButtonLabels {
    let defaults = ButtonLabels::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    ButtonLabels {
        prev: pick(&labels.prev, defaults.prev),
        next: pick(&labels.next, defaults.next),
        middle_year: pick(&labels.middle_year, defaults.middle_year),
        middle_month: pick(&labels.middle_month, defaults.middle_month),
        middle_day: pick(&labels.middle_day, defaults.middle_day),
        empty_nav: pick(&labels.empty_nav, defaults.empty_nav),
        empty_year: pick(&labels.empty_year, defaults.empty_year),
        empty_month: pick(&labels.empty_month, defaults.empty_month),
        empty_day: pick(&labels.empty_day, defaults.empty_day),
    }
}

/// Converts caller-defined button rows.
pub fn build_additional_buttons(rows: &[Vec<ButtonToml>]) -> Vec<Vec<Button>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|b| Button::new(b.label.clone(), b.token.clone()))
                .collect()
        })
        .collect()
}

/// Builds a [`PickerConfig`] from the TOML configuration.
///
/// Command-line flags in `overrides` win over the file. All dates are read in
/// the resulting calendar system.
pub fn build_picker_config(config: &TgcalConfig, overrides: &PickerArgs) -> Result<PickerConfig> {
    let picker = &config.picker;
    let system = overrides
        .system
        .as_deref()
        .unwrap_or(&picker.calendar_system);
    let kind = parse_calendar_system(system)?;
    let locale = parse_locale(overrides.locale.as_deref().unwrap_or(&picker.locale))?;

    let date = |value: Option<&str>, field: &str| -> Result<Option<CalendarDate>> {
        value
            .map(|s| parse_date(s, kind).with_context(|| format!("invalid {field}")))
            .transpose()
    };
    let current = overrides
        .today
        .as_deref()
        .or(picker.current_date.as_deref());

    let cfg = PickerConfig::new()
        .with_calendar_id(overrides.calendar_id.unwrap_or(picker.calendar_id))
        .with_calendar_system(kind)
        .with_locale(locale)
        .with_current_date(date(current, "current_date")?)
        .with_min_date(date(picker.min_date.as_deref(), "min_date")?)
        .with_max_date(date(picker.max_date.as_deref(), "max_date")?)
        .with_year_grid(picker.year_rows, picker.year_columns)
        .with_month_columns(picker.month_columns)
        .with_labels(build_labels(&config.labels))
        .with_additional_buttons(build_additional_buttons(&picker.additional_buttons));
    cfg.validate().context("invalid picker configuration")?;
    Ok(cfg)
}
