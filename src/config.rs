use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level tgcal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TgcalConfig {
    /// Picker settings.
    #[serde(default)]
    pub picker: PickerToml,

    /// Button text overrides.
    #[serde(default)]
    pub labels: LabelsToml,
}

/// Reads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<TgcalConfig> {
    let Some(path) = path else {
        return Ok(TgcalConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerToml {
    #[serde(default)]
    pub calendar_id: u32,
    #[serde(default = "default_calendar_system")]
    pub calendar_system: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Initial anchor; today when unset.
    #[serde(default)]
    pub current_date: Option<String>,
    #[serde(default)]
    pub min_date: Option<String>,
    #[serde(default)]
    pub max_date: Option<String>,
    #[serde(default = "default_year_rows")]
    pub year_rows: usize,
    #[serde(default = "default_year_columns")]
    pub year_columns: usize,
    #[serde(default = "default_month_columns")]
    pub month_columns: usize,
    /// Rows shown below the navigation row of every page.
    #[serde(default)]
    pub additional_buttons: Vec<Vec<ButtonToml>>,
}

/// One caller-defined button.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonToml {
    pub label: String,
    pub token: String,
}

impl Default for PickerToml {
    fn default() -> Self {
        Self {
            calendar_id: 0,
            calendar_system: default_calendar_system(),
            locale: default_locale(),
            current_date: None,
            min_date: None,
            max_date: None,
            year_rows: default_year_rows(),
            year_columns: default_year_columns(),
            month_columns: default_month_columns(),
            additional_buttons: Vec::new(),
        }
    }
}

fn default_calendar_system() -> String {
    "gregorian".to_string()
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_year_rows() -> usize {
    5
}
fn default_year_columns() -> usize {
    4
}
fn default_month_columns() -> usize {
    3
}

/// Button text overrides; unset entries keep the built-in labels.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsToml {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub middle_year: Option<String>,
    pub middle_month: Option<String>,
    pub middle_day: Option<String>,
    pub empty_nav: Option<String>,
    pub empty_year: Option<String>,
    pub empty_month: Option<String>,
    pub empty_day: Option<String>,
}
