//! Picker configuration.

use tgcal_calendar::{CalendarDate, CalendarKind};

use crate::bounds::DateBounds;
use crate::error::PickerError;
use crate::keyboard::Button;
use crate::locale::Locale;
use crate::step::Step;

/// Largest year page; Telegram rejects inline keyboards above 100 buttons.
pub const MAX_YEAR_CELLS: usize = 100;

/// Texts of the fixed buttons.
///
/// Middle labels may contain `{year}` and `{month}` placeholders, which are
/// replaced by the anchor's year number and localized month name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    /// Previous page.
    pub prev: String,
    /// Next page.
    pub next: String,
    /// Middle button of the year page.
    pub middle_year: String,
    /// Middle button of the month page.
    pub middle_month: String,
    /// Middle button of the day page.
    pub middle_day: String,
    /// Disabled prev/next button.
    pub empty_nav: String,
    /// Disabled year cell.
    pub empty_year: String,
    /// Disabled month cell.
    pub empty_month: String,
    /// Blank or disabled day cell.
    pub empty_day: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            prev: "<<".to_string(),
            next: ">>".to_string(),
            middle_year: " ".to_string(),
            middle_month: "{year}".to_string(),
            middle_day: "{month} {year}".to_string(),
            empty_nav: "×".to_string(),
            empty_year: "×".to_string(),
            empty_month: "×".to_string(),
            empty_day: " ".to_string(),
        }
    }
}

impl ButtonLabels {
    /// Returns the middle navigation label for `step`, placeholders filled.
    pub fn middle(&self, step: Step, year: i32, month_name: &str) -> String {
        let template = match step {
            Step::Year => &self.middle_year,
            Step::Month => &self.middle_month,
            Step::Day => &self.middle_day,
        };
        template
            .replace("{year}", &year.to_string())
            .replace("{month}", month_name)
    }

    /// Returns the label of a disabled grid cell at `step`.
    pub fn empty_cell(&self, step: Step) -> &str {
        match step {
            Step::Year => &self.empty_year,
            Step::Month => &self.empty_month,
            Step::Day => &self.empty_day,
        }
    }
}

/// Configuration of one date picker.
///
/// # Example
///
/// ```
/// use tgcal_calendar::{CalendarDate, CalendarKind};
/// use tgcal_picker::{Locale, PickerConfig};
///
/// let min = CalendarDate::new(CalendarKind::Jalali, 1403, 1, 1).unwrap();
/// let config = PickerConfig::new()
///     .with_calendar_id(2)
///     .with_calendar_system(CalendarKind::Jalali)
///     .with_locale(Locale::Farsi)
///     .with_min_date(Some(min));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PickerConfig {
    calendar_id: u32,
    calendar_system: CalendarKind,
    locale: Locale,
    /// Initial anchor; `None` means today at build time.
    current_date: Option<CalendarDate>,
    min_date: Option<CalendarDate>,
    max_date: Option<CalendarDate>,
    year_rows: usize,
    year_columns: usize,
    month_columns: usize,
    labels: ButtonLabels,
    /// Caller rows appended below the navigation row of every page.
    additional_buttons: Vec<Vec<Button>>,
}

impl PickerConfig {
    /// Creates a configuration with the defaults.
    ///
    /// Defaults: id 0, Gregorian, English, anchored on today, unbounded,
    /// a 5x4 year grid and 3 month columns.
    pub fn new() -> Self {
        Self {
            calendar_id: 0,
            calendar_system: CalendarKind::Gregorian,
            locale: Locale::English,
            current_date: None,
            min_date: None,
            max_date: None,
            year_rows: 5,
            year_columns: 4,
            month_columns: 3,
            labels: ButtonLabels::default(),
            additional_buttons: Vec::new(),
        }
    }

    /// Sets the id that routes tokens to this picker.
    pub fn with_calendar_id(mut self, calendar_id: u32) -> Self {
        self.calendar_id = calendar_id;
        self
    }

    /// Sets the calendar system of the initial page.
    pub fn with_calendar_system(mut self, kind: CalendarKind) -> Self {
        self.calendar_system = kind;
        self
    }

    /// Sets the label language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the initial anchor.
    pub fn with_current_date(mut self, date: Option<CalendarDate>) -> Self {
        self.current_date = date;
        self
    }

    /// Sets the inclusive lower bound.
    pub fn with_min_date(mut self, date: Option<CalendarDate>) -> Self {
        self.min_date = date;
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_max_date(mut self, date: Option<CalendarDate>) -> Self {
        self.max_date = date;
        self
    }

    /// Sets the year page shape.
    pub fn with_year_grid(mut self, rows: usize, columns: usize) -> Self {
        self.year_rows = rows;
        self.year_columns = columns;
        self
    }

    /// Sets the number of month buttons per row.
    pub fn with_month_columns(mut self, columns: usize) -> Self {
        self.month_columns = columns;
        self
    }

    /// Replaces the button texts.
    pub fn with_labels(mut self, labels: ButtonLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets rows appended below the navigation row of every page.
    ///
    /// Their tokens are not calendar tokens; the caller routes them.
    pub fn with_additional_buttons(mut self, rows: Vec<Vec<Button>>) -> Self {
        self.additional_buttons = rows;
        self
    }

    /// Returns the calendar id.
    pub fn calendar_id(&self) -> u32 {
        self.calendar_id
    }

    /// Returns the calendar system of the initial page.
    pub fn calendar_system(&self) -> CalendarKind {
        self.calendar_system
    }

    /// Returns the label language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the configured initial anchor.
    pub fn current_date(&self) -> Option<CalendarDate> {
        self.current_date
    }

    /// Returns the lower bound.
    pub fn min_date(&self) -> Option<CalendarDate> {
        self.min_date
    }

    /// Returns the upper bound.
    pub fn max_date(&self) -> Option<CalendarDate> {
        self.max_date
    }

    /// Returns the number of year rows.
    pub fn year_rows(&self) -> usize {
        self.year_rows
    }

    /// Returns the number of years per row.
    pub fn year_columns(&self) -> usize {
        self.year_columns
    }

    /// Returns the number of months per row.
    pub fn month_columns(&self) -> usize {
        self.month_columns
    }

    /// Returns the button texts.
    pub fn labels(&self) -> &ButtonLabels {
        &self.labels
    }

    /// Returns the caller rows shown below the navigation row.
    pub fn additional_buttons(&self) -> &[Vec<Button>] {
        &self.additional_buttons
    }

    /// Returns the number of years on one year page.
    ///
    /// Saturates for grids that [`validate`](Self::validate) rejects.
    pub fn year_page_size(&self) -> usize {
        self.year_rows.saturating_mul(self.year_columns)
    }

    /// Returns the selectable range.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvertedBounds`] if min lies after max.
    pub fn bounds(&self) -> Result<DateBounds, PickerError> {
        DateBounds::new(self.min_date, self.max_date)
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the year grid does not hold 1..=[`MAX_YEAR_CELLS`]
    /// cells, the month grid is not 1..=12 wide, or the bounds are inverted.
    pub fn validate(&self) -> Result<(), PickerError> {
        let cells = self.year_rows.checked_mul(self.year_columns);
        if !matches!(cells, Some(1..=MAX_YEAR_CELLS)) {
            return Err(PickerError::InvalidYearGrid {
                rows: self.year_rows,
                columns: self.year_columns,
            });
        }
        if !(1..=12).contains(&self.month_columns) {
            return Err(PickerError::InvalidMonthColumns {
                columns: self.month_columns,
            });
        }
        self.bounds()?;
        Ok(())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}
