//! Text and JSON views of picker results.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use tgcal_calendar::CalendarDate;
use tgcal_picker::{Keyboard, Outcome, Page, Step, Token};

use crate::cli::Format;

#[derive(Serialize)]
struct PageView<'a> {
    step: Step,
    keyboard: &'a Keyboard,
}

#[derive(Serialize)]
struct DateView {
    date: String,
    system: &'static str,
    gregorian: String,
}

impl DateView {
    fn new(date: CalendarDate) -> Self {
        Self {
            date: date.to_string(),
            system: date.kind().name(),
            gregorian: date.to_gregorian().to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
enum OutcomeView<'a> {
    Ignored,
    Page {
        #[serde(flatten)]
        page: PageView<'a>,
    },
    Selected {
        #[serde(flatten)]
        date: DateView,
    },
}

#[derive(Serialize)]
struct TokenView {
    calendar_id: u32,
    system: &'static str,
    action: &'static str,
    step: Option<Step>,
    #[serde(flatten)]
    date: DateView,
}

/// Renders a page.
pub fn page(page: &Page, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(page_text(page)),
        Format::Json => json(&PageView {
            step: page.step,
            keyboard: &page.keyboard,
        }),
    }
}

/// Renders the outcome of a tap.
pub fn outcome(outcome: &Outcome, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(match outcome {
            Outcome::Ignored => "ignored: inert button\n".to_string(),
            Outcome::Page(p) => page_text(p),
            Outcome::Selected(date) => format!(
                "selected: {date} ({}, {})\n",
                date.kind(),
                date.to_gregorian()
            ),
        }),
        Format::Json => {
            let view = match outcome {
                Outcome::Ignored => OutcomeView::Ignored,
                Outcome::Page(p) => OutcomeView::Page {
                    page: PageView {
                        step: p.step,
                        keyboard: &p.keyboard,
                    },
                },
                Outcome::Selected(date) => OutcomeView::Selected {
                    date: DateView::new(*date),
                },
            };
            json(&view)
        }
    }
}

/// Renders the fields of a decoded token.
pub fn token(token: &Token, format: Format) -> Result<String> {
    let view = TokenView {
        calendar_id: token.calendar_id(),
        system: token.calendar_system().name(),
        action: token.action().tag(),
        step: token.step(),
        date: DateView::new(token.date()),
    };
    match format {
        Format::Json => json(&view),
        Format::Text => {
            let mut out = String::new();
            let step = view.step.map_or("-", Step::name);
            // Writing to a String cannot fail.
            let _ = writeln!(out, "calendar_id: {}", view.calendar_id);
            let _ = writeln!(out, "system:      {}", view.system);
            let _ = writeln!(out, "action:      {}", view.action);
            let _ = writeln!(out, "step:        {step}");
            let _ = writeln!(out, "date:        {}", view.date.date);
            let _ = writeln!(out, "gregorian:   {}", view.date.gregorian);
            Ok(out)
        }
    }
}

fn json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    out.push('\n');
    Ok(out)
}

/// Lays the labels out as a fixed-width grid, one keyboard row per line.
fn page_text(page: &Page) -> String {
    let rows = page.keyboard.rows();
    let width = page
        .keyboard
        .buttons()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = format!("step: {}\n", page.step.name());
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|b| format!("[{:^width$}]", b.label))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use tgcal_calendar::CalendarKind;
    use tgcal_picker::{DatePicker, PickerConfig};

    use super::*;

    fn june_picker() -> DatePicker {
        let today = CalendarDate::new(CalendarKind::Gregorian, 2024, 6, 15).unwrap();
        DatePicker::new(PickerConfig::new().with_current_date(Some(today))).unwrap()
    }

    #[test]
    fn page_text_has_one_line_per_row() {
        let page = june_picker().build(None).unwrap();
        let text = super::page(&page, Format::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step: year");
        assert_eq!(lines.len(), 1 + 5 + 1);
        assert!(lines[1].starts_with("[2015]"));
    }

    #[test]
    fn page_json_shape() {
        let page = june_picker().build(Some(Step::Month)).unwrap();
        let text = super::page(&page, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["step"], "month");
        assert_eq!(value["keyboard"][0][0]["label"], "Jan");
        assert_eq!(
            value["keyboard"][0][0]["token"],
            "CALENDAR_0_g_SELECT_MONTH_2024_1_1"
        );
    }

    #[test]
    fn selected_outcome_json() {
        let picker = june_picker();
        let outcome = picker.process("CALENDAR_0_j_SELECT_DAY_1403_3_26").unwrap();
        let text = super::outcome(&outcome, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["outcome"], "selected");
        assert_eq!(value["date"], "1403-03-26");
        assert_eq!(value["system"], "jalali");
        assert_eq!(value["gregorian"], "2024-06-15");
    }

    #[test]
    fn ignored_outcome() {
        let text = super::outcome(&Outcome::Ignored, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["outcome"], "ignored");
        assert_eq!(
            super::outcome(&Outcome::Ignored, Format::Text).unwrap(),
            "ignored: inert button\n"
        );
    }

    #[test]
    fn token_text() {
        let token = Token::decode("CALENDAR_2_g_GOTO_MONTH_2024_6_15").unwrap();
        let text = super::token(&token, Format::Text).unwrap();
        assert!(text.contains("calendar_id: 2"));
        assert!(text.contains("action:      GOTO"));
        assert!(text.contains("step:        month"));
    }
}
