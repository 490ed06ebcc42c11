use tgcal_calendar::{CalendarDate, CalendarKind};
use tgcal_picker::{
    Action, Button, DatePicker, Keyboard, Outcome, PickerConfig, PickerError, Step, Token,
    TokenError,
};

fn g(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(CalendarKind::Gregorian, y, m, d).unwrap()
}

fn picker_at(date: CalendarDate) -> DatePicker {
    DatePicker::new(PickerConfig::new().with_current_date(Some(date))).unwrap()
}

fn grid_labels(keyboard: &Keyboard) -> Vec<String> {
    let rows = keyboard.rows();
    rows[..rows.len() - 1]
        .iter()
        .flatten()
        .map(|b| b.label.clone())
        .collect()
}

fn action_of(button: &Button) -> Action {
    Token::decode(&button.token).unwrap().action()
}

#[test]
fn initial_year_page_centers_on_anchor() {
    let page = picker_at(g(2024, 6, 15)).build(None).unwrap();
    assert_eq!(page.step, Step::Year);

    let years = grid_labels(&page.keyboard);
    let expected: Vec<String> = (2015..=2034).map(|y| y.to_string()).collect();
    assert_eq!(years, expected);
    assert!(page.keyboard.rows()[..5].iter().all(|row| row.len() == 4));

    let nav = page.keyboard.last_row().unwrap();
    assert_eq!(nav.len(), 3);
    assert_eq!(action_of(&nav[0]), Action::Goto);
    assert_eq!(action_of(&nav[1]), Action::Nothing);
    assert_eq!(action_of(&nav[2]), Action::Goto);
}

#[test]
fn selecting_a_year_opens_its_months() {
    let picker = picker_at(g(2024, 6, 15));
    let (date, keyboard, step) = picker
        .process("CALENDAR_0_g_SELECT_YEAR_2024_1_1")
        .unwrap()
        .into_parts();
    assert_eq!(date, None);
    assert_eq!(step, Some(Step::Month));

    let keyboard = keyboard.unwrap();
    let months = grid_labels(&keyboard);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "Jan");
    assert_eq!(months[11], "Dec");
    assert_eq!(keyboard.rows()[0][0].token, "CALENDAR_0_g_SELECT_MONTH_2024_1_1");
}

#[test]
fn selecting_a_day_finishes() {
    let picker = picker_at(g(2024, 6, 15));
    let (date, keyboard, step) = picker
        .process("CALENDAR_0_g_SELECT_DAY_2024_6_15")
        .unwrap()
        .into_parts();
    assert_eq!(date, Some(g(2024, 6, 15)));
    assert!(keyboard.is_none());
    assert_eq!(step, Some(Step::Day));
}

#[test]
fn garbage_is_a_decode_failure() {
    let picker = picker_at(g(2024, 6, 15));
    let err = picker.process("garbage").unwrap_err();
    assert_eq!(err, PickerError::MalformedToken(TokenError::NotACalendarToken));
    assert!(err.is_recoverable());
}

#[test]
fn tampered_tokens_fail_closed() {
    let picker = picker_at(g(2024, 6, 15));
    for data in [
        "CALENDAR_0_g_SELECT_DAY_2024_2_30",
        "CALENDAR_0_g_SELECT_DAY_2024_13_1",
        "CALENDAR_0_g_SELECT_DAY_2024_6",
        "CALENDAR_0_x_SELECT_DAY_2024_6_15",
        "CALENDAR_0_g_SELECT__2024_6_15",
        "CALENDAR_0_g_SELECT_DAY_99999999999_6_15",
        "CALENDAR_0_g_SELECT_DAY_2024_6_15\u{0}",
        "CALENDAR_____",
        "CALENDAR_0_g_SELECT_DAY_+2024_06_015",
    ] {
        let err = picker.process(data).unwrap_err();
        assert!(matches!(err, PickerError::MalformedToken(_)), "{data}: {err}");
    }
}

#[test]
fn month_page_next_disabled_at_max() {
    let config = PickerConfig::new()
        .with_current_date(Some(g(2024, 1, 15)))
        .with_max_date(Some(g(2024, 1, 31)));
    let picker = DatePicker::new(config).unwrap();
    let page = picker.build(Some(Step::Month)).unwrap();

    let nav = page.keyboard.last_row().unwrap();
    assert_eq!(action_of(&nav[0]), Action::Goto);
    assert_eq!(action_of(&nav[2]), Action::Nothing);
    assert_eq!(nav[2].label, "×");

    // Only January is selectable.
    let enabled: Vec<&Button> = page
        .keyboard
        .buttons()
        .filter(|b| action_of(b) == Action::Select)
        .collect();
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].label, "Jan");
}

#[test]
fn year_page_prev_disabled_when_previous_page_is_before_min() {
    let config = PickerConfig::new()
        .with_current_date(Some(g(2024, 6, 15)))
        .with_min_date(Some(g(2015, 1, 1)));
    let page = DatePicker::new(config).unwrap().build(None).unwrap();
    let nav = page.keyboard.last_row().unwrap();
    // Page starts at 2015; 2014-12-31 is before min.
    assert_eq!(action_of(&nav[0]), Action::Nothing);
    assert_eq!(action_of(&nav[2]), Action::Goto);
}

#[test]
fn day_grid_aligns_first_day_to_its_weekday() {
    // (first day of month, Monday-based weekday index)
    for (first, k) in [
        (g(2024, 6, 1), 5),
        (g(2024, 1, 1), 0),
        (g(2023, 10, 1), 6),
        (g(2024, 3, 1), 4),
    ] {
        let page = picker_at(first).build(Some(Step::Day)).unwrap();
        let cells: Vec<&Button> = page.keyboard.rows()[1..].iter().flatten().collect();
        let leading = cells
            .iter()
            .take_while(|b| action_of(b) == Action::Nothing)
            .count();
        assert_eq!(leading, k, "{first}");
        assert_eq!(cells[k].label, "1");
    }
}

#[test]
fn out_of_range_select_rejected() {
    let config = PickerConfig::new()
        .with_current_date(Some(g(2024, 1, 15)))
        .with_min_date(Some(g(2024, 1, 10)));
    let picker = DatePicker::new(config).unwrap();
    let err = picker.process("CALENDAR_0_g_SELECT_DAY_2024_1_9").unwrap_err();
    assert!(matches!(err, PickerError::OutOfRange { .. }));
    assert!(picker.process("CALENDAR_0_g_SELECT_DAY_2024_1_10").is_ok());
}

#[test]
fn every_token_fits_the_callback_limit() {
    let config = PickerConfig::new()
        .with_calendar_id(u32::MAX)
        .with_current_date(Some(g(2024, 12, 31)));
    let picker = DatePicker::new(config).unwrap();
    for step in Step::ALL {
        let page = picker.build(Some(step)).unwrap();
        for button in page.keyboard.buttons() {
            assert!(button.token.len() <= tgcal_picker::MAX_TOKEN_LEN, "{}", button.token);
        }
    }
}

#[test]
fn inert_tap_is_ignored() {
    let picker = picker_at(g(2024, 6, 15));
    let page = picker.build(Some(Step::Day)).unwrap();
    let header = &page.keyboard.rows()[0][0];
    assert_eq!(picker.process(&header.token).unwrap(), Outcome::Ignored);
}

#[test]
fn decoding_agrees_with_routing() {
    let picker = picker_at(g(2024, 6, 15));
    let data = "CALENDAR_+0_g_SELECT_DAY_+2024_06_015";
    assert!(!picker.is_own_token(data));
    assert!(matches!(
        picker.process(data),
        Err(PickerError::MalformedToken(TokenError::InvalidNumber {
            field: "calendar_id",
            ..
        }))
    ));
}

#[test]
fn additional_rows_survive_navigation() {
    let extra = vec![vec![Button::new("Cancel", "cancel")]];
    let picker = DatePicker::new(
        PickerConfig::new()
            .with_current_date(Some(g(2024, 6, 15)))
            .with_additional_buttons(extra.clone()),
    )
    .unwrap();

    let mut keyboard = picker.build(None).unwrap().keyboard;
    for data in [
        "CALENDAR_0_g_SELECT_YEAR_2024_1_1",
        "CALENDAR_0_g_SELECT_MONTH_2024_6_1",
    ] {
        assert_eq!(keyboard.last_row(), Some(extra[0].as_slice()));
        let rows = keyboard.rows();
        assert_eq!(rows[rows.len() - 2].len(), 3);

        let Outcome::Page(page) = picker.process(data).unwrap() else {
            panic!("expected a page for {data}");
        };
        keyboard = page.keyboard;
    }
    assert_eq!(keyboard.last_row(), Some(extra[0].as_slice()));
    assert!(!picker.is_own_token("cancel"));
    assert!(picker.process("cancel").is_err());
}
