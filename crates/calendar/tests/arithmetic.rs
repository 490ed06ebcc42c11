use std::cmp::Ordering;

use tgcal_calendar::{CalendarError, CalendarKind, DateUnit};

#[test]
fn shift_round_trips_for_both_systems() {
    for kind in CalendarKind::ALL {
        let system = kind.system();
        let start = system.make(1403, 5, 10).unwrap();
        for amount in [-25, -12, -1, 0, 1, 12, 25] {
            for unit in [DateUnit::Year, DateUnit::Month, DateUnit::Day] {
                let there = system.shift(start, unit, amount).unwrap();
                let back = system.shift(there, unit, -amount).unwrap();
                assert_eq!(back, start, "{kind} {unit:?} {amount}");
                assert_eq!(there.kind(), kind);
            }
        }
    }
}

#[test]
fn shift_months_crosses_years() {
    let system = CalendarKind::Gregorian.system();
    let date = system.make(2024, 11, 15).unwrap();
    assert_eq!(system.shift(date, DateUnit::Month, 3).unwrap().ymd(), (2025, 2, 15));
    assert_eq!(system.shift(date, DateUnit::Month, -23).unwrap().ymd(), (2022, 12, 15));
}

#[test]
fn shift_converts_foreign_dates_first() {
    let gregorian = CalendarKind::Gregorian.system();
    let jalali = CalendarKind::Jalali.system();
    let nowruz = jalali.make(1403, 1, 1).unwrap();
    let shifted = gregorian.shift(nowruz, DateUnit::Day, 1).unwrap();
    assert_eq!(shifted.kind(), CalendarKind::Gregorian);
    assert_eq!(shifted.ymd(), (2024, 3, 21));
}

#[test]
fn compare_is_chronological_across_systems() {
    let gregorian = CalendarKind::Gregorian.system();
    let jalali = CalendarKind::Jalali.system();
    let a = gregorian.make(2024, 3, 19).unwrap();
    let b = jalali.make(1403, 1, 1).unwrap();
    let c = gregorian.make(2024, 3, 20).unwrap();
    assert_eq!(gregorian.compare(a, b), Ordering::Less);
    assert_eq!(jalali.compare(b, a), Ordering::Greater);
    assert_eq!(gregorian.compare(b, c), Ordering::Equal);
}

#[test]
fn first_weekday_is_relative_to_system_week_start() {
    // 2024-03-20 (1 Farvardin 1403) was a Wednesday.
    let gregorian = CalendarKind::Gregorian.system();
    let jalali = CalendarKind::Jalali.system();
    let march = gregorian.make(2024, 3, 20).unwrap();
    let farvardin = jalali.make(1403, 1, 1).unwrap();
    // Gregorian March 2024 starts on a Friday.
    assert_eq!(gregorian.first_weekday_of_month(march), 4);
    // Saturday-based: Sat, Sun, Mon, Tue before Wednesday.
    assert_eq!(jalali.first_weekday_of_month(farvardin), 4);
}

#[test]
fn make_clamped_saturates_day() {
    let jalali = CalendarKind::Jalali.system();
    assert_eq!(jalali.make_clamped(1402, 12, 31).unwrap().ymd(), (1402, 12, 29));
    assert_eq!(jalali.make_clamped(1402, 1, 0).unwrap().ymd(), (1402, 1, 1));
    assert_eq!(
        jalali.make_clamped(1402, 0, 1).unwrap_err(),
        CalendarError::InvalidMonth { month: 0 }
    );
}
