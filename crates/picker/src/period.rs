//! Selectable cells for one page of each step.
//!
//! Every generator returns a lazy iterator that depends only on the anchor
//! and the bounds; cloning it restarts the page. A `None` cell is rendered
//! as a disabled placeholder.

use std::iter;
use std::ops::RangeInclusive;

use tgcal_calendar::CalendarDate;

use crate::bounds::DateBounds;
use crate::step::Step;

/// One grid cell: the date a button would carry, or `None` when disabled.
pub type Cell = Option<CalendarDate>;

/// Returns the years shown on a year page of `count` cells around
/// `anchor_year`.
///
/// The page starts `(count - 1) / 2` years before the anchor, so a 20-cell
/// page anchored at 2024 spans 2015..=2034.
pub fn year_page(anchor_year: i32, count: usize) -> RangeInclusive<i32> {
    let count = i32::try_from(count.max(1)).unwrap_or(i32::MAX);
    let start = anchor_year.saturating_sub((count - 1) / 2);
    start..=start.saturating_add(count - 1)
}

/// Returns the first and last day of the `step` period containing `date`.
pub fn span(date: CalendarDate, step: Step) -> (CalendarDate, CalendarDate) {
    match step {
        Step::Year => (date.first_of_year(), date.last_of_year()),
        Step::Month => (date.first_of_month(), date.last_of_month()),
        Step::Day => (date, date),
    }
}

/// Enables a period cell if it shares a day with the bounds. The cell
/// carries the period's first selectable day.
fn period_cell(first: CalendarDate, step: Step, bounds: DateBounds) -> Cell {
    let (first, last) = span(first, step);
    if bounds.overlaps(first, last) {
        bounds.clamp(first).ok()
    } else {
        None
    }
}

/// Yields one cell per year of the page around `anchor`.
pub fn years(
    anchor: CalendarDate,
    count: usize,
    bounds: DateBounds,
) -> impl Iterator<Item = Cell> + Clone {
    let system = anchor.system();
    year_page(anchor.year(), count).map(move |year| {
        system
            .make(year, 1, 1)
            .ok()
            .and_then(|first| period_cell(first, Step::Year, bounds))
    })
}

/// Yields twelve cells, one per month of `anchor`'s year.
pub fn months(anchor: CalendarDate, bounds: DateBounds) -> impl Iterator<Item = Cell> + Clone {
    let system = anchor.system();
    let year = anchor.year();
    (1..=12u8).map(move |month| {
        system
            .make(year, month, 1)
            .ok()
            .and_then(|first| period_cell(first, Step::Month, bounds))
    })
}

/// Yields the day cells of `anchor`'s month, preceded by one `None` per
/// weekday column before the 1st.
pub fn days(anchor: CalendarDate, bounds: DateBounds) -> impl Iterator<Item = Cell> + Clone {
    let system = anchor.system();
    let (year, month) = (anchor.year(), anchor.month());
    let leading = usize::from(system.first_weekday_of_month(anchor));
    iter::repeat_n(None, leading).chain((1..=anchor.days_in_month()).map(move |day| {
        system
            .make(year, month, day)
            .ok()
            .filter(|date| bounds.contains(*date))
    }))
}
