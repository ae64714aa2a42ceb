//! Monthly calendar grid layout.

use coalcal_common::model::DayStatus;
use coalcal_common::month::{MonthKey, WeekStart};

use crate::day_index::DayIndex;

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st.
    Blank,
    Day { day: u32, status: DayStatus },
}

/// Empty cells before day 1 so that it lands in its weekday column.
pub fn leading_blanks(month: MonthKey, week_start: WeekStart) -> u32 {
    let first = month.first_weekday().num_days_from_sunday();
    let start = week_start.weekday().num_days_from_sunday();
    (first + 7 - start) % 7
}

/// Leading blanks followed by one cell per day of the index's month.
///
/// Rows are not padded at the end.
pub fn build_grid(index: &DayIndex, week_start: WeekStart) -> Vec<GridCell> {
    let month = index.month();
    let blanks = leading_blanks(month, week_start) as usize;

    let mut cells = Vec::with_capacity(blanks + month.days_in_month() as usize);
    cells.extend(std::iter::repeat(GridCell::Blank).take(blanks));
    cells.extend(
        index
            .statuses()
            .map(|(day, status)| GridCell::Day { day, status }),
    );
    cells
}

/// Column headers for `week_start`.
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    }
}
