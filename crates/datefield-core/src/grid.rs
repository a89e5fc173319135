//! Month grid generation.

use chrono::{Datelike, Days, Weekday};
use serde::{Deserialize, Serialize};

use crate::constraints::{CellState, Constraints};
use crate::iso::{DateIso, YearMonthIso};

/// Number of week rows shown for every month, so the grid height never jumps.
pub const GRID_WEEKS: usize = 6;

/// Total number of cells in a month grid.
pub const GRID_CELLS: usize = GRID_WEEKS * 7;

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub iso: DateIso,
    /// False for leading/trailing days borrowed from adjacent months.
    pub in_current_month: bool,
    pub cell_state: CellState,
}

/// Compute the cells for `month`, starting each row on `week_starts_on`.
///
/// Always returns [`GRID_CELLS`] cells in date order. Every browsable month
/// keeps its spill-over days inside four-digit years.
pub fn compute_month_grid(
    month: YearMonthIso,
    week_starts_on: Weekday,
    constraints: &Constraints,
) -> Vec<GridCell> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let first = first.naive();
    let lead = (7 + first.weekday().num_days_from_monday() - week_starts_on.num_days_from_monday()) % 7;
    let lead = u64::from(lead);
    let Some(start) = first.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };

    start
        .iter_days()
        .take(GRID_CELLS)
        .filter_map(|day| {
            let iso = DateIso::try_from(day).ok()?;
            Some(GridCell {
                iso,
                in_current_month: day.year() == month.year() && day.month() == month.month(),
                cell_state: constraints.classify(&iso),
            })
        })
        .collect()
}

/// Short English weekday labels, starting at `week_starts_on`.
pub fn weekday_labels(week_starts_on: Weekday) -> [&'static str; 7] {
    let mut labels = [""; 7];
    let mut day = week_starts_on;
    for label in labels.iter_mut() {
        *label = short_name(day);
        day = day.succ();
    }
    labels
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> YearMonthIso {
        s.parse().unwrap()
    }

    #[test]
    fn test_grid_starts_on_requested_weekday() {
        // 2026-01-01 is a Thursday.
        let grid = compute_month_grid(month("2026-01"), Weekday::Sun, &Constraints::default());
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0].iso.to_string(), "2025-12-28");
        assert!(!grid[0].in_current_month);
        assert_eq!(grid[4].iso.to_string(), "2026-01-01");
        assert!(grid[4].in_current_month);

        let grid = compute_month_grid(month("2026-01"), Weekday::Mon, &Constraints::default());
        assert_eq!(grid[0].iso.to_string(), "2025-12-29");
        assert_eq!(grid[3].iso.to_string(), "2026-01-01");
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_lead() {
        // 2026-02-01 is a Sunday.
        let grid = compute_month_grid(month("2026-02"), Weekday::Sun, &Constraints::default());
        assert_eq!(grid[0].iso.to_string(), "2026-02-01");
        let in_month = grid.iter().filter(|c| c.in_current_month).count();
        assert_eq!(in_month, 28);
        assert_eq!(grid[GRID_CELLS - 1].iso.to_string(), "2026-03-14");
    }

    #[test]
    fn test_cells_are_classified() {
        let constraints = Constraints::default()
            .with_min("2026-01-10".parse().unwrap())
            .with_override("2026-01-20".parse().unwrap(), CellState::Unavailable);
        let grid = compute_month_grid(month("2026-01"), Weekday::Sun, &constraints);

        let state_of = |iso: &str| {
            grid.iter()
                .find(|c| c.iso.to_string() == iso)
                .map(|c| c.cell_state)
                .unwrap()
        };
        assert_eq!(state_of("2026-01-09"), CellState::OutOfRange);
        assert_eq!(state_of("2026-01-10"), CellState::Available);
        assert_eq!(state_of("2026-01-20"), CellState::Unavailable);
    }

    #[test]
    fn test_range_end_months_fill_the_grid() {
        for month in [YearMonthIso::MIN, YearMonthIso::MAX] {
            let grid = compute_month_grid(month, Weekday::Sun, &Constraints::default());
            assert_eq!(grid.len(), GRID_CELLS);
            for cell in &grid {
                let text = cell.iso.to_string();
                assert_eq!(text.len(), 10);
                assert_eq!(text.parse::<DateIso>().unwrap(), cell.iso);
            }
        }
        let last = compute_month_grid(YearMonthIso::MAX, Weekday::Sun, &Constraints::default());
        assert_eq!(last[GRID_CELLS - 1].iso.to_string(), "9999-01-09");
    }

    #[test]
    fn test_weekday_labels_rotate() {
        assert_eq!(
            weekday_labels(Weekday::Sun),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(weekday_labels(Weekday::Mon)[0], "Mon");
        assert_eq!(weekday_labels(Weekday::Mon)[6], "Sun");
    }
}
