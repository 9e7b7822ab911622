use crate::datemath::{self, MonthCursor};
use time::Date;

/// One day of a displayed month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) date: Date,
    pub(crate) ordinal: u8,
}

/// The ordered day cells of a single month, plus the information needed to
/// left-pad the Monday-first grid.  Rebuilt fresh for every render; never
/// cached and never mutated in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    cursor: MonthCursor,
    /// Monday-first weekday of day 1; the grid starts with `lead - 1`
    /// blank slots.
    pub(crate) lead: u8,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Returns `None` only when the month has no representable first day
    /// (the edge of the supported calendar).
    pub(crate) fn build(cursor: MonthCursor) -> Option<MonthGrid> {
        let first = cursor.first_day()?;
        let lead = datemath::weekday_monday_first(first);
        let length = cursor.length();
        let mut cells = Vec::with_capacity(usize::from(length));
        for ordinal in 1..=length {
            let date = Date::from_calendar_date(cursor.year, cursor.month, ordinal).ok()?;
            cells.push(DayCell { date, ordinal });
        }
        Some(MonthGrid {
            cursor,
            lead,
            cells,
        })
    }

    pub(crate) fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub(crate) fn cells(&self) -> &[DayCell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn january_2024_starts_on_monday() {
        let grid = MonthGrid::build(MonthCursor::of(date!(2024 - 01 - 10))).unwrap();
        assert_eq!(grid.lead, 1);
        assert_eq!(grid.cells().len(), 31);
        assert_eq!(
            grid.cells().first().copied(),
            Some(DayCell {
                date: date!(2024 - 01 - 01),
                ordinal: 1
            })
        );
        assert_eq!(
            grid.cells().last().copied(),
            Some(DayCell {
                date: date!(2024 - 01 - 31),
                ordinal: 31
            })
        );
    }

    #[test]
    fn september_2024_starts_on_sunday() {
        let grid = MonthGrid::build(MonthCursor::of(date!(2024 - 09 - 01))).unwrap();
        assert_eq!(grid.lead, 7);
        assert_eq!(grid.cells().len(), 30);
    }

    #[test]
    fn leap_february_has_29_cells() {
        let grid = MonthGrid::build(MonthCursor::of(date!(2024 - 02 - 14))).unwrap();
        assert_eq!(grid.cells().len(), 29);
        assert_eq!(
            grid.cells().last().map(|cell| cell.date),
            Some(date!(2024 - 02 - 29))
        );
    }

    #[test]
    fn ordinals_match_dates() {
        let grid = MonthGrid::build(MonthCursor::of(date!(2024 - 06 - 01))).unwrap();
        for cell in grid.cells() {
            assert_eq!(cell.date.day(), cell.ordinal);
        }
    }
}
