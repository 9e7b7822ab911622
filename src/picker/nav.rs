use super::grid::MonthGrid;
use crate::datemath::MonthCursor;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Back,
    Forward,
}

/// The shown month pair: `later` plus its immediate predecessor.  Owned by
/// the picker's open panel and shifted only by navigation input; it never
/// reads or writes the selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthPair {
    later: MonthCursor,
}

impl MonthPair {
    pub(crate) fn new(later: MonthCursor) -> MonthPair {
        MonthPair { later }
    }

    pub(crate) fn later(self) -> MonthCursor {
        self.later
    }

    pub(crate) fn earlier(self) -> Option<MonthCursor> {
        self.later.prev()
    }

    pub(crate) fn navigate(&mut self, direction: Direction) -> Result<(), EndOfCalendarError> {
        let shifted = match direction {
            Direction::Back => self.later.prev(),
            Direction::Forward => self.later.next(),
        };
        // The earlier month of the new pair must stay representable too.
        match shifted.filter(|cursor| cursor.prev().is_some()) {
            Some(later) => {
                self.later = later;
                Ok(())
            }
            None => Err(EndOfCalendarError),
        }
    }

    /// Both displayed grids, earlier month first.
    pub(crate) fn grids(self) -> Option<(MonthGrid, MonthGrid)> {
        let earlier = MonthGrid::build(self.earlier()?)?;
        let later = MonthGrid::build(self.later)?;
        Some((earlier, later))
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of the calendar")]
pub(crate) struct EndOfCalendarError;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;

    #[test]
    fn navigation_shifts_one_month_with_year_carry() {
        let mut pair = MonthPair::new(MonthCursor::of(date!(2024 - 01 - 10)));
        assert_eq!(
            pair.earlier(),
            Some(MonthCursor {
                year: 2023,
                month: Month::December
            })
        );
        assert_eq!(pair.navigate(Direction::Forward), Ok(()));
        assert_eq!(
            pair.later(),
            MonthCursor {
                year: 2024,
                month: Month::February
            }
        );
        assert_eq!(pair.navigate(Direction::Back), Ok(()));
        assert_eq!(pair.navigate(Direction::Back), Ok(()));
        assert_eq!(
            pair.later(),
            MonthCursor {
                year: 2023,
                month: Month::December
            }
        );
    }

    #[test]
    fn grids_cover_the_shown_pair() {
        let pair = MonthPair::new(MonthCursor::of(date!(2024 - 03 - 15)));
        let (earlier, later) = pair.grids().unwrap();
        assert_eq!(earlier.cursor().month, Month::February);
        assert_eq!(earlier.cells().len(), 29);
        assert_eq!(later.cursor().month, Month::March);
        assert_eq!(later.cells().len(), 31);
    }

    #[test]
    fn navigation_stops_at_the_calendar_edge() {
        let mut pair = MonthPair::new(MonthCursor {
            year: -9999,
            month: Month::February,
        });
        assert_eq!(pair.navigate(Direction::Back), Err(EndOfCalendarError));
        assert_eq!(
            pair.later(),
            MonthCursor {
                year: -9999,
                month: Month::February
            }
        );
    }
}
