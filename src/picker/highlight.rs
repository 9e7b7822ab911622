use super::DateRange;
use crate::datemath;
use std::cmp::Ordering;
use time::Date;

/// Display role of one day cell relative to the active selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellClass {
    Unselected,
    Start,
    Interior,
    End,
}

/// What the calendar is highlighted against: the committed range while no
/// pick is in progress, or the lone anchor after the first click.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Highlight {
    Range(DateRange),
    Anchor(Date),
}

/// Every date gets exactly one class.  The `End` row is matched first, so
/// a single-day range (`from == to`) deterministically classifies as
/// `End`.
pub(crate) fn classify(date: Date, highlight: Highlight) -> CellClass {
    match highlight {
        Highlight::Anchor(pinned) => {
            if datemath::compare(date, pinned) == Ordering::Equal {
                CellClass::Start
            } else {
                CellClass::Unselected
            }
        }
        Highlight::Range(range) => {
            match (
                datemath::compare(date, range.start()),
                datemath::compare(date, range.end()),
            ) {
                (_, Ordering::Equal) => CellClass::End,
                (Ordering::Equal, _) => CellClass::Start,
                (Ordering::Greater, Ordering::Less) => CellClass::Interior,
                _ => CellClass::Unselected,
            }
        }
    }
}
