use super::DateRange;
use time::Date;

/// The two-click selection state machine.  `Picking` exists only between
/// the first and second click; there is no way to hold an "active" session
/// without a pinned date.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Selection {
    Idle,
    Picking { pinned: Date },
}

/// What one day-cell click did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ClickOutcome {
    /// First click: the date is pinned as the range anchor.
    Pinned(Date),
    /// Second click: the anchor and the clicked date were normalized into
    /// an ordered range, and the machine is Idle again.
    Committed(DateRange),
}

impl Selection {
    pub(crate) fn click(&mut self, date: Date) -> ClickOutcome {
        match *self {
            Selection::Idle => {
                *self = Selection::Picking { pinned: date };
                ClickOutcome::Pinned(date)
            }
            Selection::Picking { pinned } => {
                *self = Selection::Idle;
                ClickOutcome::Committed(DateRange::between(pinned, date))
            }
        }
    }

    pub(crate) fn pinned(&self) -> Option<Date> {
        match *self {
            Selection::Idle => None,
            Selection::Picking { pinned } => Some(pinned),
        }
    }
}
