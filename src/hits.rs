use ratatui::layout::{Position, Rect};
use time::Date;

/// What a pointer click resolves to.  Day cells carry their calendar date
/// so the handler never has to re-derive it from screen coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ClickTarget {
    /// The picker's input line; toggles the panel.
    Trigger,
    /// The "previous month" control.
    NavBack,
    /// The "next month" control.
    NavForward,
    /// A calendar day cell.
    Day(Date),
    /// Panel chrome; swallows the click without acting.
    Panel,
    /// Anywhere else; closes an open panel.
    Outside,
}

/// Typed hit regions, rebuilt from scratch on every render.  Earlier
/// entries win, so day cells and controls are pushed before the panel
/// catch-all.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HitMap {
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub(crate) fn clear(&mut self) {
        self.regions.clear();
    }

    pub(crate) fn push(&mut self, area: Rect, target: ClickTarget) {
        self.regions.push((area, target));
    }

    pub(crate) fn resolve(&self, position: Position) -> ClickTarget {
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map_or(ClickTarget::Outside, |&(_, target)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn first_matching_region_wins() {
        let mut hits = HitMap::default();
        hits.push(
            Rect::new(2, 2, 4, 1),
            ClickTarget::Day(date!(2024 - 01 - 01)),
        );
        hits.push(Rect::new(0, 0, 20, 10), ClickTarget::Panel);
        assert_eq!(
            hits.resolve(Position::new(3, 2)),
            ClickTarget::Day(date!(2024 - 01 - 01))
        );
        assert_eq!(hits.resolve(Position::new(10, 5)), ClickTarget::Panel);
    }

    #[test]
    fn misses_resolve_to_outside() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 5, 1), ClickTarget::Trigger);
        assert_eq!(hits.resolve(Position::new(5, 0)), ClickTarget::Outside);
        assert_eq!(hits.resolve(Position::new(0, 1)), ClickTarget::Outside);
        hits.clear();
        assert_eq!(hits.resolve(Position::new(0, 0)), ClickTarget::Outside);
    }
}
