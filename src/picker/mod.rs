pub(crate) mod grid;
pub(crate) mod highlight;
mod nav;
mod select;

use self::highlight::{classify, Highlight};
use self::nav::{Direction, EndOfCalendarError, MonthPair};
use self::select::{ClickOutcome, Selection};
use crate::datemath::{self, MonthCursor};
use crate::hits::{ClickTarget, HitMap};
use crate::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::Style,
    widgets::{Block, Clear, Widget},
};
use std::cmp::Ordering;
use time::Date;

/// Columns per day cell.
const DAY_WIDTH: u16 = 4;

/// Width of one month grid (seven day columns).
const GRID_WIDTH: u16 = DAY_WIDTH * 7;

/// Columns between the two month grids.
const GRID_GUTTER: u16 = 3;

const PANEL_INNER_WIDTH: u16 = GRID_WIDTH * 2 + GRID_GUTTER;

pub(crate) const PANEL_WIDTH: u16 = PANEL_INNER_WIDTH + 2;

/// Title/nav row and weekday header, above the week rows.
const HEADER_ROWS: u16 = 2;

/// A 31-day month starting on Sunday needs six week rows.
const PANEL_HEIGHT: u16 = HEADER_ROWS + 6 + 2;

/// Width of the input line: `[ YYYY-MM-DD - YYYY-MM-DD ]`.
const INPUT_WIDTH: u16 = 27;

const NAV_WIDTH: u16 = 3;

static WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su ";

/// A committed selection.  `from <= to` always holds: the fields are
/// private and every constructor sorts by `datemath::compare`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DateRange {
    from: Date,
    to: Date,
}

impl DateRange {
    pub(crate) fn between(a: Date, b: Date) -> DateRange {
        if datemath::compare(a, b) == Ordering::Greater {
            DateRange { from: b, to: a }
        } else {
            DateRange { from: a, to: b }
        }
    }

    pub(crate) fn single(date: Date) -> DateRange {
        DateRange {
            from: date,
            to: date,
        }
    }

    pub(crate) fn start(self) -> Date {
        self.from
    }

    pub(crate) fn end(self) -> Date {
        self.to
    }

    /// The contained days in calendar order, bounds included.
    pub(crate) fn days(self) -> impl Iterator<Item = Date> {
        std::iter::successors(Some(self.from), move |&day| {
            day.next_day()
                .filter(|&next| datemath::compare(next, self.to) != Ordering::Greater)
        })
    }
}

/// Result of routing one pointer click through the widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerOutput {
    /// The click was consumed; redraw.
    Handled,
    /// The click hit a control that cannot act right now.
    Rejected,
    /// A completed two-click selection; the panel has closed and the
    /// committed range already holds the new value.
    RangeChosen(DateRange),
}

/// State that exists only while the calendar is shown.  Dropping it is the
/// only close path, so a closed picker cannot hold a selection session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Panel {
    months: MonthPair,
    selection: Selection,
}

/// The date-range picker: an input line that toggles a dual-month calendar
/// panel, driven entirely by pointer clicks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RangePicker {
    committed: DateRange,
    panel: Option<Panel>,
    hits: HitMap,
}

impl RangePicker {
    pub(crate) fn new(initial: DateRange) -> RangePicker {
        RangePicker {
            committed: initial,
            panel: None,
            hits: HitMap::default(),
        }
    }

    pub(crate) fn committed(&self) -> DateRange {
        self.committed
    }

    pub(crate) fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Show the panel with a fresh Idle session; the shown pair ends at
    /// the month of the committed `to` bound.
    pub(crate) fn open(&mut self) {
        self.panel = Some(Panel {
            months: MonthPair::new(MonthCursor::of(self.committed.end())),
            selection: Selection::Idle,
        });
    }

    /// Hide the panel, discarding any in-progress pick.
    pub(crate) fn close(&mut self) {
        self.panel = None;
    }

    /// Map a pointer position through the hit regions of the last render.
    pub(crate) fn resolve_click(&self, position: Position) -> ClickTarget {
        self.hits.resolve(position)
    }

    pub(crate) fn handle_click(&mut self, target: ClickTarget) -> PickerOutput {
        match target {
            ClickTarget::Trigger => {
                if self.is_open() {
                    self.close();
                } else {
                    self.open();
                }
                PickerOutput::Handled
            }
            ClickTarget::NavBack => self.navigate(Direction::Back),
            ClickTarget::NavForward => self.navigate(Direction::Forward),
            ClickTarget::Day(date) => self.click_day(date),
            ClickTarget::Panel => PickerOutput::Handled,
            ClickTarget::Outside => {
                if self.is_open() {
                    self.close();
                }
                PickerOutput::Handled
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> PickerOutput {
        let Some(panel) = self.panel.as_mut() else {
            return PickerOutput::Rejected;
        };
        match panel.months.navigate(direction) {
            Ok(()) => PickerOutput::Handled,
            Err(EndOfCalendarError) => PickerOutput::Rejected,
        }
    }

    fn click_day(&mut self, date: Date) -> PickerOutput {
        let Some(panel) = self.panel.as_mut() else {
            return PickerOutput::Rejected;
        };
        match panel.selection.click(date) {
            ClickOutcome::Pinned(_) => PickerOutput::Handled,
            ClickOutcome::Committed(range) => {
                self.committed = range;
                self.close();
                PickerOutput::RangeChosen(range)
            }
        }
    }

    /// What the calendar cells are classified against: the lone anchor
    /// mid-pick, otherwise the committed range.
    fn highlight(&self) -> Highlight {
        match self.panel.as_ref().and_then(|panel| panel.selection.pinned()) {
            Some(pinned) => Highlight::Anchor(pinned),
            None => Highlight::Range(self.committed),
        }
    }
}

impl Widget for &mut RangePicker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(*buf.area());
        self.hits.clear();
        if area.is_empty() {
            return;
        }

        let input = Rect {
            x: area.x,
            y: area.y,
            width: INPUT_WIDTH,
            height: 1,
        }
        .intersection(area);
        let text = format!(
            "[ {} - {} ]",
            datemath::format_ymd(self.committed.start()),
            datemath::format_ymd(self.committed.end())
        );
        buf.set_stringn(
            input.x,
            input.y,
            &text,
            usize::from(input.width),
            theme::picker::INPUT_STYLE,
        );
        self.hits.push(input, ClickTarget::Trigger);

        let Some(panel) = self.panel else {
            return;
        };
        let Some((earlier, later)) = panel.months.grids() else {
            return;
        };
        let highlight = self.highlight();

        let panel_area = Rect {
            x: area.x,
            y: area.y.saturating_add(1),
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        }
        .intersection(area);
        if panel_area.is_empty() {
            return;
        }
        Clear.render(panel_area, buf);
        Block::bordered()
            .style(theme::BASE_STYLE)
            .render(panel_area, buf);
        let inner = panel_area.inner(Margin::new(1, 1));
        if inner.is_empty() {
            self.hits.push(panel_area, ClickTarget::Panel);
            return;
        }

        let mut canvas = Canvas { clip: inner, buf };
        let nav_back = Rect {
            x: inner.x,
            y: inner.y,
            width: NAV_WIDTH,
            height: 1,
        }
        .intersection(inner);
        canvas.print(nav_back.x, nav_back.y, " < ", theme::picker::NAV_STYLE);
        self.hits.push(nav_back, ClickTarget::NavBack);
        let nav_x = inner.right().saturating_sub(NAV_WIDTH).max(inner.x);
        let nav_forward = Rect {
            x: nav_x,
            y: inner.y,
            width: NAV_WIDTH,
            height: 1,
        }
        .intersection(inner);
        canvas.print(nav_forward.x, nav_forward.y, " > ", theme::picker::NAV_STYLE);
        self.hits.push(nav_forward, ClickTarget::NavForward);

        for (grid, grid_x) in [
            (&earlier, inner.x),
            (&later, inner.x + GRID_WIDTH + GRID_GUTTER),
        ] {
            let cursor = grid.cursor();
            let title = format!("{} {}", cursor.month, cursor.year);
            let title_width = u16::try_from(title.len()).unwrap_or(GRID_WIDTH);
            let title_x = grid_x + GRID_WIDTH.saturating_sub(title_width) / 2;
            canvas.print(title_x, inner.y, &title, theme::picker::MONTH_STYLE);
            canvas.print(
                grid_x,
                inner.y + 1,
                WEEKDAY_HEADER,
                theme::picker::WEEKDAY_STYLE,
            );
            for cell in grid.cells() {
                let rect = cell_rect(inner, grid_x, grid.lead, cell.ordinal);
                let class = classify(cell.date, highlight);
                let label = format!(" {:2} ", cell.ordinal);
                canvas.print(rect.x, rect.y, &label, theme::picker::class_style(class));
                self.hits
                    .push(rect.intersection(inner), ClickTarget::Day(cell.date));
            }
        }

        // Catch-all last: clicks in panel gaps do nothing.
        self.hits.push(panel_area, ClickTarget::Panel);
    }
}

/// Screen rectangle of one day cell within the Monday-first grid.
fn cell_rect(inner: Rect, grid_x: u16, lead: u8, ordinal: u8) -> Rect {
    let slot = u16::from(lead - 1) + u16::from(ordinal - 1);
    Rect {
        x: grid_x + (slot % 7) * DAY_WIDTH,
        y: inner.y + HEADER_ROWS + slot / 7,
        width: DAY_WIDTH,
        height: 1,
    }
}

/// Clipped text drawing in the teacher style of a tiny buffer canvas.
#[derive(Debug)]
struct Canvas<'a> {
    clip: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if self.clip.contains(Position::new(x, y)) {
            let max = usize::from(self.clip.right() - x);
            self.buf.set_stringn(x, y, text, max, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::highlight::CellClass;
    use time::macros::date;
    use time::Month;

    #[test]
    fn two_click_scenario_with_navigation() {
        let mut picker = RangePicker::new(DateRange::single(date!(2024 - 01 - 10)));
        picker.handle_click(ClickTarget::Trigger);
        assert!(picker.is_open());
        // The shown pair ends at the committed `to` month.
        assert_eq!(
            picker.panel.map(|panel| panel.months.later()),
            Some(MonthCursor {
                year: 2024,
                month: Month::January
            })
        );

        assert_eq!(
            picker.handle_click(ClickTarget::Day(date!(2024 - 01 - 20))),
            PickerOutput::Handled
        );
        assert_eq!(
            classify(date!(2024 - 01 - 20), picker.highlight()),
            CellClass::Start
        );

        assert_eq!(
            picker.handle_click(ClickTarget::NavForward),
            PickerOutput::Handled
        );
        assert_eq!(
            picker.handle_click(ClickTarget::NavBack),
            PickerOutput::Handled
        );
        // Navigation never disturbs the pinned anchor.
        assert_eq!(
            picker.panel.and_then(|panel| panel.selection.pinned()),
            Some(date!(2024 - 01 - 20))
        );

        let expected = DateRange::between(date!(2024 - 01 - 05), date!(2024 - 01 - 20));
        assert_eq!(
            picker.handle_click(ClickTarget::Day(date!(2024 - 01 - 05))),
            PickerOutput::RangeChosen(expected)
        );
        assert!(!picker.is_open());
        assert_eq!(picker.committed(), expected);

        let highlight = picker.highlight();
        assert_eq!(
            classify(date!(2024 - 01 - 05), highlight),
            CellClass::Start
        );
        for day in 6..=19 {
            let date = date!(2024 - 01 - 01).replace_day(day).unwrap();
            assert_eq!(classify(date, highlight), CellClass::Interior);
        }
        assert_eq!(classify(date!(2024 - 01 - 20), highlight), CellClass::End);
    }

    #[test]
    fn outside_click_discards_the_pick() {
        let committed = DateRange::between(date!(2024 - 01 - 01), date!(2024 - 01 - 10));
        let mut picker = RangePicker::new(committed);
        picker.handle_click(ClickTarget::Trigger);
        picker.handle_click(ClickTarget::Day(date!(2024 - 02 - 14)));
        picker.handle_click(ClickTarget::Outside);
        assert!(!picker.is_open());
        assert_eq!(picker.committed(), committed);
        // Reopening restores the Idle view of the committed range.
        picker.handle_click(ClickTarget::Trigger);
        assert_eq!(picker.highlight(), Highlight::Range(committed));
    }

    #[test]
    fn trigger_toggles_and_discards_like_any_close() {
        let committed = DateRange::single(date!(2024 - 06 - 01));
        let mut picker = RangePicker::new(committed);
        picker.handle_click(ClickTarget::Trigger);
        picker.handle_click(ClickTarget::Day(date!(2024 - 06 - 10)));
        picker.handle_click(ClickTarget::Trigger);
        assert!(!picker.is_open());
        assert_eq!(picker.committed(), committed);
    }

    #[test]
    fn panel_clicks_are_swallowed() {
        let mut picker = RangePicker::new(DateRange::single(date!(2024 - 06 - 01)));
        picker.handle_click(ClickTarget::Trigger);
        picker.handle_click(ClickTarget::Day(date!(2024 - 06 - 10)));
        assert_eq!(
            picker.handle_click(ClickTarget::Panel),
            PickerOutput::Handled
        );
        assert!(picker.is_open());
        assert_eq!(
            picker.panel.and_then(|panel| panel.selection.pinned()),
            Some(date!(2024 - 06 - 10))
        );
    }

    #[test]
    fn range_days_iterates_bounds_inclusive() {
        let range = DateRange::between(date!(2024 - 01 - 30), date!(2024 - 02 - 02));
        let days = range.days().collect::<Vec<_>>();
        assert_eq!(
            days,
            vec![
                date!(2024 - 01 - 30),
                date!(2024 - 01 - 31),
                date!(2024 - 02 - 01),
                date!(2024 - 02 - 02),
            ]
        );
        assert_eq!(
            DateRange::single(date!(2024 - 01 - 10)).days().count(),
            1
        );
    }

    #[test]
    fn rendered_cells_hit_back_to_their_dates() {
        let mut picker = RangePicker::new(DateRange::single(date!(2024 - 01 - 10)));
        picker.open();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut picker, area, &mut buf);

        // Input line.
        assert_eq!(picker.resolve_click(Position::new(0, 0)), ClickTarget::Trigger);
        // Nav controls sit on the panel's title row.
        assert_eq!(picker.resolve_click(Position::new(1, 2)), ClickTarget::NavBack);
        assert_eq!(
            picker.resolve_click(Position::new(58, 2)),
            ClickTarget::NavForward
        );
        // January 2024 is the right-hand grid and starts on a Monday, so
        // day 1 is the first cell of the first week row.
        let right_grid_x = 1 + GRID_WIDTH + GRID_GUTTER;
        assert_eq!(
            picker.resolve_click(Position::new(right_grid_x, 4)),
            ClickTarget::Day(date!(2024 - 01 - 01))
        );
        // Panel gap clicks are Panel, clicks past the panel are Outside.
        assert_eq!(picker.resolve_click(Position::new(30, 10)), ClickTarget::Panel);
        assert_eq!(
            picker.resolve_click(Position::new(70, 20)),
            ClickTarget::Outside
        );
    }

    #[test]
    fn closed_picker_renders_only_the_trigger() {
        let mut picker = RangePicker::new(DateRange::single(date!(2024 - 01 - 10)));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut picker, area, &mut buf);
        assert_eq!(picker.resolve_click(Position::new(5, 0)), ClickTarget::Trigger);
        assert_eq!(
            picker.resolve_click(Position::new(5, 5)),
            ClickTarget::Outside
        );
    }
}
