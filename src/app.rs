use crate::charts::MetricChart;
use crate::data::{Metric, MetricsFeed};
use crate::picker::{DateRange, PickerOutput, RangePicker, PANEL_WIDTH};
use crate::table::DailyTable;
use crate::theme;
use crossterm::event::{
    read, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    widgets::Widget,
    Terminal,
};
use std::io::{self, Write};

/// The dashboard shell: the range picker plus the views derived from its
/// committed bounds.  All mouse input is routed through the picker's hit
/// map; the charts and the table are re-derived whenever it commits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Dashboard<F> {
    picker: RangePicker,
    orders: MetricChart,
    revenue: MetricChart,
    customers: MetricChart,
    table: DailyTable,
    feed: F,
    quitting: bool,
}

impl<F: MetricsFeed> Dashboard<F> {
    pub(crate) fn new(initial: DateRange, feed: F) -> Dashboard<F> {
        let mut dashboard = Dashboard {
            picker: RangePicker::new(initial),
            orders: MetricChart::new(Metric::Orders),
            revenue: MetricChart::new(Metric::Revenue),
            customers: MetricChart::new(Metric::Customers),
            table: DailyTable::default(),
            feed,
            quitting: false,
        };
        dashboard.refresh(initial);
        dashboard
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match read()? {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(Position::new(column, row))?,
            event => {
                if let Some(key) = event.as_key_press_event() {
                    if (key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c'))
                        || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        self.quitting = true;
                    } else {
                        self.beep()?;
                    }
                }
                // else: Redraw on resize, and we might as well redraw on
                // other stuff too
            }
        }
        Ok(())
    }

    fn handle_click(&mut self, position: Position) -> io::Result<()> {
        let target = self.picker.resolve_click(position);
        match self.picker.handle_click(target) {
            PickerOutput::Handled => Ok(()),
            PickerOutput::Rejected => self.beep(),
            PickerOutput::RangeChosen(range) => {
                self.refresh(range);
                Ok(())
            }
        }
    }

    /// Re-derive every dependent view.  The picker has already closed by
    /// the time a committed range arrives here.
    fn refresh(&mut self, range: DateRange) {
        self.orders.update(&self.feed, range);
        self.revenue.update(&self.feed, range);
        self.customers.update(&self.feed, range);
        self.table.update(&self.feed, range);
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }
}

impl<F: MetricsFeed> Widget for &mut Dashboard<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, theme::BASE_STYLE);
        if area.is_empty() {
            return;
        }
        let [header, charts, table] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .areas(area);
        buf.set_stringn(
            header.x,
            header.y,
            " Admin dashboard",
            usize::from(header.width),
            theme::TITLE_STYLE,
        );
        let [orders_area, revenue_area, customers_area] =
            Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(charts);
        Widget::render(&self.orders, orders_area, buf);
        Widget::render(&self.revenue, revenue_area, buf);
        Widget::render(&self.customers, customers_area, buf);
        Widget::render(&self.table, table, buf);
        // The picker paints last so its open panel overlays the charts.
        let picker_x = area.right().saturating_sub(PANEL_WIDTH).max(area.x);
        let picker_area = Rect {
            x: picker_x,
            y: header.y,
            width: area.right() - picker_x,
            height: area.bottom() - header.y,
        };
        Widget::render(&mut self.picker, picker_area, buf);
    }
}
