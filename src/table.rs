use crate::data::{Metric, MetricsFeed};
use crate::datemath;
use crate::picker::DateRange;
use crate::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Row, Table, Widget},
};
use time::Date;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DayRow {
    date: Date,
    orders: u64,
    revenue: u64,
    customers: u64,
}

/// Per-day breakdown of the committed range, busiest days first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DailyTable {
    rows: Vec<DayRow>,
}

impl DailyTable {
    pub(crate) fn update(&mut self, feed: &dyn MetricsFeed, range: DateRange) {
        self.rows = range
            .days()
            .map(|date| DayRow {
                date,
                orders: feed.daily(Metric::Orders, date),
                revenue: feed.daily(Metric::Revenue, date),
                customers: feed.daily(Metric::Customers, date),
            })
            .collect();
        self.rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    }
}

impl Widget for &DailyTable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Day", "Orders", "Revenue", "Customers"])
            .style(theme::TABLE_HEADER_STYLE);
        let rows = self.rows.iter().map(|row| {
            Row::new([
                datemath::format_ymd(row.date),
                row.orders.to_string(),
                Metric::Revenue.format_total(row.revenue),
                row.customers.to_string(),
            ])
        });
        let widths = [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths).header(header).block(
            Block::bordered()
                .style(theme::BASE_STYLE)
                .title(" Daily breakdown "),
        );
        Widget::render(table, area, buf);
    }
}
