use crate::data::{Metric, MetricsFeed};
use crate::picker::DateRange;
use crate::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Sparkline, Widget},
};

/// One dashboard chart: a label, the range total in the title, and scaled
/// per-day bars.  Data is replaced wholesale when the range changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MetricChart {
    metric: Metric,
    header: String,
    series: Vec<u64>,
}

impl MetricChart {
    pub(crate) fn new(metric: Metric) -> MetricChart {
        MetricChart {
            metric,
            header: String::new(),
            series: Vec::new(),
        }
    }

    pub(crate) fn update(&mut self, feed: &dyn MetricsFeed, range: DateRange) {
        let metric = self.metric;
        self.series = range.days().map(|day| feed.daily(metric, day)).collect();
        let total = self.series.iter().sum();
        self.header = self.metric.format_total(total);
    }

}

impl Widget for &MetricChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {}: {} ", self.metric.label(), self.header);
        let block = Block::bordered().style(theme::BASE_STYLE).title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        Sparkline::default()
            .data(self.series.iter().copied())
            .style(theme::chart_style(self.metric))
            .render(inner, buf);
    }
}
