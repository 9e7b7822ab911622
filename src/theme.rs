use crate::data::Metric;
use crate::picker::highlight::CellClass;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TABLE_HEADER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) fn chart_style(metric: Metric) -> Style {
    match metric {
        Metric::Orders => BASE_STYLE.fg(Color::LightCyan),
        Metric::Revenue => BASE_STYLE.fg(Color::LightYellow),
        Metric::Customers => BASE_STYLE.fg(Color::LightGreen),
    }
}

pub(crate) mod picker {
    use super::*;

    pub(crate) const INPUT_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

    pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const NAV_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    const START_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    const INTERIOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

    const END_STYLE: Style = START_STYLE;

    pub(crate) fn class_style(class: CellClass) -> Style {
        match class {
            CellClass::Unselected => BASE_STYLE,
            CellClass::Start => START_STYLE,
            CellClass::Interior => INTERIOR_STYLE,
            CellClass::End => END_STYLE,
        }
    }
}
