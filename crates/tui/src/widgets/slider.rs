//! Slider and stepper controls for range fields.

use credit_predict::IntRange;
use ratatui::{
    prelude::*,
    widgets::{LineGauge, Paragraph},
};

/// Horizontal slider showing `value` within `range`.
pub fn slider<'a>(value: u32, range: IntRange, focused: bool) -> LineGauge<'a> {
    let filled = if focused { Color::Yellow } else { Color::Cyan };

    LineGauge::default()
        .ratio(range.ratio(value))
        .label(format!("{:>3}  ({}-{})", value, range.min, range.max))
        .line_set(symbols::line::THICK)
        .filled_style(Style::default().fg(filled).add_modifier(Modifier::BOLD))
        .unfilled_style(Style::default().fg(Color::DarkGray))
}

/// Numeric stepper: `value` between decrement and increment markers.
pub fn stepper<'a>(value: u32, range: IntRange, focused: bool) -> Paragraph<'a> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let marker = Style::default().fg(Color::DarkGray);
    let at_min = value <= range.min;
    let at_max = value >= range.max;

    Paragraph::new(Line::from(vec![
        Span::styled(if at_min { "  " } else { "◂ " }, marker),
        Span::styled(format!("{:>6}", value), value_style),
        Span::styled(if at_max { "  " } else { " ▸" }, marker),
        Span::styled(format!("   step {}", range.step), marker),
    ]))
}
