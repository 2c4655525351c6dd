//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the title and subtitle.
pub fn draw_header(frame: &mut Frame, area: Rect, _app: &App) {
    let lines = vec![
        Line::from("Credit Risk Predictor")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::from(vec![
            Span::raw("Enter customer details below to get a "),
            Span::styled("risk prediction", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" from the ML model."),
        ]),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}
