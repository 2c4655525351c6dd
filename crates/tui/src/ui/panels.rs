//! Collapsible diagnostic panels for the raw payload and response.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Draw the payload and response panels side by side.
pub fn draw_panels(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let payload = app
        .controller
        .last_request()
        .map(|request| {
            request
                .to_pretty_json()
                .unwrap_or_else(|e| e.to_string())
        });
    draw_panel(
        frame,
        halves[0],
        "API request payload",
        'r',
        app.show_payload,
        payload.as_deref().unwrap_or("Nothing sent yet."),
    );

    let response = app
        .controller
        .last_response()
        .map(|response| response.to_pretty_json());
    draw_panel(
        frame,
        halves[1],
        "API response",
        'o',
        app.show_response,
        response.as_deref().unwrap_or("No response yet."),
    );
}

fn draw_panel(frame: &mut Frame, area: Rect, title: &str, key: char, expanded: bool, body: &str) {
    let arrow = if expanded { "▾" } else { "▸" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} See {} [{}] ", arrow, title, key));

    let panel = if expanded {
        Paragraph::new(body.to_string())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
    } else {
        Paragraph::new(format!("Press [{}] to expand", key))
            .style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(panel.block(block), area);
}
