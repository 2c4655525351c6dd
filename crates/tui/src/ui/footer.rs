//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const HELP: &str = concat!(
    "[↑↓] Field  [←→] Change  [PgUp/PgDn] Big step  ",
    "[Enter] Predict  [r] Payload  [o] Response  [q] Quit"
);

const CAPTION: &str = "This UI calls the prediction service. The model is NOT in this app.";

/// Draw the footer bar with help, status and caption.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, HELP)
    } else {
        HELP.to_string()
    };

    let footer = Paragraph::new(vec![
        Line::from(help_text).style(Style::default().fg(Color::DarkGray)),
        Line::from(CAPTION).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
