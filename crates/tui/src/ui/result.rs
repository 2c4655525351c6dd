//! Prediction result area.

use credit_predict::{StatusView, Tone};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Style for a risk label of the given tone.
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Warning => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Positive => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Warning => "⚠",
        Tone::Positive => "✓",
    }
}

/// Draw the area below the trigger according to the submission status.
pub fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    match app.controller.view() {
        StatusView::Idle => {
            let hint = Paragraph::new(
                "Adjust the fields above, then press [Enter] to get a prediction.",
            )
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
        }
        StatusView::Loading => {
            let busy = Paragraph::new(format!("{} Calling the model API...", app.spinner()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(busy, area);
        }
        StatusView::Success {
            probability,
            risk_label,
            tone,
        } => draw_success(frame, area, &probability, &risk_label, tone),
        StatusView::Error { kind, message } => {
            let text = vec![
                Line::from(format!("✗ {}", message))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Line::from(kind.as_str()).style(Style::default().fg(Color::DarkGray)),
            ];
            let error = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Prediction Failed "),
                );
            frame.render_widget(error, area);
        }
    }
}

fn draw_success(frame: &mut Frame, area: Rect, probability: &str, risk_label: &str, tone: Tone) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Prediction Result ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let metric = Paragraph::new(vec![
        Line::from("Default Probability").style(Style::default().fg(Color::DarkGray)),
        Line::from(probability.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(metric, halves[0]);

    let label = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Risk Level: "),
            Span::styled(format!("{} {}", risk_label, tone_marker(tone)), tone_style(tone)),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(label, halves[1]);
}
