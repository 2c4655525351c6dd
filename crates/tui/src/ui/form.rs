//! Form controls and the submit trigger.

use credit_predict::Field;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::{slider, stepper};

/// Draw the eight editable fields in two columns.
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Customer Details ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let (left, right) = Field::all().split_at(4);
    draw_column(frame, columns[0], app, left);
    draw_column(frame, columns[1], app, right);
}

fn draw_column(frame: &mut Frame, area: Rect, app: &App, fields: &[Field]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(2)))
        .split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        draw_field(frame, *row, app, *field);
    }
}

fn draw_field(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    let focused = app.focus == field;
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if focused { "▶ " } else { "  " };
    let mut label = vec![Span::styled(format!("{}{}", marker, field.label()), label_style)];
    if let (true, Some(help)) = (focused, field.help()) {
        label.push(Span::styled(
            format!("  {}", help),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), parts[0]);

    let control = parts[1].inner(Margin {
        horizontal: 2,
        vertical: 0,
    });
    let form = app.controller.form();

    match (field, form.int_value(field), field.range()) {
        (Field::CreditAmount, Some(value), Some(range)) => {
            frame.render_widget(stepper(value, range, focused), control);
        }
        (_, Some(value), Some(range)) => {
            frame.render_widget(slider(value, range, focused), control);
        }
        _ => {
            if let Some((options, selected)) = form.options(field) {
                let line = option_line(&options, selected, focused);
                frame.render_widget(Paragraph::new(line), control);
            }
        }
    }
}

fn option_line(options: &[&'static str], selected: usize, focused: bool) -> Line<'static> {
    let active = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let spans: Vec<Span> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i == selected {
                Span::styled(format!("[{}] ", option), active)
            } else {
                Span::styled(format!(" {}  ", option), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    Line::from(spans)
}

/// Draw the submit trigger, disabled while a prediction is running.
pub fn draw_submit(frame: &mut Frame, area: Rect, app: &App) {
    let (label, style) = if app.controller.is_loading() {
        (
            " Waiting for the model... ".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            " [Enter] Get Prediction ".to_string(),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        Span::styled(label, style),
        Span::styled(
            format!("   POST {}", app.endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let trigger = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(trigger, area);
}
