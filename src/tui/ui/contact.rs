//! Contact page rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::types::InputMode;
use super::form::render_form;

/// Contact form with a short intro
pub fn render_contact(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(10)])
        .split(area);

    let editing = app.mode == InputMode::EditContact;
    let intro = Paragraph::new(vec![
        Line::from("Tell us about your project and we'll get back to you."),
        Line::from(if editing {
            "Fields marked * are required. Ctrl+S sends the message."
        } else {
            "Press Enter or e to start typing."
        }),
    ])
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Contact Us"));
    f.render_widget(intro, chunks[0]);

    render_form(f, chunks[1], &app.contact_form, "Message", editing);
}
