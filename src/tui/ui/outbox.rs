//! Outbox page: submissions waiting for the backend

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::forms::FormKind;
use crate::tui::app::App;
use crate::util::format_timestamp_ms;

/// List of queued submissions, oldest first per queue
pub fn render_outbox(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Outbox ({} queued, s to sync)", app.outbox.len());

    if app.outbox.is_empty() {
        let empty = Paragraph::new("Nothing waiting. Everything has been delivered.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .outbox
        .iter()
        .map(|row| {
            let (tag, color) = match row.kind {
                FormKind::Contact => ("[message]    ", Color::Cyan),
                FormKind::Application => ("[application]", Color::Magenta),
            };
            ListItem::new(Line::from(vec![
                Span::styled(tag, Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    format_timestamp_ms(row.queued_at),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(row.summary.as_str(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}
