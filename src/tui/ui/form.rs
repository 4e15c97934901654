//! Shared form rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::forms::{FieldHighlight, FormDraft};

/// Render every field of `form` as a bordered input, one per row
///
/// Required fields get a green border once filled and a gray one while blank.
/// The focused field is highlighted only while `editing`.
pub fn render_form(f: &mut Frame, area: Rect, form: &FormDraft, title: &str, editing: bool) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let fields = form.fields();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let focused = editing && i == form.focus();

        let border = match form.highlight(i) {
            FieldHighlight::Filled => Style::default().fg(Color::Green),
            FieldHighlight::Empty => Style::default().fg(Color::Gray),
            FieldHighlight::Neutral => Style::default().fg(Color::DarkGray),
        };
        let border = if focused {
            border.add_modifier(Modifier::BOLD)
        } else {
            border
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };

        let mut spans = vec![Span::styled(
            field.value.as_str(),
            if field.read_only {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            },
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border),
        );
        f.render_widget(input, rows[i]);
    }
}
