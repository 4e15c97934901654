//! Careers page rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::tui::app::App;
use crate::tui::types::InputMode;
use super::form::render_form;

/// Job cards on the left, application form on the right when open
pub fn render_careers(f: &mut Frame, app: &App, area: Rect) {
    let board = &app.job_board;

    let chunks = if board.is_form_open() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(area)
    };

    let items: Vec<ListItem> = board
        .openings()
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let selected = i == app.selected_job;
            let expanded = board.expanded() == Some(i);

            let marker = if expanded { "▼ " } else { "▶ " };
            let title_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(job.title.as_str(), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", job.summary),
                    Style::default().fg(Color::Gray),
                )),
            ];
            if expanded {
                for detail in &job.details {
                    lines.push(Line::from(Span::styled(
                        format!("    • {}", detail),
                        Style::default().fg(Color::White),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    "    Apply: a",
                    Style::default().fg(Color::Green),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Open Positions (↑↓ select, Enter expand, a apply)"),
    );
    f.render_widget(list, chunks[0]);

    if board.is_form_open() {
        render_form(
            f,
            chunks[1],
            &board.form,
            "Apply Now",
            app.mode == InputMode::EditApplication,
        );
    }
}
