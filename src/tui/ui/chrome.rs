//! Navbar, footer and overlays drawn on every page

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use crate::navigation::NavbarStyle;
use crate::tui::app::App;
use crate::tui::types::{InputMode, Page};
use super::helpers::{centered_rect, notification_color, truncate};

/// Top bar with the page tabs; gains a heavy border once the body scrolls
pub fn render_navbar(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current_page();

    let mut spans = vec![Span::styled(
        "Guru ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for (i, page) in Page::all().into_iter().enumerate() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        let label = format!("{} {}", i + 1, page.label());
        if page == current {
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::White)));
        }
    }
    spans.push(Span::styled("  ☰ m", Style::default().fg(Color::DarkGray)));

    let block = match app.router.navbar_style() {
        NavbarStyle::Flat => Block::default().borders(Borders::ALL),
        NavbarStyle::Elevated => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Cyan)),
    };

    let navbar = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(navbar, area);
}

/// Bottom bar: key help, queue size, API base and the back-to-home hint
pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.router.back_to_home_visible() {
        spans.push(Span::styled("← Home: h/Esc", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
    }

    let help = match app.mode {
        InputMode::Browse => "Pages: 1-5/Tab | Menu: m | Sync: s | Quit: q",
        InputMode::EditContact | InputMode::EditApplication => {
            "Next: Tab/↓ | Prev: ↑ | Submit: Ctrl+S | Done: Esc"
        }
        InputMode::EditApiBase => "Save: Enter | Cancel: Esc",
    };
    spans.push(Span::styled(help, Style::default().fg(Color::DarkGray)));

    if !app.outbox.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} queued", app.outbox.len()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if app.in_flight > 0 || app.sync_running {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("⏳ sending...", Style::default().fg(Color::Cyan)));
    }

    if app.router.api_settings_visible() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} (p)", app.config.display_label()),
            Style::default().fg(Color::Gray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

/// Stack of active notifications in the top-right corner
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let width = 50.min(area.width);
    let mut y = area.y + 3;

    for notification in app.notifications.active(Instant::now()) {
        let text = truncate(&notification.message, 200);
        let lines = (text.chars().count() as u16 / width.saturating_sub(4).max(1)) + 1;
        let height = lines + 2;
        if y + height > area.y + area.height {
            break;
        }

        let rect = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        let color = notification_color(notification.kind);
        let banner = Paragraph::new(text)
            .style(Style::default().fg(Color::White).bg(color))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

        f.render_widget(Clear, rect);
        f.render_widget(banner, rect);
        y += height;
    }
}

/// Dropdown page list opened with the hamburger key
pub fn render_mobile_menu(f: &mut Frame, app: &App, area: Rect) {
    let pages = Page::all();
    let height = (pages.len() as u16 + 2).min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(24),
        y: area.y + 3.min(area.height.saturating_sub(height)),
        width: 24.min(area.width),
        height,
    };

    let items: Vec<ListItem> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            if i == app.menu_index {
                ListItem::new(Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        page.label(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(vec![Span::raw("  "), Span::raw(page.label())]))
            }
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Menu")
            .style(Style::default().bg(Color::Black)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(menu, rect);
}

/// Prompt for a new API base URL
pub fn render_api_prompt(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 30, area);

    let text = vec![
        Line::from(Span::styled(
            "Enter API base URL (e.g. https://api.example.com)",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(app.api_input.as_str(), Style::default().fg(Color::Green)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Current: {}", app.config.api_base()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("API Settings")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(prompt, popup);
}
