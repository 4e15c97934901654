//! Home and services pages

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

const SERVICES: &[(&str, &str)] = &[
    ("Web Development", "Fast, responsive sites and web applications"),
    ("Mobile Apps", "Native and cross-platform apps for Android and iOS"),
    ("UI/UX Design", "Interfaces designed around your users"),
    ("Cloud & DevOps", "Deployment pipelines, hosting and monitoring"),
    ("Consulting", "Architecture reviews and technical planning"),
];

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Landing page
pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        heading("Building software that moves your business forward"),
        Line::from(""),
        Line::from("We design, build and run web and mobile products for companies of every size."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Get in touch: ", Style::default().fg(Color::DarkGray)),
            Span::styled("4", Style::default().fg(Color::Yellow)),
            Span::styled("  |  Join the team: ", Style::default().fg(Color::DarkGray)),
            Span::styled("3", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        heading("About"),
        Line::from(""),
    ];
    lines.push(Line::from(
        "A small team of engineers and designers who care about shipping reliable software.",
    ));
    lines.push(Line::from(""));
    lines.push(heading("What we do"));
    lines.push(Line::from(""));
    for (name, _) in SERVICES {
        lines.push(Line::from(format!("• {}", name)));
    }

    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .scroll((app.body_scroll().min(u16::MAX as u32) as u16, 0))
        .block(Block::default().borders(Borders::ALL).title("Home"));
    f.render_widget(page, area);
}

/// Services overview
pub fn render_services(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(""), heading("Our Services"), Line::from("")];
    for (name, description) in SERVICES {
        lines.push(Line::from(Span::styled(
            *name,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            *description,
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(""));
    }

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.body_scroll().min(u16::MAX as u32) as u16, 0))
        .block(Block::default().borders(Borders::ALL).title("Services"));
    f.render_widget(page, area);
}
