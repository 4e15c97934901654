// UI Tests - rendering into ratatui's test backend

use super::test_app;
use crate::tui::ui::{truncate, ui};
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_home_page_renders() {
    let app = test_app();
    let screen = render(&app);
    assert!(screen.contains("Guru"));
    assert!(screen.contains("Services"));
    assert!(!screen.contains("API: "), "API settings hidden on home");
    assert!(!screen.contains("Home: h/Esc"), "no back-to-home on home");
}

#[test]
fn test_inner_page_shows_api_and_back_link() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    let screen = render(&app);
    assert!(screen.contains("Contact Us"));
    assert!(screen.contains("API: http://localhost:5000"));
    assert!(screen.contains("Home: h/Esc"));
}

#[test]
fn test_careers_page_lists_jobs() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('a'));
    let screen = render(&app);
    assert!(screen.contains("Full Stack Developer"));
    assert!(screen.contains("QA Engineer"));
    assert!(screen.contains("Apply Now"));
}

#[test]
fn test_empty_outbox() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('5'));
    let screen = render(&app);
    assert!(screen.contains("Outbox (0 queued"));
}

#[test]
fn test_overlays_render() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('p'));
    app.notifications.show_error("Please fill in all required fields");

    let screen = render(&app);
    assert!(screen.contains("API Settings"));
    assert!(screen.contains("Please fill in all required fields"));
}

#[test]
fn test_truncate_helper() {
    assert_eq!(truncate("abcdef", 6), "abcdef");
    assert_eq!(truncate("abcdefgh", 6), "abc...");
}
