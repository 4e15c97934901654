//! UI rendering module - page-specific rendering functions
//!
//! Every frame draws the navbar, the visible page and the footer, then any
//! overlays (mobile menu, API prompt, notifications) on top.

mod careers;
mod chrome;
mod contact;
mod form;
mod helpers;
mod home;
mod outbox;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::tui::app::App;
use crate::tui::types::{InputMode, Page};

pub use careers::render_careers;
pub use chrome::{render_api_prompt, render_footer, render_mobile_menu, render_navbar, render_notifications};
pub use contact::render_contact;
pub use form::render_form;
pub use helpers::{centered_rect, notification_color, truncate};
pub use home::{render_home, render_services};
pub use outbox::render_outbox;

/// Main UI rendering function - dispatches to page-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(5),    // Page
            Constraint::Length(3), // Footer
        ])
        .split(size);

    render_navbar(f, app, chunks[0]);

    match app.current_page() {
        Page::Home => render_home(f, app, chunks[1]),
        Page::Services => render_services(f, app, chunks[1]),
        Page::Careers => render_careers(f, app, chunks[1]),
        Page::Contact => render_contact(f, app, chunks[1]),
        Page::Outbox => render_outbox(f, app, chunks[1]),
    }

    render_footer(f, app, chunks[2]);

    if app.router.menu.is_open() {
        render_mobile_menu(f, app, size);
    }
    if app.mode == InputMode::EditApiBase {
        render_api_prompt(f, app, size);
    }
    render_notifications(f, app, size);
}
