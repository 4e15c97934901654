//! Guru site TUI (Terminal User Interface)
//!
//! Usage: `guru-site-tui [settings.json] [#fragment]`

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use guru_site::storage::Settings;
use guru_site::tui::{ui::ui, App};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

const DEFAULT_SETTINGS_PATH: &str = "guru-site.json";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let fragment = args.next();

    let settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path))?;

    std::fs::create_dir_all(&settings.data_dir)
        .with_context(|| format!("Failed to create data directory {}", settings.data_dir))?;
    guru_site::init_file_logging(Path::new(&settings.data_dir).join("guru-site.log"))?;
    tracing::info!("Starting with settings from {}", settings_path);

    // Create app state
    let mut app = App::new(settings).context("Failed to open local storage")?;
    if let Some(fragment) = fragment {
        app.open_fragment(&fragment);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI loop failed: {:?}", err);
        println!("Error: {:?}", err);
    }

    let pending = app.outbox.len();
    if pending > 0 {
        println!("{} submission(s) still queued; they will be sent on next start.", pending);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                } else {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
