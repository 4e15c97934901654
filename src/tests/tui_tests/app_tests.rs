// App Tests - state transitions driven by key presses and task results

use super::{test_app, test_app_with_store};
use crate::forms::FormKind;
use crate::navigation::NavbarStyle;
use crate::queue::OfflineQueue;
use crate::storage::{MemoryStore, StoreHandle};
use crate::submission::SubmissionOutcome;
use crate::sync::{QueueSyncReport, SyncReport};
use crate::tui::app::run_task;
use crate::tui::{InputMode, Page, TaskOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn press(app: &mut crate::tui::App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut crate::tui::App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_app_starts_on_home() {
    let app = test_app();
    assert_eq!(app.current_page(), Page::Home);
    assert_eq!(app.mode, InputMode::Browse);
    assert!(!app.router.back_to_home_visible());
    assert!(!app.router.api_settings_visible());
    assert!(app.outbox.is_empty());
    assert!(!app.sync_running);
}

#[test]
fn test_number_keys_switch_pages() {
    let mut app = test_app();

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_page(), Page::Careers);
    assert_eq!(app.router.fragment(), "careers");
    assert!(app.router.back_to_home_visible());

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.current_page(), Page::Careers, "no ninth page");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_page(), Page::Home);
}

#[test]
fn test_tab_cycles_pages() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_page(), Page::Services);

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.current_page(), Page::Outbox, "wraps around");
}

#[test]
fn test_open_fragment() {
    let mut app = test_app();
    app.open_fragment("#contact");
    assert_eq!(app.current_page(), Page::Contact);
}

#[test]
fn test_mobile_menu() {
    let mut app = test_app();

    press(&mut app, KeyCode::Char('m'));
    assert!(app.router.menu.is_open());
    assert_eq!(app.menu_index, 0);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(!app.router.menu.is_open(), "following a link closes the menu");
    assert_eq!(app.current_page(), Page::Careers);

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.menu_index, 2, "menu opens on the current page");
    press(&mut app, KeyCode::Char('x'));
    assert!(!app.router.menu.is_open(), "a key elsewhere closes the menu");
    assert_eq!(app.current_page(), Page::Careers);
}

#[test]
fn test_api_prompt_hidden_on_home() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.mode, InputMode::Browse);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.mode, InputMode::EditApiBase);
    assert_eq!(app.api_input, app.config.api_base());
}

#[test]
fn test_api_base_change_is_persisted() {
    let store: StoreHandle = Arc::new(MemoryStore::new());
    let mut app = test_app_with_store(store.clone());

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('p'));
    app.api_input.clear();
    type_text(&mut app, "https://api.example.com");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, InputMode::Browse);
    assert_eq!(app.config.api_base(), "https://api.example.com");
    assert_eq!(
        crate::config::ApiConfig::load(&store).expect("load").api_base(),
        "https://api.example.com"
    );
    assert_eq!(app.notifications.len(), 1);
}

#[test]
fn test_invalid_api_base_is_refused() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('p'));
    app.api_input = "ftp://files.example.com".into();
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.config.api_base(), crate::config::DEFAULT_API_BASE);
    assert_eq!(app.notifications.len(), 1, "error shown");
}

#[test]
fn test_contact_form_editing() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, InputMode::EditContact);

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.contact_form.value("name"), "Ada");
    assert_eq!(app.contact_form.value("email"), "ada@example.co");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, InputMode::Browse);
    assert_eq!(app.contact_form.value("name"), "Ada", "leaving edit mode keeps the draft");
}

#[test]
fn test_invalid_contact_is_not_sent() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Ada");

    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert_eq!(app.in_flight, 0, "validation failed before sending");
    let messages: Vec<String> = app
        .notifications
        .active(Instant::now())
        .map(|n| n.message.clone())
        .collect();
    assert_eq!(messages, vec!["Please fill in all required fields".to_string()]);
    assert_eq!(app.contact_form.value("name"), "Ada");
}

#[test]
fn test_careers_expand_and_apply() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('3'));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.job_board.expanded(), Some(1));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.mode, InputMode::EditApplication);
    assert!(app.job_board.is_form_open());
    assert_eq!(app.job_board.form.value("role"), "Mobile App Developer");

    type_text(&mut app, "Lin");
    assert_eq!(app.job_board.form.value("name"), "Lin", "role is read-only, focus starts on name");

    press(&mut app, KeyCode::Esc);
    assert!(!app.job_board.is_form_open());
    assert_eq!(app.job_board.form.value("name"), "");
    assert_eq!(app.mode, InputMode::Browse);
}

#[test]
fn test_missing_resume_file_is_reported() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('a'));

    let form = &mut app.job_board.form;
    form.set_value("name", "Lin");
    form.set_value("email", "lin@example.com");
    form.set_value("phone", "555-123-4567");
    form.set_value("experience", "5 years");
    form.set_value("resume", "/definitely/not/here.pdf");

    app.submit_application_form();

    assert_eq!(app.in_flight, 0);
    let message = app
        .notifications
        .active(Instant::now())
        .next()
        .map(|n| n.message.clone())
        .unwrap_or_default();
    assert!(message.starts_with("Could not read resume file"), "got {}", message);
}

#[test]
fn test_delivered_contact_resets_form() {
    let mut app = test_app();
    app.edit_contact();
    app.contact_form.set_value("name", "Ada");

    app.handle_task_outcome(TaskOutcome::Submitted {
        kind: FormKind::Contact,
        result: Ok(SubmissionOutcome::Delivered { message: None }),
    });

    assert_eq!(app.contact_form.value("name"), "");
    assert_eq!(app.mode, InputMode::Browse);
    let message = app.notifications.active(Instant::now()).next().map(|n| n.message.clone());
    assert!(message.is_some_and(|m| m.starts_with("Thank you!")));
}

#[test]
fn test_rejected_contact_keeps_form() {
    let mut app = test_app();
    app.edit_contact();
    app.contact_form.set_value("name", "Ada");

    app.handle_task_outcome(TaskOutcome::Submitted {
        kind: FormKind::Contact,
        result: Ok(SubmissionOutcome::Rejected { error: None }),
    });

    assert_eq!(app.contact_form.value("name"), "Ada");
    assert_eq!(app.mode, InputMode::EditContact);
}

#[test]
fn test_queue_failure_points_at_api_base() {
    let mut app = test_app();
    app.handle_task_outcome(TaskOutcome::Submitted {
        kind: FormKind::Application,
        result: Err("disk full".into()),
    });

    let message = app.notifications.active(Instant::now()).next().map(|n| n.message.clone());
    assert_eq!(
        message.as_deref(),
        Some("Network error. Please check API URL: http://localhost:5000")
    );
}

#[test]
fn test_outbox_lists_queued_entries() {
    let store: StoreHandle = Arc::new(MemoryStore::new());
    let queue = OfflineQueue::new(store.clone());
    queue
        .enqueue_contact(&crate::forms::ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Hi".into(),
            ..Default::default()
        })
        .expect("enqueue");

    let app = test_app_with_store(store);
    assert_eq!(app.outbox.len(), 1);
    assert_eq!(app.outbox[0].kind, FormKind::Contact);
    assert_eq!(app.outbox[0].summary, "Ada <ada@example.com>: Hello");
    assert!(app.sync_running, "queued entries trigger a sync at startup");
}

#[test]
fn test_sync_result_notifies_and_refreshes() {
    let mut app = test_app();
    app.sync_running = true;

    app.handle_task_outcome(TaskOutcome::Synced(Ok(SyncReport {
        contacts: QueueSyncReport {
            delivered: vec![1, 2],
            retained: vec![],
        },
        applications: QueueSyncReport::default(),
        ..Default::default()
    })));

    assert!(!app.sync_running);
    let message = app.notifications.active(Instant::now()).next().map(|n| n.message.clone());
    assert_eq!(message.as_deref(), Some("Synced 2 queued submission(s), 0 still pending"));
}

#[test]
fn test_unreadable_queue_is_reported() {
    let mut app = test_app();
    app.sync_running = true;

    app.handle_task_outcome(TaskOutcome::Synced(Ok(SyncReport {
        applications: QueueSyncReport {
            delivered: vec![7],
            retained: vec![],
        },
        unreadable: vec!["Queue error: Corrupt contact queue: EOF".into()],
        ..Default::default()
    })));

    assert!(!app.sync_running);
    let message = app.notifications.active(Instant::now()).next().map(|n| n.message.clone());
    assert!(message.expect("notification").starts_with("Sync failed:"));
}

#[test]
fn test_missing_runtime_still_settles_sync() {
    let mut app = test_app();
    app.sync_running = true;

    let outcome = run_task(
        Err(std::io::Error::new(std::io::ErrorKind::Other, "no threads")),
        || async { TaskOutcome::Synced(Ok(SyncReport::default())) },
        TaskOutcome::Synced(Err("Failed to start background task".into())),
    );
    assert!(matches!(outcome, TaskOutcome::Synced(Err(_))));

    app.handle_task_outcome(outcome);
    assert!(!app.sync_running);
    assert!(!app.notifications.is_empty());
}

#[test]
fn test_missing_runtime_still_settles_submission() {
    let mut app = test_app();
    app.in_flight = 1;

    let outcome = run_task(
        Err(std::io::Error::new(std::io::ErrorKind::Other, "no threads")),
        || async {
            TaskOutcome::Submitted {
                kind: FormKind::Contact,
                result: Ok(SubmissionOutcome::Rejected { error: None }),
            }
        },
        TaskOutcome::Submitted {
            kind: FormKind::Contact,
            result: Err("Failed to start background task".into()),
        },
    );

    app.handle_task_outcome(outcome);
    assert_eq!(app.in_flight, 0);
}

#[test]
fn test_runtime_runs_task() {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build();
    let outcome = run_task(
        runtime,
        || async { TaskOutcome::Synced(Ok(SyncReport::default())) },
        TaskOutcome::Synced(Err("unused".into())),
    );
    assert!(matches!(outcome, TaskOutcome::Synced(Ok(_))));
}

#[test]
fn test_empty_sync_is_silent() {
    let mut app = test_app();
    app.sync_running = true;
    app.handle_task_outcome(TaskOutcome::Synced(Ok(SyncReport::default())));
    assert!(app.notifications.is_empty());
}

#[test]
fn test_scroll_is_debounced() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));

    for _ in 0..11 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.body_scroll(), 55);
    assert_eq!(app.router.scroll_top(), 0, "navbar waits for the debounce");

    app.tick(Instant::now() + Duration::from_millis(50));
    assert_eq!(app.router.scroll_top(), 55);
    assert_eq!(app.router.navbar_style(), NavbarStyle::Elevated);
}

#[test]
fn test_quit() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
