//! Main TUI application state and logic

use crate::careers::JobBoard;
use crate::config::ApiConfig;
use crate::forms::{ContactSubmission, FormDraft, FormKind, JobApplication, ResumeFile};
use crate::navigation::{LinkAction, Router};
use crate::notify::NotificationCenter;
use crate::queue::OfflineQueue;
use crate::storage::{self, Settings, StoreHandle};
use crate::submission::{queue_failure_message, submit_contact, submit_job_application, SubmissionOutcome};
use crate::sync::sync_offline_queues;
use crate::transport::HttpBackend;
use crate::tui::types::{InputMode, Page, TaskOutcome};
use crate::util::{Debouncer, SCROLL_DEBOUNCE};
use crate::validation::{validate_contact_form, validate_job_application};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::future::Future;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

/// Lines moved per scroll keystroke
const SCROLL_STEP: u32 = 5;

/// Reported when a background task could not be started
const TASK_START_FAILED: &str = "Failed to start background task";

/// One row of the outbox page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboxRow {
    /// Which queue the entry is in
    pub kind: FormKind,
    /// Entry timestamp
    pub queued_at: i64,
    /// Short description
    pub summary: String,
}

/// Application state
pub struct App {
    /// Visible page, fragment and mobile menu
    pub router: Router,
    /// Where keystrokes go
    pub mode: InputMode,
    /// Contact form fields
    pub contact_form: FormDraft,
    /// Careers page state, including the application form
    pub job_board: JobBoard,
    /// Highlighted job card
    pub selected_job: usize,
    /// Highlighted entry of the mobile menu
    pub menu_index: usize,
    /// API base being typed
    pub api_input: String,
    /// On-screen notifications
    pub notifications: NotificationCenter,
    /// Backend location
    pub config: ApiConfig,
    /// Offline submission queue
    pub queue: OfflineQueue<StoreHandle>,
    /// Client settings
    pub settings: Settings,
    /// Cached queue contents for the outbox page
    pub outbox: Vec<OutboxRow>,
    /// Submissions currently being sent
    pub in_flight: usize,
    /// Whether a sync pass is running
    pub sync_running: bool,
    /// Should quit
    pub should_quit: bool,
    backend: HttpBackend,
    task_tx: Sender<TaskOutcome>,
    task_rx: Receiver<TaskOutcome>,
    scroll_debouncer: Debouncer,
    pending_scroll: u32,
    last_sync: Instant,
}

impl App {
    /// Create the application, opening the store selected in `settings`
    pub fn new(settings: Settings) -> crate::Result<Self> {
        let store = storage::open_store(&settings)?;
        Self::with_store(settings, store)
    }

    /// Create the application over an existing store
    ///
    /// If submissions are waiting in the offline queue, a sync pass starts
    /// right away.
    pub fn with_store(settings: Settings, store: StoreHandle) -> crate::Result<Self> {
        let config = ApiConfig::load(&store)?;
        let backend = HttpBackend::new(settings.request_timeout())?;
        let (task_tx, task_rx) = mpsc::channel();

        let router = Router::new(Page::all().iter().map(|p| p.id()), ["about"]);

        let mut app = Self {
            router,
            mode: InputMode::Browse,
            contact_form: FormDraft::contact(),
            job_board: JobBoard::default(),
            selected_job: 0,
            menu_index: 0,
            api_input: String::new(),
            notifications: NotificationCenter::new(settings.notification_duration()),
            config,
            queue: OfflineQueue::new(store),
            settings,
            outbox: Vec::new(),
            in_flight: 0,
            sync_running: false,
            should_quit: false,
            backend,
            task_tx,
            task_rx,
            scroll_debouncer: Debouncer::new(SCROLL_DEBOUNCE),
            pending_scroll: 0,
            last_sync: Instant::now(),
        };

        app.refresh_outbox();
        if !app.outbox.is_empty() {
            tracing::info!("{} submission(s) pending from a previous session", app.outbox.len());
            app.start_sync();
        }

        Ok(app)
    }

    /// Apply a startup URL fragment such as `#careers`
    pub fn open_fragment(&mut self, fragment: &str) {
        self.router = self.router.clone().with_fragment(fragment);
        if self.current_page() == Page::Outbox {
            self.refresh_outbox();
        }
    }

    /// Page currently shown
    pub fn current_page(&self) -> Page {
        self.router
            .visible_page()
            .and_then(Page::from_id)
            .unwrap_or(Page::Home)
    }

    /// Show a page
    pub fn show_page(&mut self, page: Page) {
        self.router.navigate_to_section(page.id());
        self.mode = InputMode::Browse;
        self.pending_scroll = 0;
        if page == Page::Outbox {
            self.refresh_outbox();
        }
    }

    /// Move to the next page in navbar order (wraps)
    pub fn next_page(&mut self) {
        let pages = Page::all();
        let index = pages.iter().position(|p| *p == self.current_page()).unwrap_or(0);
        self.show_page(pages[(index + 1) % pages.len()]);
    }

    /// Move to the previous page in navbar order (wraps)
    pub fn previous_page(&mut self) {
        let pages = Page::all();
        let index = pages.iter().position(|p| *p == self.current_page()).unwrap_or(0);
        self.show_page(pages[(index + pages.len() - 1) % pages.len()]);
    }

    /// "Back to Home" button
    pub fn back_to_home(&mut self) {
        if self.router.back_to_home_visible() {
            self.show_page(Page::Home);
        }
    }

    /// Highlight the next mobile menu entry
    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % Page::all().len();
    }

    /// Highlight the previous mobile menu entry
    pub fn menu_previous(&mut self) {
        let len = Page::all().len();
        self.menu_index = (self.menu_index + len - 1) % len;
    }

    /// Follow the highlighted mobile menu entry
    pub fn menu_select(&mut self) {
        let Some(page) = Page::all().get(self.menu_index).copied() else {
            return;
        };
        match self.router.click_link(&format!("#{}", page.id())) {
            LinkAction::ScrollTo(id) => {
                if let Some(page) = Page::from_id(&id) {
                    self.show_page(page);
                }
            }
            LinkAction::Follow(href) => tracing::debug!("Ignoring external link {}", href),
        }
    }

    /// Scroll the page body; the navbar style follows after a debounce
    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        self.pending_scroll = self.pending_scroll.saturating_add_signed(delta);
        self.scroll_debouncer.trigger(now);
    }

    /// Scroll offset to draw the body with
    pub fn body_scroll(&self) -> u32 {
        self.pending_scroll
    }

    /// Open the API base prompt (not available on the home page)
    pub fn open_api_prompt(&mut self) {
        if !self.router.api_settings_visible() {
            return;
        }
        self.api_input = self.config.api_base().to_string();
        self.mode = InputMode::EditApiBase;
    }

    /// Apply the typed API base
    pub fn confirm_api_base(&mut self) {
        let input = std::mem::take(&mut self.api_input);
        match self.config.set_api_base(self.queue.store(), &input) {
            Ok(true) => {
                let message = format!("API base set to {}", self.config.api_base());
                self.notifications.show_success(message);
            }
            Ok(false) => {}
            Err(e) => {
                self.notifications.show_error(e.to_string());
            }
        }
        self.mode = InputMode::Browse;
    }

    /// Start typing into the contact form
    pub fn edit_contact(&mut self) {
        if self.current_page() != Page::Contact {
            self.show_page(Page::Contact);
        }
        self.mode = InputMode::EditContact;
    }

    /// Open the application form for the highlighted job
    pub fn apply_for_selected(&mut self) {
        let Some(role) = self
            .job_board
            .openings()
            .get(self.selected_job)
            .map(|job| job.title.clone())
        else {
            return;
        };
        self.job_board.show_application_form(&role);
        self.mode = InputMode::EditApplication;
    }

    /// Hide and clear the application form
    pub fn close_application(&mut self) {
        self.job_board.close_application_form();
        self.mode = InputMode::Browse;
    }

    /// Highlight the next job card
    pub fn select_next_job(&mut self) {
        let len = self.job_board.openings().len();
        if len > 0 {
            self.selected_job = (self.selected_job + 1) % len;
        }
    }

    /// Highlight the previous job card
    pub fn select_previous_job(&mut self) {
        let len = self.job_board.openings().len();
        if len > 0 {
            self.selected_job = (self.selected_job + len - 1) % len;
        }
    }

    /// Validate and send the contact form in the background
    pub fn submit_contact_form(&mut self) {
        let form = ContactSubmission::from_draft(&self.contact_form);
        if let Err(error) = validate_contact_form(&form) {
            self.notifications.show_error(error.to_string());
            return;
        }

        let backend = self.backend.clone();
        let queue = self.queue.clone();
        let config = self.config.clone();
        self.in_flight += 1;

        let fallback = TaskOutcome::Submitted {
            kind: FormKind::Contact,
            result: Err(TASK_START_FAILED.to_string()),
        };
        self.spawn_task(fallback, move || async move {
            let result = submit_contact(&backend, &queue, &config, &form)
                .await
                .map_err(|e| e.to_string());
            TaskOutcome::Submitted {
                kind: FormKind::Contact,
                result,
            }
        });
    }

    /// Validate and send the job application form in the background
    pub fn submit_application_form(&mut self) {
        let form = JobApplication::from_draft(&self.job_board.form);
        if let Err(error) = validate_job_application(&form) {
            self.notifications.show_error(error.to_string());
            return;
        }

        let resume_path = self.job_board.form.value("resume").trim().to_string();
        let resume = if resume_path.is_empty() {
            None
        } else {
            match ResumeFile::from_path(&resume_path) {
                Ok(resume) => Some(resume),
                Err(e) => {
                    self.notifications
                        .show_error(format!("Could not read resume file {}: {}", resume_path, e));
                    return;
                }
            }
        };

        let backend = self.backend.clone();
        let queue = self.queue.clone();
        let config = self.config.clone();
        self.in_flight += 1;

        let fallback = TaskOutcome::Submitted {
            kind: FormKind::Application,
            result: Err(TASK_START_FAILED.to_string()),
        };
        self.spawn_task(fallback, move || async move {
            let result = submit_job_application(&backend, &queue, &config, &form, resume.as_ref())
                .await
                .map_err(|e| e.to_string());
            TaskOutcome::Submitted {
                kind: FormKind::Application,
                result,
            }
        });
    }

    /// Replay the offline queue in the background (one pass at a time)
    pub fn start_sync(&mut self) {
        if self.sync_running {
            return;
        }
        self.sync_running = true;
        self.last_sync = Instant::now();

        let backend = self.backend.clone();
        let queue = self.queue.clone();
        let config = self.config.clone();

        let fallback = TaskOutcome::Synced(Err(TASK_START_FAILED.to_string()));
        self.spawn_task(fallback, move || async move {
            let result = sync_offline_queues(&backend, &queue, &config)
                .await
                .map_err(|e| e.to_string());
            TaskOutcome::Synced(result)
        });
    }

    /// Run a future on a background thread with its own runtime
    ///
    /// `fallback` is sent instead when the runtime cannot be created, so the
    /// UI always hears back about every task it started.
    fn spawn_task<F, Fut>(&self, fallback: TaskOutcome, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = TaskOutcome>,
    {
        let tx = self.task_tx.clone();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build();
            let outcome = run_task(runtime, task, fallback);
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Apply results of finished background tasks
    pub fn poll_tasks(&mut self) {
        while let Ok(outcome) = self.task_rx.try_recv() {
            self.handle_task_outcome(outcome);
        }
    }

    /// Apply the result of one background task
    pub fn handle_task_outcome(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::Submitted { kind, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                let delivered = matches!(result, Ok(SubmissionOutcome::Delivered { .. }));
                match result {
                    Ok(outcome) => self.apply_submission(kind, &outcome),
                    Err(e) => {
                        tracing::error!("Failed to save offline {}: {}", kind.name(), e);
                        self.notifications.show_error(queue_failure_message(&self.config));
                    }
                }
                self.refresh_outbox();

                // A delivered submission means the backend is reachable again
                if delivered && !self.outbox.is_empty() {
                    self.start_sync();
                }
            }
            TaskOutcome::Synced(result) => {
                self.sync_running = false;
                match result {
                    Ok(report) => {
                        if let Some(reason) = report.unreadable.first() {
                            self.notifications.show_error(format!("Sync failed: {}", reason));
                        } else if report.delivered_count() > 0 {
                            self.notifications.show_success(report.summary());
                        }
                    }
                    Err(e) => {
                        self.notifications.show_error(format!("Sync failed: {}", e));
                    }
                }
                self.refresh_outbox();
            }
        }
    }

    fn apply_submission(&mut self, kind: FormKind, outcome: &SubmissionOutcome) {
        let message = outcome.user_message(kind);
        if outcome.is_success() {
            self.notifications.show_success(message);
        } else {
            self.notifications.show_error(message);
        }

        if outcome.should_reset_form() {
            match kind {
                FormKind::Contact => {
                    self.contact_form.reset();
                    if self.mode == InputMode::EditContact {
                        self.mode = InputMode::Browse;
                    }
                }
                FormKind::Application => {
                    self.job_board.close_application_form();
                    if self.mode == InputMode::EditApplication {
                        self.mode = InputMode::Browse;
                    }
                }
            }
        }
    }

    /// Reload the outbox rows from the queue
    pub fn refresh_outbox(&mut self) {
        let mut rows = Vec::new();

        match self.queue.pending_contacts() {
            Ok(entries) => rows.extend(entries.into_iter().map(|entry| OutboxRow {
                kind: FormKind::Contact,
                queued_at: entry.queued_at,
                summary: format!(
                    "{} <{}>: {}",
                    entry.item.name, entry.item.email, entry.item.subject
                ),
            })),
            Err(e) => tracing::warn!("Failed to read contact queue: {}", e),
        }

        match self.queue.pending_applications() {
            Ok(entries) => rows.extend(entries.into_iter().map(|entry| OutboxRow {
                kind: FormKind::Application,
                queued_at: entry.queued_at,
                summary: format!(
                    "{} for {}{}",
                    entry.item.application.name,
                    entry.item.application.role,
                    if entry.item.resume_data_url.is_some() { " (resume attached)" } else { "" }
                ),
            })),
            Err(e) => tracing::warn!("Failed to read application queue: {}", e),
        }

        self.outbox = rows;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Browse => self.handle_browse_key(key),
            InputMode::EditContact => self.handle_form_key(key, FormKind::Contact),
            InputMode::EditApplication => self.handle_form_key(key, FormKind::Application),
            InputMode::EditApiBase => self.handle_api_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        if self.router.menu.is_open() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.menu_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.menu_next(),
                KeyCode::Enter => self.menu_select(),
                KeyCode::Char('m') => self.router.menu.toggle(),
                KeyCode::Char('q') => self.should_quit = true,
                // Anything else counts as a click outside the menu
                _ => self.router.menu.click(false, false),
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc | KeyCode::Char('h') => {
                self.back_to_home();
                return;
            }
            KeyCode::Tab | KeyCode::Right => {
                self.next_page();
                return;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.previous_page();
                return;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(page) = Page::all().get(index).copied() {
                    self.show_page(page);
                }
                return;
            }
            KeyCode::Char('m') => {
                self.menu_index = Page::all()
                    .iter()
                    .position(|p| *p == self.current_page())
                    .unwrap_or(0);
                self.router.menu.toggle();
                return;
            }
            KeyCode::Char('p') => {
                self.open_api_prompt();
                return;
            }
            KeyCode::Char('s') => {
                if self.outbox.is_empty() {
                    self.notifications.show_success("No queued submissions");
                } else {
                    self.start_sync();
                }
                return;
            }
            _ => {}
        }

        let now = Instant::now();
        match (self.current_page(), key.code) {
            (Page::Contact, KeyCode::Enter | KeyCode::Char('e')) => self.edit_contact(),
            (Page::Careers, KeyCode::Up | KeyCode::Char('k')) => self.select_previous_job(),
            (Page::Careers, KeyCode::Down | KeyCode::Char('j')) => self.select_next_job(),
            (Page::Careers, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.job_board.expand_job(self.selected_job, false);
            }
            (Page::Careers, KeyCode::Char('a')) => self.apply_for_selected(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-(SCROLL_STEP as i32), now),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(SCROLL_STEP as i32, now),
            _ => {}
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut FormDraft {
        match kind {
            FormKind::Contact => &mut self.contact_form,
            FormKind::Application => &mut self.job_board.form,
        }
    }

    fn submit_form(&mut self, kind: FormKind) {
        match kind {
            FormKind::Contact => self.submit_contact_form(),
            FormKind::Application => self.submit_application_form(),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, kind: FormKind) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form(kind);
            }
            KeyCode::Esc => match kind {
                FormKind::Contact => self.mode = InputMode::Browse,
                FormKind::Application => self.close_application(),
            },
            KeyCode::Tab | KeyCode::Down => self.form_mut(kind).focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form_mut(kind).focus_previous(),
            KeyCode::Enter => {
                let form = self.form_mut(kind);
                if form.focus() + 1 >= form.fields().len() {
                    self.submit_form(kind);
                } else {
                    form.focus_next();
                }
            }
            KeyCode::Backspace => self.form_mut(kind).backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form_mut(kind).insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_api_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.confirm_api_base(),
            KeyCode::Esc => {
                self.api_input.clear();
                self.mode = InputMode::Browse;
            }
            KeyCode::Backspace => {
                self.api_input.pop();
            }
            KeyCode::Char(c) => self.api_input.push(c),
            _ => {}
        }
    }

    /// Periodic work: task results, notification expiry, debounced scroll, scheduled sync
    pub fn tick(&mut self, now: Instant) {
        self.poll_tasks();
        self.notifications.prune(now);

        if self.scroll_debouncer.ready(now) {
            self.router.set_scroll_top(self.pending_scroll);
        }

        if let Some(interval) = self.settings.sync_interval() {
            if !self.outbox.is_empty() && now.saturating_duration_since(self.last_sync) >= interval {
                self.start_sync();
            }
        }
    }
}

/// Drive a task to completion, or hand back `fallback` if there is no runtime
pub(crate) fn run_task<F, Fut>(
    runtime: std::io::Result<tokio::runtime::Runtime>,
    task: F,
    fallback: TaskOutcome,
) -> TaskOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = TaskOutcome>,
{
    match runtime {
        Ok(runtime) => runtime.block_on(task()),
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            fallback
        }
    }
}
