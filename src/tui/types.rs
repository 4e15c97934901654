//! Core types for TUI pages and input handling

use crate::forms::FormKind;
use crate::submission::SubmissionOutcome;
use crate::sync::SyncReport;

/// Site pages, in navbar order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page
    Home,
    /// Services overview
    Services,
    /// Job openings and application form
    Careers,
    /// Contact form
    Contact,
    /// Submissions waiting in the offline queue
    Outbox,
}

impl Page {
    /// Get all pages in order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Home,
            Self::Services,
            Self::Careers,
            Self::Contact,
            Self::Outbox,
        ]
    }

    /// Router id (URL fragment) of the page
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Careers => "careers",
            Self::Contact => "contact",
            Self::Outbox => "outbox",
        }
    }

    /// Look a page up by router id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.id() == id)
    }

    /// Get display label for the page
    pub fn label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Careers => "Careers",
            Self::Contact => "Contact",
            Self::Outbox => "Outbox",
        }
    }
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation hotkeys
    Browse,
    /// Typing into the contact form
    EditContact,
    /// Typing into the job application form
    EditApplication,
    /// Typing a new API base URL
    EditApiBase,
}

/// Result reported back by a background task
#[derive(Debug)]
pub enum TaskOutcome {
    /// A form submission finished
    Submitted {
        /// Which form
        kind: FormKind,
        /// Outcome, or the message of a queueing failure
        result: Result<SubmissionOutcome, String>,
    },
    /// A sync pass finished
    Synced(Result<SyncReport, String>),
}
