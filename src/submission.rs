//! Form submission handlers
//!
//! This module combines validation, transport and the offline queue:
//! validate → send → on acceptance report delivery; on a transport failure
//! keep the submission in the offline queue for a later sync.
//!
//! Transport failures (network errors, non-2xx statuses, undecodable bodies)
//! are reported as [`SubmissionOutcome::Queued`], not as errors. Only a
//! failure to persist the queued entry surfaces as `Err`.

use crate::config::ApiConfig;
use crate::forms::{ContactSubmission, FormKind, JobApplication, ResumeFile};
use crate::queue::OfflineQueue;
use crate::storage::KeyValueStore;
use crate::transport::{ApiResponse, Backend};
use crate::validation::{validate_contact_form, validate_job_application, ValidationError};
use crate::Result;

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Refused client-side; nothing was sent
    Invalid(ValidationError),
    /// The backend accepted it
    Delivered {
        /// Backend's informational text
        message: Option<String>,
    },
    /// The backend answered but refused it
    Rejected {
        /// Backend's error text, if any
        error: Option<String>,
    },
    /// The backend was unreachable; saved in the offline queue
    Queued {
        /// Timestamp identifying the queue entry
        queued_at: i64,
        /// Transport failure that caused queueing
        cause: String,
    },
}

impl SubmissionOutcome {
    fn from_response(response: ApiResponse) -> Self {
        if response.success {
            SubmissionOutcome::Delivered {
                message: response.message,
            }
        } else {
            SubmissionOutcome::Rejected {
                error: response.error,
            }
        }
    }

    /// Whether the form should be cleared (delivered or safely queued)
    pub fn should_reset_form(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered { .. } | SubmissionOutcome::Queued { .. })
    }

    /// Whether the notification for this outcome is a success banner
    pub fn is_success(&self) -> bool {
        self.should_reset_form()
    }

    /// Text shown to the user
    pub fn user_message(&self, kind: FormKind) -> String {
        match (self, kind) {
            (SubmissionOutcome::Invalid(error), _) => error.to_string(),
            (SubmissionOutcome::Delivered { .. }, FormKind::Contact) => {
                "Thank you! We have received your message and will get back to you soon.".to_string()
            }
            (SubmissionOutcome::Delivered { .. }, FormKind::Application) => {
                "Application submitted successfully! We will review and contact you soon.".to_string()
            }
            (SubmissionOutcome::Rejected { error: Some(error) }, _) if !error.is_empty() => error.clone(),
            (SubmissionOutcome::Rejected { .. }, FormKind::Contact) => "Error sending message".to_string(),
            (SubmissionOutcome::Rejected { .. }, FormKind::Application) => {
                "Error submitting application".to_string()
            }
            (SubmissionOutcome::Queued { .. }, FormKind::Contact) => {
                "Network error — message saved locally and will be retried when online.".to_string()
            }
            (SubmissionOutcome::Queued { .. }, FormKind::Application) => {
                "Network error — application saved locally and will be retried when online.".to_string()
            }
        }
    }
}

/// Message shown when a submission could neither be sent nor queued
pub fn queue_failure_message(config: &ApiConfig) -> String {
    format!("Network error. Please check API URL: {}", config.api_base())
}

/// Submit the contact form
///
/// # Returns
/// * `Ok(Invalid)` - Validation failed, no request was made
/// * `Ok(Delivered | Rejected)` - The backend answered
/// * `Ok(Queued)` - The backend was unreachable, the form is in the offline queue
/// * `Err(Error)` - The backend was unreachable and queueing failed
///
/// # Example
/// ```rust,no_run
/// use guru_site::config::ApiConfig;
/// use guru_site::forms::{ContactSubmission, FormKind};
/// use guru_site::queue::OfflineQueue;
/// use guru_site::storage::MemoryStore;
/// use guru_site::submission::submit_contact;
/// use guru_site::transport::HttpBackend;
/// use std::time::Duration;
///
/// # async fn example() -> guru_site::Result<()> {
/// let backend = HttpBackend::new(Duration::from_secs(10))?;
/// let queue = OfflineQueue::new(MemoryStore::new());
/// let config = ApiConfig::default();
///
/// let form = ContactSubmission {
///     name: "Ada".into(),
///     email: "ada@example.com".into(),
///     subject: "Project".into(),
///     message: "Hello!".into(),
///     ..Default::default()
/// };
///
/// let outcome = submit_contact(&backend, &queue, &config, &form).await?;
/// println!("{}", outcome.user_message(FormKind::Contact));
/// # Ok(())
/// # }
/// ```
pub async fn submit_contact<B, S>(
    backend: &B,
    queue: &OfflineQueue<S>,
    config: &ApiConfig,
    form: &ContactSubmission,
) -> Result<SubmissionOutcome>
where
    B: Backend,
    S: KeyValueStore,
{
    if let Err(error) = validate_contact_form(form) {
        return Ok(SubmissionOutcome::Invalid(error));
    }

    match backend.post_contact(config, form).await {
        Ok(response) => {
            let outcome = SubmissionOutcome::from_response(response);
            tracing::info!("Contact form from {} answered: {:?}", form.email, outcome);
            Ok(outcome)
        }
        Err(e) => {
            tracing::warn!("Contact form error: {}. Saving for later sync.", e);
            let queued_at = queue.enqueue_contact(form).inspect_err(|err| {
                tracing::error!("Failed to save offline contact: {}", err);
            })?;
            Ok(SubmissionOutcome::Queued {
                queued_at,
                cause: e.to_string(),
            })
        }
    }
}

/// Submit the job application form, with an optional resume
///
/// Same contract as [`submit_contact`]. When queued, the resume is kept
/// inline in the queue entry.
pub async fn submit_job_application<B, S>(
    backend: &B,
    queue: &OfflineQueue<S>,
    config: &ApiConfig,
    form: &JobApplication,
    resume: Option<&ResumeFile>,
) -> Result<SubmissionOutcome>
where
    B: Backend,
    S: KeyValueStore,
{
    if let Err(error) = validate_job_application(form) {
        return Ok(SubmissionOutcome::Invalid(error));
    }

    match backend.post_application(config, form, resume).await {
        Ok(response) => {
            let outcome = SubmissionOutcome::from_response(response);
            tracing::info!("Application for {} answered: {:?}", form.role, outcome);
            Ok(outcome)
        }
        Err(e) => {
            tracing::warn!("Job application error: {}. Saving for later sync.", e);
            let queued_at = queue.enqueue_application(form, resume).inspect_err(|err| {
                tracing::error!("Failed to save offline application: {}", err);
            })?;
            Ok(SubmissionOutcome::Queued {
                queued_at,
                cause: e.to_string(),
            })
        }
    }
}
