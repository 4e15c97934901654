// Submission handler tests against the in-memory backend

use super::fake_backend::{application, contact, Call, FakeBackend, ReadOnlyStore};
use crate::config::ApiConfig;
use crate::forms::{FormKind, ResumeFile};
use crate::queue::OfflineQueue;
use crate::storage::MemoryStore;
use crate::submission::{submit_contact, submit_job_application, SubmissionOutcome};
use crate::transport::{ApiResponse, TransportError};
use crate::validation::ValidationError;

#[tokio::test]
async fn test_missing_field_sends_nothing() {
    let backend = FakeBackend::accepting();
    let queue = OfflineQueue::new(MemoryStore::new());
    let config = ApiConfig::default();

    let mut form = contact("Ada");
    form.subject.clear();

    let outcome = submit_contact(&backend, &queue, &config, &form).await.expect("submit");

    assert!(matches!(
        outcome,
        SubmissionOutcome::Invalid(ValidationError::MissingFields { .. })
    ));
    assert_eq!(backend.call_count(), 0, "no network request");
    assert_eq!(queue.total_size().expect("size"), 0);
}

#[tokio::test]
async fn test_invalid_email_sends_nothing() {
    let backend = FakeBackend::accepting();
    let queue = OfflineQueue::new(MemoryStore::new());

    let mut form = contact("Ada");
    form.email = "ada.example.com".into();

    let outcome = submit_contact(&backend, &queue, &ApiConfig::default(), &form)
        .await
        .expect("submit");
    assert_eq!(outcome, SubmissionOutcome::Invalid(ValidationError::InvalidEmail));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_contact_without_phone_is_sent() {
    let backend = FakeBackend::accepting();
    let queue = OfflineQueue::new(MemoryStore::new());
    let form = contact("A");

    let outcome = submit_contact(&backend, &queue, &ApiConfig::default(), &form)
        .await
        .expect("submit");

    assert!(matches!(outcome, SubmissionOutcome::Delivered { .. }));
    assert!(outcome.should_reset_form());
    assert_eq!(backend.calls(), vec![Call::Contact(form)]);
    assert_eq!(queue.total_size().expect("size"), 0);
}

#[tokio::test]
async fn test_failed_contact_is_queued_once() {
    let backend = FakeBackend::unreachable();
    let queue = OfflineQueue::new(MemoryStore::new());
    let form = contact("Ada");

    let outcome = submit_contact(&backend, &queue, &ApiConfig::default(), &form)
        .await
        .expect("submit");

    let SubmissionOutcome::Queued { queued_at, cause } = outcome else {
        panic!("expected Queued, got {:?}", outcome);
    };
    assert!(queued_at > 0);
    assert!(cause.contains("connection refused"));

    let pending = queue.pending_contacts().expect("pending");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].queued_at, queued_at);
    assert_eq!(pending[0].item, form);
    assert_eq!(queue.size(FormKind::Application).expect("size"), 0);
}

#[tokio::test]
async fn test_error_status_is_queued() {
    let backend = FakeBackend::scripted(vec![Err(TransportError::Status(502))]);
    let queue = OfflineQueue::new(MemoryStore::new());

    let outcome = submit_contact(&backend, &queue, &ApiConfig::default(), &contact("Ada"))
        .await
        .expect("submit");

    assert!(matches!(outcome, SubmissionOutcome::Queued { .. }));
    assert_eq!(queue.size(FormKind::Contact).expect("size"), 1);
}

#[tokio::test]
async fn test_rejected_contact_is_not_queued() {
    let backend = FakeBackend::scripted(vec![Ok(ApiResponse::rejected("Invalid email format"))]);
    let queue = OfflineQueue::new(MemoryStore::new());

    let outcome = submit_contact(&backend, &queue, &ApiConfig::default(), &contact("Ada"))
        .await
        .expect("submit");

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected {
            error: Some("Invalid email format".into())
        }
    );
    assert!(!outcome.should_reset_form());
    assert_eq!(queue.total_size().expect("size"), 0);
}

#[tokio::test]
async fn test_queue_failure_is_an_error() {
    let backend = FakeBackend::unreachable();
    let queue = OfflineQueue::new(ReadOnlyStore);

    let result = submit_contact(&backend, &queue, &ApiConfig::default(), &contact("Ada")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_application_sent_with_resume() {
    let backend = FakeBackend::accepting();
    let queue = OfflineQueue::new(MemoryStore::new());
    let form = application("Lin");
    let resume = ResumeFile::new("cv.pdf", b"%PDF-1.4".to_vec());

    let outcome = submit_job_application(&backend, &queue, &ApiConfig::default(), &form, Some(&resume))
        .await
        .expect("submit");

    assert!(matches!(outcome, SubmissionOutcome::Delivered { .. }));
    assert_eq!(
        backend.calls(),
        vec![Call::Application {
            application: form,
            resume: Some(resume),
        }]
    );
}

#[tokio::test]
async fn test_application_phone_is_checked() {
    let backend = FakeBackend::accepting();
    let queue = OfflineQueue::new(MemoryStore::new());
    let mut form = application("Lin");
    form.phone = "12345".into();

    let outcome = submit_job_application(&backend, &queue, &ApiConfig::default(), &form, None)
        .await
        .expect("submit");

    assert_eq!(outcome, SubmissionOutcome::Invalid(ValidationError::InvalidPhone));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_failed_application_keeps_resume_inline() {
    let backend = FakeBackend::unreachable();
    let queue = OfflineQueue::new(MemoryStore::new());
    let resume = ResumeFile::new("cv.docx", vec![1, 2, 3, 4]);

    let outcome = submit_job_application(
        &backend,
        &queue,
        &ApiConfig::default(),
        &application("Lin"),
        Some(&resume),
    )
    .await
    .expect("submit");
    assert!(matches!(outcome, SubmissionOutcome::Queued { .. }));

    let pending = queue.pending_applications().expect("pending");
    assert_eq!(pending.len(), 1);
    let entry = &pending[0].item;
    assert_eq!(entry.resume_name.as_deref(), Some("cv.docx"));
    assert!(entry
        .resume_data_url
        .as_deref()
        .is_some_and(|url| url.starts_with("data:application/vnd.openxmlformats")));
    assert_eq!(entry.resume().expect("decode"), Some(resume));
}
