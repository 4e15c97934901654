//! Contact form submission

use crate::forms::FormDraft;
use serde::{Deserialize, Serialize};

/// A message sent through the contact form
///
/// Serialized as the JSON body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Sender phone (optional on this form)
    pub phone: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
}

impl ContactSubmission {
    /// Gather the values of a contact form draft
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            name: draft.value("name").to_string(),
            email: draft.value("email").to_string(),
            phone: draft.value("phone").to_string(),
            subject: draft.value("subject").to_string(),
            message: draft.value("message").to_string(),
        }
    }
}
