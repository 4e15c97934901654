//! Form data model
//!
//! - `contact` - Contact form submission
//! - `application` - Job application and its offline representation
//! - `resume` - Resume attachments and data URL conversion
//! - `draft` - Editable field sets backing the on-screen forms

pub mod application;
pub mod contact;
pub mod draft;
pub mod resume;

pub use application::{JobApplication, QueuedApplication};
pub use contact::ContactSubmission;
pub use draft::{FieldHighlight, FormDraft, FormField};
pub use resume::ResumeFile;

/// The two kinds of form the site submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Contact form
    Contact,
    /// Job application form
    Application,
}

impl FormKind {
    /// Short name, as used in logs and storage keys
    pub fn name(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Application => "application",
        }
    }

    /// Storage key of this kind's offline queue
    pub fn storage_key(&self) -> &'static str {
        match self {
            FormKind::Contact => "offline_contacts",
            FormKind::Application => "offline_applications",
        }
    }

    /// All kinds, in sync order
    pub fn all() -> [FormKind; 2] {
        [FormKind::Contact, FormKind::Application]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(FormKind::Contact.storage_key(), "offline_contacts");
        assert_eq!(FormKind::Application.storage_key(), "offline_applications");
    }
}
