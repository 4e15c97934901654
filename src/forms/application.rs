//! Job application form

use crate::forms::{FormDraft, ResumeFile};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A job application, without its attachment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    /// Role applied for
    pub role: String,
    /// Applicant name
    pub name: String,
    /// Applicant email
    pub email: String,
    /// Applicant phone
    pub phone: String,
    /// Years or summary of experience
    pub experience: String,
    /// Optional cover message
    pub message: String,
}

impl JobApplication {
    /// Gather the values of a job application draft
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            role: draft.value("role").to_string(),
            name: draft.value("name").to_string(),
            email: draft.value("email").to_string(),
            phone: draft.value("phone").to_string(),
            experience: draft.value("experience").to_string(),
            message: draft.value("message").to_string(),
        }
    }

    /// Text fields in multipart order
    pub fn form_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("role", self.role.as_str()),
            ("experience", self.experience.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

/// A job application as stored in the offline queue
///
/// The resume, if any, is inlined as a data URL next to its file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedApplication {
    /// The application fields
    #[serde(flatten)]
    pub application: JobApplication,
    /// Resume content as a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_data_url: Option<String>,
    /// Resume file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_name: Option<String>,
}

impl QueuedApplication {
    /// Prepare an application for queueing, inlining the resume
    pub fn new(application: JobApplication, resume: Option<&ResumeFile>) -> Self {
        Self {
            application,
            resume_data_url: resume.map(ResumeFile::to_data_url),
            resume_name: resume.map(|r| r.name.clone()),
        }
    }

    /// Whether a resume was stored (an empty data URL counts as none)
    pub fn has_resume(&self) -> bool {
        self.resume_data_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Rebuild the resume attachment, if one was stored
    pub fn resume(&self) -> Result<Option<ResumeFile>> {
        match self.resume_data_url.as_deref().filter(|url| !url.is_empty()) {
            Some(data_url) => {
                let name = self.resume_name.as_deref().unwrap_or("resume");
                ResumeFile::from_data_url(data_url, name).map(Some)
            }
            None => Ok(None),
        }
    }
}
