//! Resume attachments
//!
//! While queued offline a resume travels as an RFC 2397 data URL
//! (`data:<mime>;base64,<payload>`) so it fits in a JSON queue entry.

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// MIME type used when the extension is not recognized
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// A file attached to a job application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    /// File name reported to the backend
    pub name: String,
    /// MIME type of the content
    pub mime: String,
    /// Raw file content
    pub data: Vec<u8>,
}

impl ResumeFile {
    /// Create a resume from in-memory content; the MIME type comes from the name
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_for_name(&name).to_string();
        Self { name, mime, data }
    }

    /// Read a resume from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume".to_string());
        Ok(Self::new(name, data))
    }

    /// Encode the content as a data URL
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }

    /// Rebuild a resume from a stored data URL and file name
    pub fn from_data_url(data_url: &str, name: impl Into<String>) -> Result<Self> {
        let (header, payload) = data_url
            .split_once(',')
            .ok_or_else(|| Error::Queue("Malformed data URL: missing ','".to_string()))?;

        let meta = header
            .strip_prefix("data:")
            .ok_or_else(|| Error::Queue("Malformed data URL: missing 'data:' prefix".to_string()))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| Error::Queue("Unsupported data URL: not base64 encoded".to_string()))?;
        let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|e| Error::Queue(format!("Malformed data URL payload: {}", e)))?;

        Ok(Self {
            name: name.into(),
            mime: mime.to_string(),
            data,
        })
    }
}

/// MIME type for the resume formats the backend accepts
pub fn mime_for_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => DEFAULT_MIME,
    }
}
