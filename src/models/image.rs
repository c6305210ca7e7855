use crate::error::{PolligenError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One produced image. Ids are minted once at creation and never reused;
/// the timestamp is set once and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedImage {
    pub fn new(url: impl Into<String>, prompt: impl Into<String>) -> Self {
        GeneratedImage {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            prompt: prompt.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A user-supplied reference file for consistent-character batches. Only the
/// declared content type is checked; the bytes are never read or transmitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub file_name: String,
    pub content_type: String,
}

impl ReferenceImage {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        let content_type = content_type.into();

        if !content_type.starts_with("image/") {
            return Err(PolligenError::UnsupportedFileType(format!(
                "expected an image file, got '{}'",
                content_type
            )));
        }

        Ok(ReferenceImage {
            file_name,
            content_type,
        })
    }
}
