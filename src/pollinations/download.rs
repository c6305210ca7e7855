use crate::error::{PolligenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fetches a generated image and saves it to disk. Failures are scoped to
/// the single download; the gallery is never involved.
#[derive(Clone)]
pub struct DownloadClient {
    http: reqwest::Client,
}

impl DownloadClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    pub async fn download(&self, url: &str, prompt: &str, dir: &Path) -> Result<PathBuf> {
        let bytes = self.fetch(url).await?;

        let path = dir.join(suggested_file_name(prompt));
        fs::write(&path, bytes)
            .map_err(|e| PolligenError::DownloadError(format!("failed to save image: {}", e)))?;

        log::info!("💾 Image saved to: {}", path.display());
        Ok(path)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        // data: URLs carry the bytes inline, base64-encoded.
        if let Some(rest) = url.strip_prefix("data:") {
            let payload = rest.split_once("base64,").map(|(_, data)| data).ok_or_else(
                || PolligenError::DownloadError("data URL is not base64-encoded".into()),
            )?;
            return base64::decode(payload)
                .map_err(|e| PolligenError::DownloadError(format!("invalid base64 data: {}", e)));
        }

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PolligenError::DownloadError(e.to_string()))?
            .error_for_status()
            .map_err(|e| PolligenError::DownloadError(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PolligenError::DownloadError(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl Default for DownloadClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggested file name: first 20 characters of the prompt with each
/// whitespace run replaced by a single hyphen, suffixed `.jpg`. Leading and
/// trailing runs become hyphens too.
pub fn suggested_file_name(prompt: &str) -> String {
    let mut slug = String::new();
    let mut in_whitespace = false;
    for c in prompt.chars().take(20) {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    format!("ai-generated-{}.jpg", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_collapses_whitespace_runs() {
        assert_eq!(
            suggested_file_name("a red   fox\tjumping"),
            "ai-generated-a-red-fox-jumping.jpg"
        );
    }

    #[test]
    fn test_file_name_keeps_leading_and_trailing_runs_as_hyphens() {
        assert_eq!(suggested_file_name(" a fox"), "ai-generated--a-fox.jpg");
        assert_eq!(suggested_file_name("a fox "), "ai-generated-a-fox-.jpg");
    }

    #[test]
    fn test_file_name_truncates_to_twenty_characters() {
        let prompt = "a majestic dragon flying over a forest";
        // First 20 chars: "a majestic dragon fl"
        assert_eq!(
            suggested_file_name(prompt),
            "ai-generated-a-majestic-dragon-fl.jpg"
        );
    }

    #[tokio::test]
    async fn test_data_url_download_writes_decoded_bytes() {
        let client = DownloadClient::new();
        let dir = std::env::temp_dir();
        // "polligen" in base64
        let path = client
            .download("data:image/jpeg;base64,cG9sbGlnZW4=", "data url test", &dir)
            .await
            .unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"polligen");
        let _ = fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_malformed_data_url_is_a_download_error() {
        let client = DownloadClient::new();
        let err = client
            .download("data:image/jpeg;plain,oops", "bad", &std::env::temp_dir())
            .await
            .unwrap_err();
        assert!(matches!(err, PolligenError::DownloadError(_)));
    }
}
