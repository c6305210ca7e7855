use crate::{
    config::PollinationsConfig,
    error::{PolligenError, Result},
};
use async_trait::async_trait;
use reqwest::Url;

/// Seam to the external image-generation service. Implementations turn a
/// prompt plus dimensions and a seed into a fetchable resource locator; the
/// remote endpoint resolves it to image bytes.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn image_url(&self, prompt: &str, width: u32, height: u32, seed: u32)
        -> Result<String>;
}

/// URL builder for the Pollinations endpoint. The prompt travels as a
/// percent-encoded path segment; everything else is query parameters.
#[derive(Debug, Clone)]
pub struct PollinationsProvider {
    config: PollinationsConfig,
}

impl PollinationsProvider {
    pub fn new(config: PollinationsConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ImageProvider for PollinationsProvider {
    async fn image_url(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        seed: u32,
    ) -> Result<String> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| PolligenError::ConfigError(format!("invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| PolligenError::ConfigError("base URL cannot be a base".into()))?
            .push("prompt")
            .push(prompt);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("width", &width.to_string());
            query.append_pair("height", &height.to_string());
            query.append_pair("seed", &seed.to_string());
            if self.config.enhance {
                query.append_pair("enhance", "true");
            }
            if self.config.nologo {
                query.append_pair("nologo", "true");
            }
        }

        Ok(url.into())
    }
}
