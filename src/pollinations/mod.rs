pub mod download;
pub mod image_client;
pub mod provider;

use crate::{
    config::StudioConfig,
    error::Result,
    gallery::Gallery,
    models::{GenerationMode, GenerationRequest},
};
use std::sync::Arc;

pub use download::DownloadClient;
pub use image_client::ImageClient;
pub use provider::{ImageProvider, PollinationsProvider};

/// Facade over the Pollinations sub-clients for one user session.
#[derive(Clone)]
pub struct PollinationsClient {
    image_client: ImageClient,
    download_client: DownloadClient,
}

impl PollinationsClient {
    pub fn new(config: StudioConfig) -> Self {
        let provider = Arc::new(PollinationsProvider::new(config.pollinations));
        Self {
            image_client: ImageClient::new(provider),
            download_client: DownloadClient::new(),
        }
    }

    /// Uses a custom provider instead of the Pollinations endpoint.
    pub fn with_provider(provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            image_client: ImageClient::new(provider),
            download_client: DownloadClient::new(),
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn download(&self) -> &DownloadClient {
        &self.download_client
    }

    /// Generates a batch and prepends it to the gallery as one block.
    /// Returns how many images were added. The gallery is untouched on
    /// failure.
    pub async fn generate_into(
        &self,
        request: &GenerationRequest,
        mode: GenerationMode,
        gallery: &mut Gallery,
    ) -> Result<usize> {
        let batch = self.image_client.generate(request, mode).await?;
        let added = batch.len();
        gallery.add_batch(batch);
        Ok(added)
    }
}
