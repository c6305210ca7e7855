use crate::{
    error::{PolligenError, Result},
    models::{GeneratedImage, GenerationMode, GenerationRequest},
    pollinations::provider::ImageProvider,
};
use futures::future::try_join_all;
use rand::Rng;
use std::sync::Arc;
use tokio_stream::Stream;

/// Maximum (exclusive) seed value. Wide enough that two images in one
/// session colliding is negligible.
const SEED_RANGE: u32 = 1_000_000;

#[derive(Clone)]
pub struct ImageClient {
    provider: Arc<dyn ImageProvider>,
}

impl ImageClient {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self { provider }
    }

    /// Generates one batch of images. All provider calls run concurrently
    /// and the batch is all-or-nothing: any failure discards the whole
    /// batch and no partial images are surfaced. On success the images come
    /// back in request-index order; the caller merges them into a gallery.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        mode: GenerationMode,
    ) -> Result<Vec<GeneratedImage>> {
        self.validate(request, mode)?;

        let effective_prompt = request.effective_prompt(mode);
        let display_prompt = request.display_prompt(mode);
        let (width, height) = request.size.dimensions();
        let count = request.count.count();

        // Seeds are drawn up front so each concurrent call is independent.
        let seeds: Vec<u32> = {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| rng.gen_range(0..SEED_RANGE)).collect()
        };

        log::info!(
            "🎨 Generating {} image(s) at {}x{} with prompt: {}",
            count,
            width,
            height,
            effective_prompt
        );

        let calls = seeds.into_iter().map(|seed| {
            let provider = Arc::clone(&self.provider);
            let prompt = effective_prompt.clone();
            async move { provider.image_url(&prompt, width, height, seed).await }
        });

        let urls = try_join_all(calls)
            .await
            .map_err(|e| PolligenError::GenerationError(e.to_string()))?;

        let images: Vec<GeneratedImage> = urls
            .into_iter()
            .map(|url| GeneratedImage::new(url, display_prompt.clone()))
            .collect();

        log::info!("✅ Batch of {} image(s) ready", images.len());
        Ok(images)
    }

    /// Stream variant of [`generate`]: a finite, non-restartable sequence of
    /// exactly `count` images. The whole batch still settles before the
    /// first item is yielded, so the all-or-nothing contract is unchanged.
    pub async fn generate_stream(
        &self,
        request: &GenerationRequest,
        mode: GenerationMode,
    ) -> Result<impl Stream<Item = GeneratedImage>> {
        let images = self.generate(request, mode).await?;
        Ok(tokio_stream::iter(images))
    }

    fn validate(&self, request: &GenerationRequest, mode: GenerationMode) -> Result<()> {
        if request.prompt.trim().is_empty() {
            return Err(PolligenError::ValidationError("empty prompt".into()));
        }
        if mode == GenerationMode::Consistent && request.reference.is_none() {
            return Err(PolligenError::ValidationError(
                "missing reference image".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchSize, ImageSize, ImageStyle, ReferenceImage};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_stream::StreamExt;

    struct RecordingProvider {
        calls: AtomicUsize,
        fail_from: Option<usize>,
    }

    impl RecordingProvider {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_from: None,
            })
        }

        fn failing_from(n: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_from: Some(n),
            })
        }
    }

    #[async_trait]
    impl ImageProvider for RecordingProvider {
        async fn image_url(
            &self,
            prompt: &str,
            width: u32,
            height: u32,
            seed: u32,
        ) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(fail_from) = self.fail_from {
                if call >= fail_from {
                    return Err(PolligenError::GenerationError("provider down".into()));
                }
            }
            Ok(format!(
                "http://test/prompt/{}?width={}&height={}&seed={}",
                prompt, width, height, seed
            ))
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("a red fox")
            .with_style(ImageStyle::Anime)
            .with_size(ImageSize::Square512)
            .with_count(BatchSize::Four)
    }

    #[tokio::test]
    async fn test_generate_yields_exactly_count_images_with_distinct_ids() {
        let client = ImageClient::new(RecordingProvider::ok());
        let images = client
            .generate(&request(), GenerationMode::Normal)
            .await
            .unwrap();

        assert_eq!(images.len(), 4);
        let ids: HashSet<&str> = images.iter().map(|img| img.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn test_same_batch_urls_differ_via_seeds() {
        let client = ImageClient::new(RecordingProvider::ok());
        let images = client
            .generate(&request(), GenerationMode::Normal)
            .await
            .unwrap();

        let urls: HashSet<&str> = images.iter().map(|img| img.url.as_str()).collect();
        // With seeds drawn from 0..1_000_000, four colliding is negligible.
        assert_eq!(urls.len(), 4);
    }

    #[tokio::test]
    async fn test_empty_prompt_fails_without_provider_calls() {
        let provider = RecordingProvider::ok();
        let client = ImageClient::new(Arc::clone(&provider) as Arc<dyn ImageProvider>);
        let err = client
            .generate(&GenerationRequest::new("   "), GenerationMode::Normal)
            .await
            .unwrap_err();

        assert!(matches!(err, PolligenError::ValidationError(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_consistent_mode_requires_reference() {
        let provider = RecordingProvider::ok();
        let client = ImageClient::new(Arc::clone(&provider) as Arc<dyn ImageProvider>);
        let err = client
            .generate(&request(), GenerationMode::Consistent)
            .await
            .unwrap_err();

        assert!(matches!(err, PolligenError::ValidationError(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_consistent_mode_marks_prompt_and_generates() {
        let client = ImageClient::new(RecordingProvider::ok());
        let request = request().with_reference(ReferenceImage::new("face.png", "image/png").unwrap());
        let images = client
            .generate(&request, GenerationMode::Consistent)
            .await
            .unwrap();

        assert_eq!(images.len(), 4);
        for image in &images {
            assert_eq!(image.prompt, "Consistent: a red fox");
            assert!(image.url.contains("consistent%20character") || image.url.contains("consistent character"));
        }
    }

    #[tokio::test]
    async fn test_any_failure_discards_the_whole_batch() {
        let client = ImageClient::new(RecordingProvider::failing_from(2));
        let err = client
            .generate(&request(), GenerationMode::Normal)
            .await
            .unwrap_err();

        assert!(matches!(err, PolligenError::GenerationError(_)));
    }

    #[tokio::test]
    async fn test_generate_stream_is_finite_and_ordered() {
        let client = ImageClient::new(RecordingProvider::ok());
        let stream = client
            .generate_stream(&request(), GenerationMode::Normal)
            .await
            .unwrap();
        let images: Vec<GeneratedImage> = stream.collect().await;
        assert_eq!(images.len(), 4);
    }
}
