use crate::models::ReferenceImage;
use serde::{Deserialize, Serialize};

/// Visual style presets appended to the user's prompt. `Realistic` is the
/// baseline: it leaves the prompt unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageStyle {
    Realistic,
    Artistic,
    DigitalArt,
    Anime,
    Fantasy,
    Cyberpunk,
}

impl ImageStyle {
    pub fn all() -> &'static [ImageStyle] {
        &[
            ImageStyle::Realistic,
            ImageStyle::Artistic,
            ImageStyle::DigitalArt,
            ImageStyle::Anime,
            ImageStyle::Fantasy,
            ImageStyle::Cyberpunk,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStyle::Realistic => "realistic",
            ImageStyle::Artistic => "artistic",
            ImageStyle::DigitalArt => "digital-art",
            ImageStyle::Anime => "anime",
            ImageStyle::Fantasy => "fantasy",
            ImageStyle::Cyberpunk => "cyberpunk",
        }
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, ImageStyle::Realistic)
    }
}

/// Supported output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    Square512,
    Square1024,
    Horizontal,
    Vertical,
}

impl ImageSize {
    pub fn all() -> &'static [ImageSize] {
        &[
            ImageSize::Square512,
            ImageSize::Square1024,
            ImageSize::Horizontal,
            ImageSize::Vertical,
        ]
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ImageSize::Square512 => (512, 512),
            ImageSize::Square1024 => (1024, 1024),
            ImageSize::Horizontal => (1024, 768),
            ImageSize::Vertical => (768, 1024),
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }
}

/// How many images one generation request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchSize {
    One,
    Two,
    Four,
    Six,
}

impl BatchSize {
    pub fn all() -> &'static [BatchSize] {
        &[
            BatchSize::One,
            BatchSize::Two,
            BatchSize::Four,
            BatchSize::Six,
        ]
    }

    pub fn count(&self) -> usize {
        match self {
            BatchSize::One => 1,
            BatchSize::Two => 2,
            BatchSize::Four => 4,
            BatchSize::Six => 6,
        }
    }
}

/// Normal generation, or a consistent-character batch gated on a reference
/// image. Consistency is expressed purely through added prompt clauses; the
/// reference file itself is never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Normal,
    Consistent,
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: ImageStyle,
    pub size: ImageSize,
    pub count: BatchSize,
    pub reference: Option<ReferenceImage>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            style: ImageStyle::Realistic,
            size: ImageSize::Square1024,
            count: BatchSize::Four,
            reference: None,
        }
    }

    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_count(mut self, count: BatchSize) -> Self {
        self.count = count;
        self
    }

    pub fn with_reference(mut self, reference: ReferenceImage) -> Self {
        self.reference = Some(reference);
        self
    }

    /// The final prompt sent to the provider, after style and consistency
    /// clauses are appended to the raw user text.
    pub fn effective_prompt(&self, mode: GenerationMode) -> String {
        let prompt = self.prompt.trim();
        match mode {
            GenerationMode::Normal => {
                if self.style.is_baseline() {
                    prompt.to_string()
                } else {
                    format!(
                        "{}, {} style, high quality, detailed",
                        prompt,
                        self.style.as_str()
                    )
                }
            }
            GenerationMode::Consistent => format!(
                "{}, maintaining the same face and features as reference, consistent character, {} style, high quality, detailed",
                prompt,
                self.style.as_str()
            ),
        }
    }

    /// The prompt stored on generated images for display. Consistent batches
    /// carry a marker so the gallery can tell them apart.
    pub fn display_prompt(&self, mode: GenerationMode) -> String {
        let prompt = self.prompt.trim();
        match mode {
            GenerationMode::Normal => prompt.to_string(),
            GenerationMode::Consistent => format!("Consistent: {}", prompt),
        }
    }
}
