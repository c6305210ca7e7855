use crate::i18n::Language;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";

#[derive(Debug, Clone)]
pub struct PollinationsConfig {
    pub base_url: String,
    pub enhance: bool,
    pub nologo: bool,
}

impl Default for PollinationsConfig {
    fn default() -> Self {
        PollinationsConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            enhance: true,
            nologo: true,
        }
    }
}

impl PollinationsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("POLLINATIONS_BASE_URL")
            .ok()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        PollinationsConfig {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }

    pub fn with_nologo(mut self, nologo: bool) -> Self {
        self.nologo = nologo;
        self
    }
}

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub language: Language,
    pub pollinations: PollinationsConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            language: Language::En,
            pollinations: PollinationsConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let language = env::var("POLLIGEN_LANGUAGE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Language::En);

        StudioConfig {
            language,
            pollinations: PollinationsConfig::from_env(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_pollinations(mut self, config: PollinationsConfig) -> Self {
        self.pollinations = config;
        self
    }
}
