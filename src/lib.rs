pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logger;
pub mod models;
pub mod pollinations;

pub use config::{PollinationsConfig, StudioConfig};
pub use error::{PolligenError, Result};
pub use gallery::Gallery;
pub use models::{
    BatchSize, GeneratedImage, GenerationMode, GenerationRequest, ImageSize, ImageStyle,
    ReferenceImage,
};
pub use pollinations::{
    DownloadClient, ImageClient, ImageProvider, PollinationsClient, PollinationsProvider,
};
