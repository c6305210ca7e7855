use polligen::i18n;
use polligen::{
    BatchSize, Gallery, GenerationMode, GenerationRequest, ImageSize, ImageStyle,
    PollinationsClient, ReferenceImage, StudioConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    polligen::logger::init_with_config(
        polligen::logger::LoggerConfig::development()
            .with_level(polligen::logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = StudioConfig::from_env();
    let language = config.language;
    log::info!(
        "🌐 Locale: {} (direction: {})",
        language.code(),
        language.direction().as_str()
    );
    log::info!("🚀 {}", i18n::t(language, "ai_image_creator"));
    log::info!("   {}", i18n::t(language, "turn_imagination"));

    let client = PollinationsClient::new(config);
    let mut gallery = Gallery::new();

    // Test 1: A normal generation batch
    log::info!("🔄 Testing normal generation...");

    let request = GenerationRequest::new("A majestic dragon flying over a magical forest at sunset")
        .with_style(ImageStyle::Fantasy)
        .with_size(ImageSize::Square1024)
        .with_count(BatchSize::Four);

    match client
        .generate_into(&request, GenerationMode::Normal, &mut gallery)
        .await
    {
        Ok(added) => {
            log::info!(
                "✅ {} {} {}",
                i18n::t(language, "images_generated"),
                added,
                i18n::t(language, "images")
            );
            log::info!("   {}", i18n::t(language, "ready_to_view"));
        }
        Err(e) => {
            log::error!("❌ {}: {}", i18n::t(language, "generation_failed"), e);
        }
    }

    // Test 2: Validation catches an empty prompt before any network call
    log::info!("🧪 Testing empty-prompt validation...");

    match client
        .generate_into(
            &GenerationRequest::new("   "),
            GenerationMode::Normal,
            &mut gallery,
        )
        .await
    {
        Ok(_) => log::warn!("⚠️  Unexpected success with empty prompt"),
        Err(e) => log::info!("✅ {}: {}", i18n::t(language, "enter_description"), e),
    }

    // Test 3: A consistent-character batch gated on a reference image
    log::info!("🔄 Testing consistent-character generation...");

    let reference = match ReferenceImage::new("face.png", "image/png") {
        Ok(reference) => {
            log::info!("✅ {}", i18n::t(language, "reference_uploaded"));
            reference
        }
        Err(e) => {
            log::error!("❌ {}: {}", i18n::t(language, "invalid_file_type"), e);
            return Err(e.into());
        }
    };

    let consistent_request =
        GenerationRequest::new("Character standing in a medieval castle, wearing royal armor")
            .with_style(ImageStyle::DigitalArt)
            .with_size(ImageSize::Vertical)
            .with_count(BatchSize::Two)
            .with_reference(reference);

    match client
        .generate_into(&consistent_request, GenerationMode::Consistent, &mut gallery)
        .await
    {
        Ok(added) => log::info!(
            "✅ {} {} {}",
            i18n::t(language, "consistent_images_generated"),
            added,
            i18n::t(language, "consistent_images")
        ),
        Err(e) => log::error!("❌ {}: {}", i18n::t(language, "generation_failed"), e),
    }

    // Test 4: Gallery walkthrough
    log::info!(
        "🖼️  {} ({})",
        i18n::t(language, "your_creations"),
        gallery.len()
    );
    for image in gallery.images() {
        log::info!(
            "   {} — {} {}",
            image.prompt,
            i18n::t(language, "generated_on"),
            i18n::format_timestamp(language, image.timestamp)
        );
        log::debug!("   {}", image.url);
    }

    if let Some(first) = gallery.images().first() {
        let first_id = first.id.clone();
        gallery.toggle_selection(&first_id);
        log::info!(
            "☑️  {} {}",
            gallery.selected_count(),
            i18n::t(language, "selected_count")
        );

        gallery.delete_selected();
        log::info!(
            "🗑️  {} ({} left)",
            i18n::t(language, "selected_images_deleted"),
            gallery.len()
        );
    }

    // Test 5: Download the newest remaining image
    if let Some(image) = gallery.images().first() {
        log::info!("⬇️  Testing download...");
        match client
            .download()
            .download(&image.url, &image.prompt, std::env::temp_dir().as_path())
            .await
        {
            Ok(path) => log::info!(
                "✅ {} — {}",
                i18n::t(language, "download_started"),
                path.display()
            ),
            Err(e) => log::error!("❌ {}: {}", i18n::t(language, "download_failed"), e),
        }
    }

    gallery.clear_all();
    log::info!("♻️  {}", i18n::t(language, "all_images_removed"));
    log::info!("🎉 All tests completed!");

    Ok(())
}
