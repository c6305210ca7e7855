use chrono::{DateTime, Datelike, Timelike, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// The document text direction this locale implies.
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

// key -> (en, ar)
static TRANSLATIONS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        // Header
        ("ai_image_creator", ("AI Image Creator", "منشئ الصور الذكي")),
        (
            "turn_imagination",
            (
                "Turn your imagination into stunning images with AI",
                "حول خيالك إلى صور مذهلة بالذكاء الاصطناعي",
            ),
        ),
        // Gallery
        ("hide_gallery", ("Hide Gallery", "إخفاء المعرض")),
        ("show_gallery", ("Show Gallery", "عرض المعرض")),
        // Tabs
        ("normal_generation", ("Normal Generation", "إنشاء عادي")),
        ("consistent_character", ("Consistent Character", "شخصية ثابتة")),
        // Form labels
        (
            "describe_image",
            ("Describe the image you want", "صف الصورة التي تريدها"),
        ),
        ("style", ("Style", "النمط")),
        ("size", ("Size", "الحجم")),
        ("number_of_images", ("Number of Images", "عدد الصور")),
        (
            "upload_reference",
            ("Upload Reference Face Image", "رفع صورة الوجه المرجعية"),
        ),
        (
            "describe_scene",
            ("Describe the scene with your character", "صف المشهد مع شخصيتك"),
        ),
        // Styles
        ("realistic", ("Realistic", "واقعي")),
        ("artistic", ("Artistic", "فني")),
        ("digital-art", ("Digital Art", "فن رقمي")),
        ("anime", ("Anime", "أنمي")),
        ("fantasy", ("Fantasy", "خيالي")),
        ("cyberpunk", ("Cyberpunk", "سايبر بانك")),
        // Sizes
        ("square_512", ("Square (512×512)", "مربع (512×512)")),
        ("square_1024", ("Large Square (1024×1024)", "مربع كبير (1024×1024)")),
        ("horizontal", ("Horizontal (1024×768)", "أفقي (1024×768)")),
        ("vertical", ("Vertical (768×1024)", "عمودي (768×1024)")),
        // Buttons
        ("generate_images", ("Generate Images", "إنشاء الصور")),
        (
            "generating",
            ("Creating your masterpiece...", "جاري إنشاء تحفتك الفنية..."),
        ),
        ("download", ("Download", "تحميل")),
        ("delete", ("Delete", "حذف")),
        ("select_all", ("Select All", "تحديد الكل")),
        ("deselect_all", ("Deselect All", "إلغاء تحديد الكل")),
        ("delete_selected", ("Delete Selected", "حذف المحدد")),
        ("clear_gallery", ("Clear Gallery", "تفريغ المعرض")),
        // Messages
        (
            "enter_description",
            ("Please enter an image description", "يرجى إدخال وصف للصورة"),
        ),
        (
            "describe_what_you_want",
            ("Describe what you want to create", "صف ما تريد إنشاؤه"),
        ),
        (
            "upload_reference_image",
            ("Please upload a reference image", "يرجى رفع صورة مرجعية"),
        ),
        (
            "upload_face_for_consistency",
            ("Upload a face image for consistency", "ارفع صورة وجه للحفاظ على الثبات"),
        ),
        ("images_generated", ("Generated", "تم إنشاء")),
        ("images", ("images", "صورة")),
        (
            "ready_to_view",
            ("Your AI images are ready to view.", "صورك الذكية جاهزة للمشاهدة."),
        ),
        ("generation_failed", ("Generation Failed", "فشل في الإنشاء")),
        (
            "error_occurred",
            (
                "Something went wrong. Please try again.",
                "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
            ),
        ),
        ("download_started", ("Download Started", "بدأ التحميل")),
        (
            "downloading_image",
            ("Your image is being downloaded.", "يتم تحميل صورتك الآن."),
        ),
        ("download_failed", ("Download Failed", "فشل التحميل")),
        (
            "cannot_download",
            ("Cannot download the image.", "لا يمكن تحميل الصورة."),
        ),
        ("image_deleted", ("Image Deleted", "تم حذف الصورة")),
        (
            "image_removed",
            ("Image removed from gallery.", "تم إزالة الصورة من المعرض."),
        ),
        ("all_images_deleted", ("All Images Deleted", "تم حذف جميع الصور")),
        (
            "all_images_removed",
            ("All images removed from gallery.", "تم إزالة جميع الصور من المعرض."),
        ),
        (
            "selected_images_deleted",
            ("Selected Images Deleted", "تم حذف الصور المحددة"),
        ),
        (
            "selected_images_removed",
            (
                "Selected images removed from gallery.",
                "تم إزالة الصور المحددة من المعرض.",
            ),
        ),
        (
            "reference_uploaded",
            ("Reference Image Uploaded", "تم رفع الصورة المرجعية"),
        ),
        (
            "reference_will_be_used",
            (
                "Image will be used to maintain face consistency.",
                "سيتم استخدام الصورة للحفاظ على ثبات الوجه.",
            ),
        ),
        ("invalid_file_type", ("Invalid File Type", "نوع ملف غير صحيح")),
        (
            "please_upload_image",
            ("Please upload an image file.", "يرجى رفع ملف صورة."),
        ),
        ("consistent_images_generated", ("Generated", "تم إنشاء")),
        ("consistent_images", ("consistent images!", "صورة ثابتة!")),
        (
            "consistent_character_ready",
            (
                "Your consistent character images are ready to view.",
                "صور شخصيتك الثابتة جاهزة للمشاهدة.",
            ),
        ),
        // Placeholders
        (
            "dragon_placeholder",
            (
                "A majestic dragon flying over a magical forest at sunset...",
                "تنين مهيب يطير فوق غابة سحرية عند غروب الشمس...",
            ),
        ),
        (
            "character_placeholder",
            (
                "Character standing in a medieval castle, wearing royal armor...",
                "الشخصية واقفة في قلعة من العصور الوسطى، ترتدي درعاً ملكياً...",
            ),
        ),
        (
            "reference_description",
            (
                "Upload a clear face image to maintain character consistency across generated images",
                "ارفع صورة وجه واضحة للحفاظ على ثبات الشخصية عبر الصور المُنشأة",
            ),
        ),
        // Info
        (
            "free_ai_generation",
            (
                "🎨 Free AI image generation powered by Pollinations. Each description creates unique images based on your vision!",
                "🎨 إنشاء صور مجاني بالذكاء الاصطناعي من Pollinations. كل وصف ينشئ صوراً فريدة حسب وصفك!",
            ),
        ),
        // Gallery footer
        ("selected_count", ("selected", "محدد")),
        ("generated_on", ("Generated on", "تم الإنشاء في")),
        ("your_creations", ("Your Creations", "إبداعاتك")),
        ("ready_to_create", ("Ready to create magic?", "مستعد لصنع السحر؟")),
        (
            "enter_description_above",
            (
                "Enter a description above and watch AI turn your ideas into reality",
                "أدخل وصفاً أعلاه وشاهد الذكاء الاصطناعي يحول أفكارك إلى حقيقة",
            ),
        ),
    ])
});

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Looks up a UI string for one locale. Unknown keys are echoed back, so a
/// missing translation degrades to the key instead of failing the action.
pub fn t<'a>(language: Language, key: &'a str) -> &'a str {
    match TRANSLATIONS.get(key) {
        Some((en, ar)) => match language {
            Language::En => en,
            Language::Ar => ar,
        },
        None => key,
    }
}

/// Renders a generation timestamp the way the active locale displays dates:
/// Gregorian calendar, long month name, hours and minutes.
pub fn format_timestamp(language: Language, timestamp: DateTime<Utc>) -> String {
    let month = timestamp.month0() as usize;
    match language {
        Language::En => format!(
            "{} {}, {}, {:02}:{:02}",
            MONTHS_EN[month],
            timestamp.day(),
            timestamp.year(),
            timestamp.hour(),
            timestamp.minute()
        ),
        Language::Ar => format!(
            "{} {} {}، {:02}:{:02}",
            timestamp.day(),
            MONTHS_AR[month],
            timestamp.year(),
            timestamp.hour(),
            timestamp.minute()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_lookup_in_both_locales() {
        assert_eq!(t(Language::En, "generate_images"), "Generate Images");
        assert_eq!(t(Language::Ar, "generate_images"), "إنشاء الصور");
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        assert_eq!(t(Language::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_direction_per_locale() {
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::Ar.direction().as_str(), "rtl");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_timestamp_formats() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 18, 5, 0).unwrap();
        assert_eq!(format_timestamp(Language::En, ts), "March 7, 2025, 18:05");
        assert_eq!(format_timestamp(Language::Ar, ts), "7 مارس 2025، 18:05");
    }
}
