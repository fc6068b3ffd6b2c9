//! Platform image-size tables.
//!
//! Lookup only: the actual generation and resizing pipeline is an
//! external collaborator. These dimensions tell it what to produce for
//! each platform.

use serde::Serialize;

/// One named output size for a platform. Serializes for the pipeline's
/// metadata files; the table itself is compiled in, never read back.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ImageSize {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub platform: &'static str,
}

/// Every size the pipeline knows how to produce, grouped by platform.
pub const IMAGE_SIZES: &[ImageSize] = &[
    // Blog
    ImageSize { name: "blog-hero", width: 1200, height: 630, platform: "blog" },
    ImageSize { name: "blog-thumbnail", width: 800, height: 450, platform: "blog" },
    // Facebook
    ImageSize { name: "facebook-feed", width: 1200, height: 630, platform: "facebook" },
    ImageSize { name: "facebook-story", width: 1080, height: 1920, platform: "facebook" },
    // Instagram
    ImageSize { name: "instagram-feed", width: 1080, height: 1080, platform: "instagram" },
    ImageSize { name: "instagram-story", width: 1080, height: 1920, platform: "instagram" },
    ImageSize { name: "instagram-reel", width: 1080, height: 1920, platform: "instagram" },
    // LinkedIn
    ImageSize { name: "linkedin-feed", width: 1200, height: 627, platform: "linkedin" },
    // Twitter
    ImageSize { name: "twitter-feed", width: 1200, height: 675, platform: "twitter" },
    // YouTube
    ImageSize { name: "youtube-thumbnail", width: 1280, height: 720, platform: "youtube" },
    // TikTok
    ImageSize { name: "tiktok-video", width: 1080, height: 1920, platform: "tiktok" },
    // GBP
    ImageSize { name: "gbp-post", width: 1200, height: 900, platform: "gbp" },
    // Email
    ImageSize { name: "email-header", width: 600, height: 300, platform: "email" },
];

/// Sizes required for the requested platforms, in table order.
pub fn sizes_for(platforms: &[String]) -> Vec<ImageSize> {
    IMAGE_SIZES
        .iter()
        .filter(|size| platforms.iter().any(|p| p == size.platform))
        .copied()
        .collect()
}

/// Look up one size by its name.
pub fn size_by_name(name: &str) -> Option<ImageSize> {
    IMAGE_SIZES.iter().find(|size| size.name == name).copied()
}
