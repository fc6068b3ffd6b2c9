//! Static per-platform posting tables: recommended send slots and the
//! post types paired with them. General guidelines, not adaptive data.
//! Loaded once, never mutated.

/// (day-of-week 0=Sunday..6=Saturday, hour 0-23) slot in the schedule's
/// target zone. No minute granularity.
pub type Slot = (u32, u32);

pub(crate) struct PlatformTable {
    pub name: &'static str,
    pub times: &'static [Slot],
    pub post_types: &'static [&'static str],
}

pub(crate) const PLATFORMS: &[PlatformTable] = &[
    PlatformTable {
        name: "facebook",
        times: &[(1, 9), (3, 13), (5, 11)], // Mon 9 AM, Wed 1 PM, Fri 11 AM
        post_types: &["post", "post", "post"],
    },
    PlatformTable {
        name: "instagram",
        times: &[(2, 11), (4, 14), (5, 10)], // Tue 11 AM, Thu 2 PM, Fri 10 AM
        post_types: &["post", "reel", "story"],
    },
    PlatformTable {
        name: "linkedin",
        times: &[(2, 8), (3, 10), (4, 9)], // Tue 8 AM, Wed 10 AM, Thu 9 AM
        post_types: &["post", "post", "article"],
    },
    PlatformTable {
        name: "twitter",
        times: &[(1, 12), (3, 15), (5, 14)], // Mon 12 PM, Wed 3 PM, Fri 2 PM
        post_types: &["post", "post", "thread"],
    },
    PlatformTable {
        name: "tiktok",
        times: &[(2, 19), (4, 18), (5, 17)], // Tue 7 PM, Thu 6 PM, Fri 5 PM
        post_types: &["video", "video", "video"],
    },
    PlatformTable {
        name: "youtube",
        times: &[(2, 14), (4, 15), (6, 10)], // Tue 2 PM, Thu 3 PM, Sat 10 AM
        post_types: &["video", "short", "short"],
    },
    PlatformTable {
        name: "gbp",
        times: &[(1, 10), (3, 12), (5, 11)], // Mon 10 AM, Wed 12 PM, Fri 11 AM
        post_types: &["post", "post", "update"],
    },
    PlatformTable {
        name: "email",
        times: &[(2, 10)], // Tue 10 AM
        post_types: &["newsletter"],
    },
];

/// Unknown platforms degrade to the facebook slots with a plain post type.
pub(crate) const FALLBACK_TIMES: &[Slot] = &[(1, 9), (3, 13), (5, 11)];
pub(crate) const FALLBACK_POST_TYPES: &[&str] = &["post"];

pub(crate) fn find(platform: &str) -> Option<&'static PlatformTable> {
    PLATFORMS.iter().find(|table| table.name == platform)
}
