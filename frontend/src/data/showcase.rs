//! The video showcase catalogue.
//!
//! Raw links are grouped by category. Every link goes through the
//! identifier extractor; duplicates within a category and links that do
//! not parse are dropped when the catalogue is built.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::media::{MediaReference, ResolvedMediaIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Montages,
    Cinematic,
    Shorts,
    Aerial,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Montages,
        CategoryKey::Cinematic,
        CategoryKey::Shorts,
        CategoryKey::Aerial,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryKey::Montages => "montages",
            CategoryKey::Cinematic => "cinematic",
            CategoryKey::Shorts => "shorts",
            CategoryKey::Aerial => "aerial",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CategoryKey::Montages => "Montages",
            CategoryKey::Cinematic => "Cinematic Walkthroughs",
            CategoryKey::Shorts => "Reels & Shorts",
            CategoryKey::Aerial => "Aerial Highlights",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            CategoryKey::Montages => "Emotion-driven property reels.",
            CategoryKey::Cinematic => "Slow, immersive tours.",
            CategoryKey::Shorts => "Scroll-stopping clips.",
            CategoryKey::Aerial => "Neighborhood + context.",
        }
    }

    pub fn section_id(&self) -> String {
        format!("category-{}", self.slug())
    }

    fn raw_links(&self) -> &'static [&'static str] {
        match self {
            CategoryKey::Montages => MONTAGE_LINKS,
            CategoryKey::Cinematic => CINEMATIC_LINKS,
            CategoryKey::Shorts => SHORTS_LINKS,
            CategoryKey::Aerial => AERIAL_LINKS,
        }
    }
}

const MONTAGE_LINKS: &[&str] = &[
    "https://youtu.be/zSEaA7X4THw",
    "https://youtu.be/irNFQ2ksQdQ",
    "https://youtu.be/KolAwIkZPMk",
    "https://youtu.be/OqaKcXo6Q5o",
    "https://youtu.be/HzLYeVU7w30",
    "https://youtu.be/DPGOQye1iKk",
    "https://youtu.be/qGdq5SiQfwU",
    "https://youtu.be/DevuggJVgOo",
    "https://www.youtube.com/watch?v=jzF_Cc5KeWs",
    "https://youtu.be/lEbwVhWUqY0",
    "https://youtu.be/KxFNz5Ifc4w",
    "https://youtu.be/kk7_evjf-RE",
    "https://youtu.be/d5ZAYpkqvxA",
    "https://youtu.be/4wjWqpKbKSU",
    "https://youtu.be/xiBEAVN7LWs",
    "https://youtu.be/8Z-1A8YmTsE",
];

const CINEMATIC_LINKS: &[&str] = &[
    "https://youtu.be/x75tbg0RBus",
    "https://youtu.be/x9DPLwAnWjM",
    "https://youtu.be/jy-ncpwHscw",
    "https://youtu.be/OnNx_Dpjnjg",
];

const SHORTS_LINKS: &[&str] = &[
    "https://youtube.com/shorts/U9HROCPcX4Q?feature=share",
    "https://youtube.com/shorts/hnKJcufqXTE?feature=share",
    "https://youtube.com/shorts/921OO715OyI?feature=share",
    "https://youtube.com/shorts/OMNSYjiF8vM?feature=share",
    "https://youtube.com/shorts/nryR-e3uRsg?feature=share",
    "https://youtube.com/shorts/AqaYtm3xuO8?feature=share",
    "https://youtube.com/shorts/PxZuimdPuVo?feature=share",
];

const AERIAL_LINKS: &[&str] = &[
    "https://youtu.be/NlPMM8tyf58",
    "https://youtu.be/aPk_UY7JD38",
    "https://youtube.com/shorts/ErZZV0GDgHw?feature=share",
    "https://youtu.be/XgUdC2dVgb8",
];

pub const MONTAGE_DESCRIPTIONS: [&str; 5] = [
    "Warm opening: curb appeal and entrance that sells the first impression.",
    "Bright, airy living spaces: showcases daylight and flow between rooms.",
    "Kitchen hero: closeups on finishes that attract buyers and agents.",
    "Bedroom retreat: mood, calm pacing, and lifestyle framing.",
    "Outdoor reveal: garden, patio, and entertaining potential.",
];

pub fn montage_description(index: usize) -> &'static str {
    MONTAGE_DESCRIPTIONS[index % MONTAGE_DESCRIPTIONS.len()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseVideo {
    pub url: &'static str,
    pub identifier: ResolvedMediaIdentifier,
    pub category: CategoryKey,
}

impl ShowcaseVideo {
    pub fn title(&self) -> String {
        format!("{} · {}", self.category.title(), self.identifier.id)
    }

    fn matches(&self, needle: &str) -> bool {
        let haystack = format!("{}{}{}", self.identifier.id, self.url, self.category.title()).to_lowercase();
        haystack.contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseCategory {
    pub key: CategoryKey,
    pub videos: Vec<ShowcaseVideo>,
}

pub fn build_category(key: CategoryKey, links: &[&'static str]) -> ShowcaseCategory {
    let mut seen = HashSet::new();
    let videos = links
        .iter()
        .filter_map(|url| {
            let identifier = MediaReference::new(*url).resolve()?;
            seen.insert(identifier.id.clone()).then(|| ShowcaseVideo {
                url: *url,
                identifier,
                category: key,
            })
        })
        .collect();
    ShowcaseCategory { key, videos }
}

pub static CATALOGUE: Lazy<Vec<ShowcaseCategory>> = Lazy::new(|| {
    CategoryKey::ALL
        .into_iter()
        .map(|key| build_category(key, key.raw_links()))
        .collect()
});

pub fn category(key: CategoryKey) -> Option<&'static ShowcaseCategory> {
    CATALOGUE.iter().find(|c| c.key == key)
}

pub fn flatten() -> impl Iterator<Item = &'static ShowcaseVideo> {
    CATALOGUE.iter().flat_map(|c| c.videos.iter())
}

/// The reel shown in the hero slot.
pub fn hero_video() -> Option<&'static ShowcaseVideo> {
    flatten().next()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    pub fn includes(&self, key: CategoryKey) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == key,
        }
    }
}

/// Case-insensitive search over id, url and category title. A blank query
/// keeps everything.
pub fn search<'a>(category: &'a ShowcaseCategory, query: &str) -> Vec<&'a ShowcaseVideo> {
    let needle = query.trim().to_lowercase();
    category
        .videos
        .iter()
        .filter(|video| needle.is_empty() || video.matches(&needle))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        number: "01",
        title: "Convert Focused",
        body: "Speed means nothing without conversions. Edits, captions and calls to action work together to drive enquiries, not just views.",
        icon: "chart",
    },
    Benefit {
        number: "02",
        title: "Quick Launch Or Retainer",
        body: "Scale up for a big listing push or down for steady monthly content. One reel or a full library, the workflow adapts.",
        icon: "clock",
    },
    Benefit {
        number: "03",
        title: "Real-Time Collaboration",
        body: "Daily check-ins and rapid iterations keep projects moving. You're always in the loop with feedback cycles that eliminate delays.",
        icon: "cursor",
    },
    Benefit {
        number: "04",
        title: "Complete Creative Solution",
        body: "Editing, captions, music and thumbnails handled together, so every clip carries the same message.",
        icon: "bulb",
    },
    Benefit {
        number: "05",
        title: "Transparent Pricing",
        body: "Fixed monthly rates or clear project fees. No surprise charges, no scope creep. You know exactly what you're investing.",
        icon: "dollar",
    },
    Benefit {
        number: "06",
        title: "Real Human Connection",
        body: "Regular video calls keep us aligned on your vision. Real conversations with real people, not just project management tools.",
        icon: "users",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Variant;

    #[test]
    fn catalogue_has_every_category_in_order() {
        let keys: Vec<_> = CATALOGUE.iter().map(|c| c.key).collect();
        assert_eq!(keys, CategoryKey::ALL.to_vec());
        assert_eq!(category(CategoryKey::Montages).map(|c| c.videos.len()), Some(16));
        assert_eq!(category(CategoryKey::Shorts).map(|c| c.videos.len()), Some(7));
    }

    #[test]
    fn duplicates_and_garbage_are_dropped() {
        let built = build_category(
            CategoryKey::Cinematic,
            &[
                "https://youtu.be/x75tbg0RBus",
                "https://www.youtube.com/watch?v=x75tbg0RBus",
                "not a link",
                "https://youtu.be/x9DPLwAnWjM",
            ],
        );
        let ids: Vec<_> = built.videos.iter().map(|v| v.identifier.id.as_str()).collect();
        assert_eq!(ids, vec!["x75tbg0RBus", "x9DPLwAnWjM"]);
    }

    #[test]
    fn aerial_short_keeps_its_variant() {
        let aerial = category(CategoryKey::Aerial).expect("aerial");
        let short = aerial.videos.iter().find(|v| v.identifier.id == "ErZZV0GDgHw").expect("short");
        assert_eq!(short.identifier.variant, Variant::ShortForm);
        assert_eq!(aerial.videos[0].identifier.variant, Variant::Standard);
    }

    #[test]
    fn hero_is_first_montage() {
        assert_eq!(hero_video().map(|v| v.identifier.id.as_str()), Some("zSEaA7X4THw"));
    }

    #[test]
    fn search_is_case_insensitive_over_id_url_and_title() {
        let cinematic = category(CategoryKey::Cinematic).expect("cinematic");
        assert_eq!(search(cinematic, "  ").len(), 4);
        assert_eq!(search(cinematic, "X75TBG").len(), 1);
        assert_eq!(search(cinematic, "walkthroughs").len(), 4);
        assert!(search(cinematic, "drone").is_empty());
    }

    #[test]
    fn filter_includes_only_its_category() {
        assert!(CategoryFilter::All.includes(CategoryKey::Shorts));
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
        assert!(CategoryFilter::Only(CategoryKey::Aerial).includes(CategoryKey::Aerial));
        assert!(!CategoryFilter::Only(CategoryKey::Aerial).includes(CategoryKey::Shorts));
    }

    #[test]
    fn montage_descriptions_cycle() {
        assert_eq!(montage_description(5), MONTAGE_DESCRIPTIONS[0]);
    }
}
