//! Service descriptions behind `/services/:slug`.

use crate::media::{extract_identifier, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub hero: &'static str,
    pub sub: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub showcase: &'static [&'static str],
}

pub const SERVICES: [Service; 4] = [
    Service {
        slug: "dynamic-montages",
        title: "Dynamic Home Tours & Montages",
        hero: "Dynamic Home Tours & Montages: make buyers fall in love at first click",
        sub: "Fast-paced montages that highlight a property's best selling points for listings and social.",
        description: "Curated 60s-2m home tour videos highlighting flow, light and design. Deliverables include full-length MP4 and social crops.",
        features: &[
            "Fast 24-72 hour turnaround",
            "Color grading optimized for interiors",
            "MLS-safe exports (H.264 MP4)",
            "Social cuts (1:1, 9:16) included",
        ],
        showcase: &["https://www.youtube.com/watch?v=jzF_Cc5KeWs", "https://youtu.be/zSEaA7X4THw"],
    },
    Service {
        slug: "cinematic-walkthroughs",
        title: "Cinematic Walkthroughs",
        hero: "Cinematic Walkthroughs: show the story of the house",
        sub: "Slow, cinematic edits ideal for luxury and premium listings.",
        description: "4K-ready edits with stabilization, cinematic color grades, and optional VO to tell a home's story.",
        features: &[
            "4K-ready edits",
            "Stabilization & motion smoothing",
            "Professional LUTs and grade",
            "Optional voiceover",
        ],
        showcase: &["https://youtu.be/x75tbg0RBus"],
    },
    Service {
        slug: "viral-shorts",
        title: "Viral Shorts (Reels / TikTok)",
        hero: "Viral Shorts: hook viewers fast and generate leads",
        sub: "15-60s hook-first edits that drive DMs and showings on social platforms.",
        description: "Vertical-first edits with animated captions, CTA overlays, and trending sounds to maximize shareability.",
        features: &[
            "Hook-first editing (0-3s)",
            "Animated captions & CTAs",
            "Beat-synced cuts",
            "Versioning for Reels & TikTok",
        ],
        showcase: &[
            "https://youtube.com/shorts/U9HROCPcX4Q?feature=share",
            "https://youtube.com/shorts/hnKJcufqXTE?feature=share",
        ],
    },
    Service {
        slug: "aerial-highlights",
        title: "Aerial Neighborhood & Lifestyle Highlights",
        hero: "Aerial Highlights: sell the location, not just the house",
        sub: "Drone edits that show neighborhood, approach shots, and lifestyle elements.",
        description: "Drone edit packages with location callouts, transitions between aerial and ground shots, and ad-ready short versions.",
        features: &[
            "Drone stabilization & grade",
            "Location callouts & animated maps",
            "Smooth aerial-to-ground transitions",
            "30s & 60s ad-ready versions",
        ],
        showcase: &[],
    },
];

pub fn find(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

/// How a showcase link is presented on a service page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEmbed {
    /// Inline 16:9 player.
    Inline { id: String },
    /// Short-form clips open on the host site.
    OpenShorts,
    OpenVideo,
}

impl ShowcaseEmbed {
    pub fn for_link(url: &str) -> Self {
        match extract_identifier(url) {
            Some(found) if found.variant == Variant::ShortForm => ShowcaseEmbed::OpenShorts,
            Some(found) => ShowcaseEmbed::Inline { id: found.id },
            None => ShowcaseEmbed::OpenVideo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_slug() {
        assert_eq!(find("viral-shorts").map(|s| s.title), Some("Viral Shorts (Reels / TikTok)"));
        assert!(find("wedding-films").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            assert!(SERVICES.iter().skip(i + 1).all(|b| b.slug != a.slug));
        }
    }

    #[test]
    fn showcase_links_pick_presentation() {
        assert_eq!(
            ShowcaseEmbed::for_link("https://www.youtube.com/watch?v=jzF_Cc5KeWs"),
            ShowcaseEmbed::Inline { id: "jzF_Cc5KeWs".to_string() }
        );
        assert_eq!(
            ShowcaseEmbed::for_link("https://youtube.com/shorts/U9HROCPcX4Q?feature=share"),
            ShowcaseEmbed::OpenShorts
        );
        assert_eq!(ShowcaseEmbed::for_link("https://vimeo.com/"), ShowcaseEmbed::OpenVideo);
    }
}
