//! Thumbnail-design portfolio images and the CDN width transform.

use crate::config;

const UPLOAD_SEGMENT: &str = "/upload/";
/// Images above the fold that get preloaded.
pub const PREFETCH_COUNT: usize = 4;

const BUILTIN_IMAGES: &[&str] = &[
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556256/Charge_On_Th_go_cf86ck.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556238/3_Tony_pro_ghoqae.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556240/3.1_Upgrade_u1au8z.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556241/4.1_segway2_isszi6.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556242/5.2_Chian_saw_fkyi0o.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556244/20_Anthony_Arillotta_huhuds.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556245/9_Alpha_vs_Warrior_qqpvja.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556247/7_Peter_Pasta_hzhhyt.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556247/8_Phillip_Crawford_Jr_aw8pv9.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556250/12_Motor_Reveal_red_mhl6lc.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556251/28.3_Quality_Scale_New_ijxz2r.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556251/28.4_Bad_Good_cvh0wo.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556252/28.2_Is_It_Enough_ebznfh.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556251/29.1_King_New_vsfdgu.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556252/29.4_Dominated_2_gnlpee.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556251/26.3_Lawn_Mower_isiafd.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556253/29.2_Ai_Recommended_v2_ninsph.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556253/30.2_13_Millionv2_d4fuqg.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556254/42_All_the_bosses_men_lidsw0.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556254/30.3_Library_2_updq5p.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556256/24.3_AI_glasses_thumbnail_swlh96.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556254/30.4_Meter_New_znoai2.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556256/24.1_Ai_thumbnail_omhxm7.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556255/62_Anthony_Arilotta_unleased_vugmn5.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556254/43_all_the_bosses_men_enhanced_npn7yr.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556255/9_GOTTI_JR_VS_SAMMY_zr7bge.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556258/tony_natasi_king_pimp_of_ny_uhgf64.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556254/44_Gene_Gotti_zapxim.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556256/Did_He_Win_2_nbxoke.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556262/69.1_Dominic_Chicale_poster_noo_ttxt_acupt0.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556259/44_No_more_bills_for_lewis_1_imj9en.png",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556259/2_This_is_the_one_kw6cwf.jpg",
    "https://res.cloudinary.com/dim7qn23t/image/upload/v1763556259/no_car_no_blur_jnjbyu.jpg",
];

/// The configured image list, falling back to the built-in one.
pub fn images() -> Vec<String> {
    match config::portfolio_images_override() {
        Some(list) => parse_image_list(list),
        None => BUILTIN_IMAGES.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn parse_image_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}

/// Asks the image CDN for a resized, auto-format copy. Links from other
/// hosts pass through untouched.
pub fn transform_url(url: &str, width: u32) -> String {
    if !url.contains(UPLOAD_SEGMENT) {
        return url.to_string();
    }
    url.replacen(UPLOAD_SEGMENT, &format!("/upload/w_{},q_auto,f_auto/", width), 1)
}

pub fn srcset(url: &str, widths: &[u32]) -> String {
    widths
        .iter()
        .map(|w| format!("{} {}w", transform_url(url, *w), w))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn broken_image_fallback(index: usize) -> String {
    format!("https://via.placeholder.com/1200x800/111827/9CA3AF?text=Image+{}", index + 1)
}

/// Which image the lightbox shows, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    active: Option<usize>,
}

impl Lightbox {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn open(index: usize, len: usize) -> Self {
        Self { active: (index < len).then_some(index) }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    pub fn next(&self, len: usize) -> Self {
        match self.active {
            Some(i) if len > 0 => Self { active: Some((i + 1) % len) },
            _ => *self,
        }
    }

    pub fn previous(&self, len: usize) -> Self {
        match self.active {
            Some(i) if len > 0 => Self { active: Some((i + len - 1) % len) },
            _ => *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "https://res.cloudinary.com/demo/image/upload/v1/cat.jpg";

    #[test]
    fn cdn_urls_get_width_transform() {
        assert_eq!(
            transform_url(SAMPLE, 800),
            "https://res.cloudinary.com/demo/image/upload/w_800,q_auto,f_auto/v1/cat.jpg"
        );
    }

    #[test]
    fn foreign_urls_pass_through() {
        assert_eq!(transform_url("https://example.com/a.jpg", 800), "https://example.com/a.jpg");
    }

    #[test]
    fn srcset_lists_each_width() {
        let set = srcset(SAMPLE, &[320, 640]);
        assert!(set.starts_with("https://res.cloudinary.com/demo/image/upload/w_320,q_auto,f_auto/v1/cat.jpg 320w, "));
        assert!(set.ends_with(" 640w"));
    }

    #[test]
    fn image_list_override_is_comma_separated() {
        assert_eq!(parse_image_list(" a.jpg, ,b.jpg "), vec!["a.jpg", "b.jpg"]);
        assert!(!BUILTIN_IMAGES.is_empty());
    }

    #[test]
    fn lightbox_wraps_both_ways() {
        let lb = Lightbox::open(0, 3);
        assert_eq!(lb.previous(3).active(), Some(2));
        assert_eq!(lb.next(3).next(3).next(3).active(), Some(0));
    }

    #[test]
    fn lightbox_ignores_out_of_range_and_closed() {
        assert_eq!(Lightbox::open(5, 3).active(), None);
        assert_eq!(Lightbox::closed().next(3).active(), None);
    }
}
