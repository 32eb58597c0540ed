//! Paging arithmetic for horizontal media strips.

use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::prefs::MotionPreference;

pub const MIN_SCROLL_STEP: i32 = 360;
const STEP_FRACTION: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }

    /// Maps a `KeyboardEvent.key` value; anything but the horizontal arrows
    /// is left to the browser.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Back),
            "ArrowRight" => Some(Direction::Forward),
            _ => None,
        }
    }
}

/// Three quarters of the visible width, never less than [`MIN_SCROLL_STEP`].
pub fn scroll_step(client_width: i32) -> i32 {
    let fraction = (f64::from(client_width.max(0)) * STEP_FRACTION).floor() as i32;
    fraction.max(MIN_SCROLL_STEP)
}

pub fn scroll_offset(client_width: i32, direction: Direction) -> i32 {
    scroll_step(client_width) * direction.sign()
}

pub fn scroll_behavior(motion: MotionPreference) -> ScrollBehavior {
    match motion {
        MotionPreference::Full => ScrollBehavior::Smooth,
        MotionPreference::Reduced => ScrollBehavior::Instant,
    }
}

/// Index of the item whose leading edge sits closest to `scroll_left`.
/// Offsets are measured from the strip's own leading edge.
pub fn nearest_item(scroll_left: i32, offsets: &[i32]) -> Option<usize> {
    offsets
        .iter()
        .enumerate()
        .min_by_key(|(_, offset)| (**offset - scroll_left).abs())
        .map(|(index, _)| index)
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Scrolls `strip` one page in `direction`.
pub fn page_strip(strip: &Element, direction: Direction, motion: MotionPreference) {
    let options = ScrollToOptions::new();
    options.set_left(f64::from(scroll_offset(strip.client_width(), direction)));
    options.set_behavior(scroll_behavior(motion));
    strip.scroll_by_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_three_quarters_of_width() {
        assert_eq!(scroll_step(1000), 750);
        assert_eq!(scroll_step(1001), 750);
    }

    #[test]
    fn narrow_strips_use_minimum_step() {
        assert_eq!(scroll_step(320), MIN_SCROLL_STEP);
        assert_eq!(scroll_step(0), MIN_SCROLL_STEP);
        assert_eq!(scroll_step(-5), MIN_SCROLL_STEP);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Forward));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Back));
        assert_eq!(Direction::from_key("ArrowDown"), None);
        assert_eq!(Direction::from_key("Tab"), None);
    }

    #[test]
    fn right_arrow_on_wide_strip_pages_forward() {
        let offset = Direction::from_key("ArrowRight").map(|d| scroll_offset(1200, d));
        assert_eq!(offset, Some(900));
        assert_eq!(scroll_offset(1200, Direction::Back), -900);
    }

    #[test]
    fn activation_picks_card_nearest_scroll_position() {
        let offsets = [0, 336, 672, 1008];
        assert_eq!(nearest_item(0, &offsets), Some(0));
        assert_eq!(nearest_item(700, &offsets), Some(2));
        assert_eq!(nearest_item(5000, &offsets), Some(3));
        assert_eq!(nearest_item(100, &[]), None);
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("ArrowRight"));
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        assert_eq!(scroll_behavior(MotionPreference::Reduced), ScrollBehavior::Instant);
        assert_eq!(scroll_behavior(MotionPreference::Full), ScrollBehavior::Smooth);
    }
}
