//! Parallax hero math.
//!
//! While the scroll offset is below one viewport height the hero drifts
//! downward at a fraction of the scroll speed and fades out linearly.
//! Past one viewport height the hero is off-screen and updates stop,
//! freezing it at its last computed frame.

use crate::options::ParallaxOptions;

/// One computed visual frame for the hero region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    /// Vertical translation in pixels.
    pub translate_y: f32,
    /// Opacity in `[0, 1]` nominally; values below zero are handed to
    /// the presentation layer unclamped, which treats them as zero.
    pub opacity: f32,
}

/// Compute the hero frame for a scroll offset.
///
/// Returns `None` once the offset reaches one viewport height; the
/// caller must then leave the hero untouched.
#[must_use]
pub fn hero_frame(
    scroll_y: f32,
    viewport_height: f32,
    opts: &ParallaxOptions,
) -> Option<HeroFrame> {
    if scroll_y >= viewport_height {
        return None;
    }
    Some(HeroFrame {
        translate_y: scroll_y * opts.factor,
        opacity: 1.0 - scroll_y / opts.opacity_divisor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_at_rest_is_identity() {
        let frame =
            hero_frame(0.0, 900.0, &ParallaxOptions::default()).unwrap();
        assert_eq!(frame.translate_y, 0.0);
        assert_eq!(frame.opacity, 1.0);
    }

    #[test]
    fn spec_scenario_350_of_900() {
        // s = 350, viewport 900 -> translateY 175px, opacity 0.5
        let frame =
            hero_frame(350.0, 900.0, &ParallaxOptions::default()).unwrap();
        assert_eq!(frame.translate_y, 175.0);
        assert_eq!(frame.opacity, 0.5);
    }

    #[test]
    fn freezes_at_one_viewport_height() {
        let opts = ParallaxOptions::default();
        assert!(hero_frame(900.0, 900.0, &opts).is_none());
        assert!(hero_frame(5000.0, 900.0, &opts).is_none());
        // One pixel short still updates.
        assert!(hero_frame(899.0, 900.0, &opts).is_some());
    }

    #[test]
    fn opacity_goes_negative_past_divisor() {
        // The browser clamps; the math does not.
        let frame =
            hero_frame(840.0, 900.0, &ParallaxOptions::default()).unwrap();
        assert!(frame.opacity < 0.0);
    }
}
