//! Centralized effect options with JSON support.
//!
//! All tweakable constants (parallax factor, reveal thresholds, nav
//! lookahead, glow geometry) are consolidated here. Options serialize
//! to/from JSON so a host page can override individual values from an
//! inline script or data attribute.

use serde::{Deserialize, Serialize};

use crate::error::GlintError;

/// Parallax hero parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallaxOptions {
    /// Fraction of the scroll offset applied as vertical translation.
    pub factor: f32,
    /// Scroll offset at which hero opacity reaches zero.
    pub opacity_divisor: f32,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            factor: 0.5,
            opacity_divisor: 700.0,
        }
    }
}

/// Fade-in reveal parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealOptions {
    /// Visible proportion of a section that triggers its reveal.
    pub threshold: f32,
    /// Distance the trigger edge sits above the viewport bottom, in
    /// pixels (observer root margin `0px 0px -{bottom_margin_px}px 0px`).
    pub bottom_margin_px: f32,
    /// Vertical offset of a suppressed section, in pixels.
    pub offset_px: f32,
    /// Duration of the reveal transition, in seconds.
    pub transition_secs: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 100.0,
            offset_px: 30.0,
            transition_secs: 0.8,
        }
    }
}

/// Active-nav tracking parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavOptions {
    /// Lookahead subtracted from each section's `offsetTop`, in pixels,
    /// so a link activates slightly before its section reaches the top.
    pub lookahead_px: f32,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self { lookahead_px: 120.0 }
    }
}

/// Cursor glow follower parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlowOptions {
    /// Diameter of the follower element, in pixels.
    pub size_px: f32,
    /// Scale applied while hovering an interactive element.
    pub hover_scale: f32,
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self {
            size_px: 20.0,
            hover_scale: 2.0,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial JSON (e.g. only overriding `parallax`) works correctly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EffectOptions {
    /// Parallax hero parameters.
    pub parallax: ParallaxOptions,
    /// Fade-in reveal parameters.
    pub reveal: RevealOptions,
    /// Active-nav tracking parameters.
    pub nav: NavOptions,
    /// Cursor glow follower parameters.
    pub glow: GlowOptions,
}

impl EffectOptions {
    /// Parse options from a JSON string. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, GlintError> {
        serde_json::from_str(json)
            .map_err(|e| GlintError::OptionsParse(e.to_string()))
    }

    /// Serialize options to a JSON string.
    pub fn to_json(&self) -> Result<String, GlintError> {
        serde_json::to_string(self)
            .map_err(|e| GlintError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let opts = EffectOptions::default();
        let json = opts.to_json().unwrap();
        let parsed = EffectOptions::from_json(&json).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_json_keeps_defaults_elsewhere() {
        let parsed =
            EffectOptions::from_json(r#"{"parallax":{"factor":0.25}}"#)
                .unwrap();
        assert_eq!(parsed.parallax.factor, 0.25);
        assert_eq!(parsed.parallax.opacity_divisor, 700.0);
        assert_eq!(parsed.nav.lookahead_px, 120.0);
        assert_eq!(parsed.glow.hover_scale, 2.0);
    }

    #[test]
    fn defaults_match_page_constants() {
        let opts = EffectOptions::default();
        assert_eq!(opts.parallax.factor, 0.5);
        assert_eq!(opts.parallax.opacity_divisor, 700.0);
        assert_eq!(opts.reveal.threshold, 0.1);
        assert_eq!(opts.reveal.bottom_margin_px, 100.0);
        assert_eq!(opts.reveal.transition_secs, 0.8);
        assert_eq!(opts.nav.lookahead_px, 120.0);
        assert_eq!(opts.glow.hover_scale, 2.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EffectOptions::from_json("{not json").unwrap_err();
        assert!(matches!(err, GlintError::OptionsParse(_)));
    }
}
