//! Pure per-behavior effect math.
//!
//! Each submodule is a self-contained function of scroll/layout metrics
//! to visual state; none of them touches the DOM. The
//! [`EffectController`](crate::EffectController) is the only caller.

/// Cursor glow follower state.
pub mod glow;
/// Active-section resolution for nav highlighting.
pub mod nav;
/// Hero translation and opacity.
pub mod parallax;
/// Scroll progress percentage.
pub mod progress;
/// One-way section reveal tracking.
pub mod reveal;

pub use glow::GlowState;
pub use parallax::HeroFrame;
pub use reveal::{RevealPhase, RevealTracker};
