//! The controller's complete output vocabulary.
//!
//! Every visual mutation — whether triggered by a scroll, a pointer
//! move, an anchor click, or an intersection callback — is represented
//! as an `EffectCommand`. The controller produces commands; a
//! [`Surface`](crate::Surface) consumes them. Nothing else writes to
//! the page.

use glam::Vec2;

/// A single visual mutation requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectCommand {
    /// Put a section into its suppressed state (transparent, offset,
    /// transition installed). Emitted once per section at startup.
    SuppressSection {
        /// Section index in document order.
        index: usize,
    },
    /// Transition a section to its revealed resting state. Emitted at
    /// most once per section.
    RevealSection {
        /// Section index in document order.
        index: usize,
    },
    /// Apply a parallax frame to the hero region.
    SetHeroFrame {
        /// Vertical translation in pixels.
        translate_y: f32,
        /// Opacity (may fall below zero; browsers clamp).
        opacity: f32,
    },
    /// Set the progress-bar width.
    SetProgress {
        /// Width as a percentage of scrollable distance.
        percent: f32,
    },
    /// Mark exactly one nav link active (clearing all others), or clear
    /// every link when `index` is `None`.
    SetActiveNav {
        /// Document-order index of the active section, if any.
        index: Option<usize>,
    },
    /// Move the glow follower to the pointer and make it visible.
    MoveGlow {
        /// Pointer position in viewport coordinates.
        pos: Vec2,
    },
    /// Scale the glow follower (hover enter/leave).
    SetGlowScale {
        /// New scale factor.
        scale: f32,
    },
    /// Smooth-scroll the section with this fragment identifier to the
    /// viewport top. Unresolvable fragments are a silent no-op.
    ScrollToFragment {
        /// Fragment identifier without the leading `#`.
        fragment: String,
    },
}
