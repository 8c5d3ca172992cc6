//! Cursor glow follower state.
//!
//! The follower is a synthetic element anchored at its own center; the
//! presentation layer positions it at the tracked pointer coordinates
//! and lets CSS subtract half its size in each axis.

use glam::Vec2;

/// Transient state of the cursor glow follower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowState {
    /// Last pointer position in viewport coordinates.
    pos: Vec2,
    /// Current scale (1 at rest, hover scale over interactive elements).
    scale: f32,
    /// Whether the pointer has moved at least once. The follower stays
    /// invisible until then.
    visible: bool,
}

impl GlowState {
    /// Hidden follower at the origin, unit scale.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            scale: 1.0,
            visible: false,
        }
    }

    /// Last tracked pointer position.
    #[must_use]
    pub const fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Current scale factor.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether the follower has become visible.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Track a pointer move; the first move makes the follower visible.
    pub fn track(&mut self, pos: Vec2) {
        self.pos = pos;
        self.visible = true;
    }

    /// Update the scale for hover enter/leave.
    pub fn set_hovering(&mut self, entered: bool, hover_scale: f32) {
        self.scale = if entered { hover_scale } else { 1.0 };
    }
}

impl Default for GlowState {
    fn default() -> Self {
        Self::new()
    }
}
