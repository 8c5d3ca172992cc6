//! Layout metrics read from the page once per event.
//!
//! The platform layer measures the live document and hands the controller
//! an immutable [`LayoutSnapshot`]; the controller never touches the DOM
//! itself. Keeping measurement separate from computation is what makes
//! the effect arithmetic testable without a browser.

use serde::{Deserialize, Serialize};

/// Position and extent of one observable section, in CSS pixels.
///
/// Sections must be listed in **document order** — the active-nav
/// resolution in [`effects::nav`](crate::effects::nav) relies on it for
/// its deterministic last-match-wins tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Distance from the document top to the section top (`offsetTop`).
    pub offset_top: f32,
    /// Rendered height of the section (`offsetHeight`).
    pub offset_height: f32,
}

impl SectionMetrics {
    /// Construct from an `offsetTop` / `offsetHeight` pair.
    #[must_use]
    pub const fn new(offset_top: f32, offset_height: f32) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }
}

/// One consistent reading of the page's scroll geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Current vertical scroll offset (`pageYOffset`).
    pub scroll_y: f32,
    /// Viewport height (`innerHeight`).
    pub viewport_height: f32,
    /// Full document height (`scrollHeight` of the root element).
    pub document_height: f32,
    /// Sections carrying an identifier (the ones nav links can point
    /// at), in document order.
    pub sections: Vec<SectionMetrics>,
}

impl LayoutSnapshot {
    /// Snapshot with the given scroll geometry and no sections.
    #[must_use]
    pub const fn new(
        scroll_y: f32,
        viewport_height: f32,
        document_height: f32,
    ) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
            sections: Vec::new(),
        }
    }

    /// Replace the section list (builder-style, used by tests and the
    /// platform layer).
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<SectionMetrics>) -> Self {
        self.sections = sections;
        self
    }
}
