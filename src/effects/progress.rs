//! Scroll progress math.

/// Compute the progress-bar width as a percentage of scrollable
/// distance.
///
/// Returns `None` when the document is no taller than the viewport
/// (nothing to scroll); the caller must then leave the bar unmodified.
#[must_use]
pub fn progress_percent(
    scroll_y: f32,
    document_height: f32,
    viewport_height: f32,
) -> Option<f32> {
    if document_height <= viewport_height {
        return None;
    }
    Some(scroll_y / (document_height - viewport_height) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_scenario_quarter_scrolled() {
        // docHeight 3000, viewport 1000, scrollY 500 -> 25%
        assert_eq!(progress_percent(500.0, 3000.0, 1000.0), Some(25.0));
    }

    #[test]
    fn endpoints() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), Some(0.0));
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), Some(100.0));
    }

    #[test]
    fn short_page_leaves_bar_alone() {
        assert!(progress_percent(0.0, 800.0, 1000.0).is_none());
        // Equal heights would divide by zero.
        assert!(progress_percent(0.0, 1000.0, 1000.0).is_none());
    }
}
