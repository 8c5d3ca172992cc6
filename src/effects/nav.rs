//! Active-section resolution for nav-link highlighting.

use crate::metrics::SectionMetrics;

/// Index of the section whose nav link should carry the active mark.
///
/// A section qualifies when `top < scroll_y <= bottom`, where
/// `top = offset_top - lookahead_px` and `bottom = top + offset_height`.
/// Sections are evaluated in document order and the last qualifying one
/// wins, so when ranges overlap the lowest section on the page takes
/// the highlight. Returns `None` when no section qualifies (all links
/// are cleared).
#[must_use]
pub fn active_section(
    scroll_y: f32,
    sections: &[SectionMetrics],
    lookahead_px: f32,
) -> Option<usize> {
    let mut active = None;
    for (index, section) in sections.iter().enumerate() {
        let top = section.offset_top - lookahead_px;
        let bottom = top + section.offset_height;
        if scroll_y > top && scroll_y <= bottom {
            active = Some(index);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKAHEAD: f32 = 120.0;

    fn page() -> Vec<SectionMetrics> {
        vec![
            SectionMetrics::new(800.0, 400.0),
            SectionMetrics::new(1200.0, 600.0),
            SectionMetrics::new(1800.0, 500.0),
        ]
    }

    #[test]
    fn spec_scenario_inside_first_range() {
        // offsetTop 800, height 400, scrollY 750 -> range (680, 1080]
        let sections = vec![SectionMetrics::new(800.0, 400.0)];
        assert_eq!(active_section(750.0, &sections, LOOKAHEAD), Some(0));
    }

    #[test]
    fn range_bounds_are_half_open() {
        let sections = vec![SectionMetrics::new(800.0, 400.0)];
        // top is exclusive, bottom inclusive: (680, 1080]
        assert_eq!(active_section(680.0, &sections, LOOKAHEAD), None);
        assert_eq!(active_section(680.5, &sections, LOOKAHEAD), Some(0));
        assert_eq!(active_section(1080.0, &sections, LOOKAHEAD), Some(0));
        assert_eq!(active_section(1080.5, &sections, LOOKAHEAD), None);
    }

    #[test]
    fn above_all_sections_clears() {
        assert_eq!(active_section(0.0, &page(), LOOKAHEAD), None);
    }

    #[test]
    fn overlap_resolves_to_later_section() {
        // First range (680, 1080], second (1080, 1680] — make them
        // overlap by stretching the first.
        let sections = vec![
            SectionMetrics::new(800.0, 900.0),  // (680, 1580]
            SectionMetrics::new(1200.0, 600.0), // (1080, 1680]
        ];
        assert_eq!(active_section(1500.0, &sections, LOOKAHEAD), Some(1));
        // Only the first qualifies below the overlap.
        assert_eq!(active_section(1000.0, &sections, LOOKAHEAD), Some(0));
    }

    #[test]
    fn exactly_one_section_active_per_offset() {
        // Scan a dense range of offsets: the result is always a single
        // index or none, never an out-of-range index.
        let sections = page();
        for step in 0..500 {
            let s = step as f32 * 5.0;
            if let Some(idx) = active_section(s, &sections, LOOKAHEAD) {
                assert!(idx < sections.len());
            }
        }
    }
}
