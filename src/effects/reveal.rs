//! One-way section reveal tracking.
//!
//! Each section is `Suppressed` until its first viewport intersection,
//! then `Revealed` forever. The transition is terminal: scrolling a
//! revealed section back out of view never re-suppresses it.

/// Visibility phase of one observable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Transparent and vertically offset; awaiting first intersection.
    #[default]
    Suppressed,
    /// Fully opaque at rest. Terminal.
    Revealed,
}

/// Per-section reveal phases, indexed in document order.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    phases: Vec<RevealPhase>,
}

impl RevealTracker {
    /// Tracker for `count` sections, all suppressed.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            phases: vec![RevealPhase::Suppressed; count],
        }
    }

    /// Number of tracked sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether no sections are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Current phase of a section; out-of-range indices read as
    /// `Revealed` so stale observer callbacks cannot re-suppress
    /// anything.
    #[must_use]
    pub fn phase(&self, index: usize) -> RevealPhase {
        self.phases
            .get(index)
            .copied()
            .unwrap_or(RevealPhase::Revealed)
    }

    /// Grow the tracker to cover at least `count` sections (new entries
    /// start suppressed). Never shrinks.
    pub fn ensure_len(&mut self, count: usize) {
        if count > self.phases.len() {
            self.phases.resize(count, RevealPhase::Suppressed);
        }
    }

    /// Record an intersection for a section.
    ///
    /// Returns `true` only on the `Suppressed -> Revealed` edge; repeat
    /// intersections of a revealed section return `false`.
    pub fn mark_intersected(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase @ RevealPhase::Suppressed) => {
                *phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Indices still awaiting their reveal.
    pub fn suppressed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.phases
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == RevealPhase::Suppressed)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_exactly_once() {
        let mut tracker = RevealTracker::new(3);
        assert_eq!(tracker.phase(1), RevealPhase::Suppressed);
        assert!(tracker.mark_intersected(1));
        assert_eq!(tracker.phase(1), RevealPhase::Revealed);
        // Second intersection is not an edge.
        assert!(!tracker.mark_intersected(1));
        assert_eq!(tracker.phase(1), RevealPhase::Revealed);
    }

    #[test]
    fn reveal_never_reverts() {
        let mut tracker = RevealTracker::new(1);
        assert!(tracker.mark_intersected(0));
        // Growing or re-marking must not disturb the revealed state.
        tracker.ensure_len(4);
        assert_eq!(tracker.phase(0), RevealPhase::Revealed);
        assert_eq!(tracker.phase(3), RevealPhase::Suppressed);
    }

    #[test]
    fn out_of_range_is_inert() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.mark_intersected(10));
        assert_eq!(tracker.phase(10), RevealPhase::Revealed);
    }

    #[test]
    fn suppressed_indices_shrink_as_sections_reveal() {
        let mut tracker = RevealTracker::new(3);
        assert_eq!(
            tracker.suppressed_indices().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(tracker.mark_intersected(1));
        assert_eq!(
            tracker.suppressed_indices().collect::<Vec<_>>(),
            vec![0, 2]
        );
    }
}
