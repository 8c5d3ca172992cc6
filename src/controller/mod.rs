//! Converts page events into effect commands.
//!
//! The `EffectController` owns all transient effect state (per-section
//! reveal phases, glow tracking) and is the only thing that sits
//! between raw page events and the [`Surface`](crate::Surface) that
//! applies visual state. Every behavior is a pure read of the
//! [`LayoutSnapshot`](crate::LayoutSnapshot); the controller holds no
//! element references and never touches the DOM.

/// The controller's output vocabulary.
pub mod command;

use glam::Vec2;

pub use command::EffectCommand;

use crate::effects::{glow::GlowState, nav, parallax, progress, reveal};
use crate::input::PageEvent;
use crate::metrics::LayoutSnapshot;
use crate::options::EffectOptions;

/// Converts [`PageEvent`]s into [`EffectCommand`]s.
///
/// # Usage
///
/// ```
/// use glint::{EffectController, EffectOptions, LayoutSnapshot, PageEvent};
///
/// let mut controller = EffectController::new(EffectOptions::default());
/// let layout = LayoutSnapshot::new(0.0, 900.0, 3000.0);
/// for cmd in controller.handle_event(&PageEvent::Scroll, &layout) {
///     // surface.apply(&cmd)
/// }
/// ```
pub struct EffectController {
    /// Effect constants.
    options: EffectOptions,
    /// Per-section one-way reveal phases.
    reveal: reveal::RevealTracker,
    /// Glow follower tracking.
    glow: GlowState,
}

impl EffectController {
    /// Create a controller with the given options and no sections
    /// tracked yet; the reveal tracker grows from
    /// [`initial_commands`](Self::initial_commands) and intersection
    /// events.
    #[must_use]
    pub fn new(options: EffectOptions) -> Self {
        Self {
            options,
            reveal: reveal::RevealTracker::default(),
            glow: GlowState::new(),
        }
    }

    /// Read-only access to the effect options.
    #[must_use]
    pub const fn options(&self) -> &EffectOptions {
        &self.options
    }

    /// Current glow follower state (position, scale, visibility).
    #[must_use]
    pub const fn glow(&self) -> &GlowState {
        &self.glow
    }

    /// Current reveal phase of a section.
    #[must_use]
    pub fn reveal_phase(&self, index: usize) -> reveal::RevealPhase {
        self.reveal.phase(index)
    }

    /// Commands that put the page into its starting visual state:
    /// one `SuppressSection` per not-yet-revealed section.
    ///
    /// `section_count` is the number of observable sections on the page
    /// (a superset of the identified sections carried in the layout
    /// snapshot). Called once at wiring time; calling it again (e.g. on
    /// a restart) re-suppresses only sections that never revealed.
    pub fn initial_commands(
        &mut self,
        section_count: usize,
    ) -> Vec<EffectCommand> {
        self.reveal.ensure_len(section_count);
        self.reveal
            .suppressed_indices()
            .map(|index| EffectCommand::SuppressSection { index })
            .collect()
    }

    /// Process one page event against the current layout and return the
    /// visual mutations it implies.
    pub fn handle_event(
        &mut self,
        event: &PageEvent,
        layout: &LayoutSnapshot,
    ) -> Vec<EffectCommand> {
        match event {
            PageEvent::Scroll => self.handle_scroll(layout),
            PageEvent::PointerMoved { x, y } => {
                self.glow.track(Vec2::new(*x, *y));
                vec![EffectCommand::MoveGlow {
                    pos: self.glow.pos(),
                }]
            }
            PageEvent::HoverChanged { entered } => {
                self.glow
                    .set_hovering(*entered, self.options.glow.hover_scale);
                vec![EffectCommand::SetGlowScale {
                    scale: self.glow.scale(),
                }]
            }
            PageEvent::AnchorActivated { fragment } => {
                vec![EffectCommand::ScrollToFragment {
                    fragment: fragment.clone(),
                }]
            }
            PageEvent::SectionIntersected { index } => {
                self.handle_intersection(*index)
            }
        }
    }

    /// One scroll pass: hero parallax, progress bar, active nav.
    ///
    /// Each sub-behavior degrades independently — a `None` from the
    /// hero or progress math simply emits no command for it.
    fn handle_scroll(&self, layout: &LayoutSnapshot) -> Vec<EffectCommand> {
        let mut commands = Vec::with_capacity(3);

        if let Some(frame) = parallax::hero_frame(
            layout.scroll_y,
            layout.viewport_height,
            &self.options.parallax,
        ) {
            commands.push(EffectCommand::SetHeroFrame {
                translate_y: frame.translate_y,
                opacity: frame.opacity,
            });
        }

        if let Some(percent) = progress::progress_percent(
            layout.scroll_y,
            layout.document_height,
            layout.viewport_height,
        ) {
            commands.push(EffectCommand::SetProgress { percent });
        }

        commands.push(EffectCommand::SetActiveNav {
            index: nav::active_section(
                layout.scroll_y,
                &layout.sections,
                self.options.nav.lookahead_px,
            ),
        });

        commands
    }

    /// Intersection callback: reveal on the first crossing only.
    fn handle_intersection(&mut self, index: usize) -> Vec<EffectCommand> {
        self.reveal.ensure_len(index + 1);
        if self.reveal.mark_intersected(index) {
            log::debug!("section {index} revealed");
            vec![EffectCommand::RevealSection { index }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SectionMetrics;

    fn controller() -> EffectController {
        EffectController::new(EffectOptions::default())
    }

    fn layout() -> LayoutSnapshot {
        LayoutSnapshot::new(0.0, 1000.0, 3000.0).with_sections(vec![
            SectionMetrics::new(800.0, 400.0),
            SectionMetrics::new(1200.0, 600.0),
        ])
    }

    #[test]
    fn scroll_emits_hero_progress_and_nav() {
        let mut ctrl = controller();
        let mut layout = layout();
        layout.scroll_y = 500.0;

        let commands = ctrl.handle_event(&PageEvent::Scroll, &layout);
        assert_eq!(
            commands,
            vec![
                EffectCommand::SetHeroFrame {
                    translate_y: 250.0,
                    opacity: 1.0 - 500.0 / 700.0,
                },
                EffectCommand::SetProgress { percent: 25.0 },
                EffectCommand::SetActiveNav { index: None },
            ]
        );
    }

    #[test]
    fn scroll_past_viewport_freezes_hero() {
        let mut ctrl = controller();
        let mut layout = layout();
        layout.scroll_y = 1500.0;

        let commands = ctrl.handle_event(&PageEvent::Scroll, &layout);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, EffectCommand::SetHeroFrame { .. })));
        // Progress and nav still update.
        assert!(commands
            .iter()
            .any(|c| matches!(c, EffectCommand::SetProgress { .. })));
        assert!(commands
            .contains(&EffectCommand::SetActiveNav { index: Some(1) }));
    }

    #[test]
    fn short_page_skips_progress() {
        let mut ctrl = controller();
        let layout = LayoutSnapshot::new(0.0, 1000.0, 800.0);
        let commands = ctrl.handle_event(&PageEvent::Scroll, &layout);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, EffectCommand::SetProgress { .. })));
    }

    #[test]
    fn active_nav_follows_scroll_position() {
        let mut ctrl = controller();
        let mut layout = layout();

        // scrollY 750 is inside the first section's range (680, 1080].
        layout.scroll_y = 750.0;
        let commands = ctrl.handle_event(&PageEvent::Scroll, &layout);
        assert!(commands
            .contains(&EffectCommand::SetActiveNav { index: Some(0) }));

        // scrollY 1500 is inside the second section's range (1080, 1680].
        layout.scroll_y = 1500.0;
        let commands = ctrl.handle_event(&PageEvent::Scroll, &layout);
        assert!(commands
            .contains(&EffectCommand::SetActiveNav { index: Some(1) }));
    }

    #[test]
    fn intersection_reveals_exactly_once() {
        let mut ctrl = controller();
        let layout = layout();
        let _ = ctrl.initial_commands(2);

        let event = PageEvent::SectionIntersected { index: 0 };
        assert_eq!(
            ctrl.handle_event(&event, &layout),
            vec![EffectCommand::RevealSection { index: 0 }]
        );
        // Re-delivered intersection: no command, state undisturbed.
        assert!(ctrl.handle_event(&event, &layout).is_empty());
        assert_eq!(
            ctrl.reveal_phase(0),
            crate::effects::RevealPhase::Revealed
        );
    }

    #[test]
    fn initial_commands_suppress_only_unrevealed_sections() {
        let mut ctrl = controller();
        let layout = layout();

        assert_eq!(
            ctrl.initial_commands(2),
            vec![
                EffectCommand::SuppressSection { index: 0 },
                EffectCommand::SuppressSection { index: 1 },
            ]
        );

        let _ = ctrl
            .handle_event(&PageEvent::SectionIntersected { index: 0 }, &layout);

        // A restart must not re-suppress the revealed section.
        assert_eq!(
            ctrl.initial_commands(2),
            vec![EffectCommand::SuppressSection { index: 1 }]
        );
    }

    #[test]
    fn pointer_move_shows_and_positions_glow() {
        let mut ctrl = controller();
        let layout = layout();
        assert!(!ctrl.glow().visible());

        let commands = ctrl.handle_event(
            &PageEvent::PointerMoved { x: 120.0, y: 340.0 },
            &layout,
        );
        assert_eq!(
            commands,
            vec![EffectCommand::MoveGlow {
                pos: Vec2::new(120.0, 340.0)
            }]
        );
        assert!(ctrl.glow().visible());
    }

    #[test]
    fn hover_enter_and_leave_rescale_glow() {
        let mut ctrl = controller();
        let layout = layout();

        let enter = ctrl
            .handle_event(&PageEvent::HoverChanged { entered: true }, &layout);
        assert_eq!(enter, vec![EffectCommand::SetGlowScale { scale: 2.0 }]);

        let leave = ctrl
            .handle_event(&PageEvent::HoverChanged { entered: false }, &layout);
        assert_eq!(leave, vec![EffectCommand::SetGlowScale { scale: 1.0 }]);
    }

    #[test]
    fn anchor_activation_requests_smooth_scroll() {
        let mut ctrl = controller();
        let commands = ctrl.handle_event(
            &PageEvent::AnchorActivated {
                fragment: "about".into(),
            },
            &layout(),
        );
        assert_eq!(
            commands,
            vec![EffectCommand::ScrollToFragment {
                fragment: "about".into()
            }]
        );
    }
}
