//! [`Surface`] implementation over live DOM elements.

use web_sys::{Document, Element, HtmlElement};

use crate::controller::EffectCommand;
use crate::options::EffectOptions;
use crate::surface::Surface;

/// Applies effect commands to cached element handles.
///
/// Every handle is optional or may be an empty list: a command whose
/// element is absent from the page is dropped silently, so each
/// behavior degrades independently (a missing progress bar never blocks
/// the parallax hero).
pub struct DomSurface {
    document: Document,
    options: EffectOptions,
    /// All observable sections, document order. Index space of
    /// `SuppressSection` / `RevealSection`.
    sections: Vec<HtmlElement>,
    /// Nav link per identified section, document order. Index space of
    /// `SetActiveNav`. `None` where no link points at the section.
    active_links: Vec<Option<Element>>,
    /// Every nav link, for the clearing pass.
    nav_links: Vec<Element>,
    hero: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    glow: Option<HtmlElement>,
}

impl DomSurface {
    /// Bundle the element handles the wiring layer resolved.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        document: Document,
        options: EffectOptions,
        sections: Vec<HtmlElement>,
        active_links: Vec<Option<Element>>,
        nav_links: Vec<Element>,
        hero: Option<HtmlElement>,
        progress: Option<HtmlElement>,
        glow: Option<HtmlElement>,
    ) -> Self {
        Self {
            document,
            options,
            sections,
            active_links,
            nav_links,
            hero,
            progress,
            glow,
        }
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        let _ = el.style().set_property(property, value);
    }

    fn suppress_section(&self, index: usize) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        let reveal = &self.options.reveal;
        Self::set_style(section, "opacity", "0");
        Self::set_style(
            section,
            "transform",
            &format!("translateY({}px)", reveal.offset_px),
        );
        Self::set_style(
            section,
            "transition",
            &format!(
                "opacity {secs}s ease, transform {secs}s ease",
                secs = reveal.transition_secs
            ),
        );
    }

    fn reveal_section(&self, index: usize) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        Self::set_style(section, "opacity", "1");
        Self::set_style(section, "transform", "translateY(0)");
    }

    fn set_hero_frame(&self, translate_y: f32, opacity: f32) {
        let Some(hero) = &self.hero else { return };
        Self::set_style(
            hero,
            "transform",
            &format!("translateY({translate_y}px)"),
        );
        Self::set_style(hero, "opacity", &opacity.to_string());
    }

    fn set_progress(&self, percent: f32) {
        let Some(progress) = &self.progress else { return };
        Self::set_style(progress, "width", &format!("{percent}%"));
    }

    fn set_active_nav(&self, index: Option<usize>) {
        for link in &self.nav_links {
            let _ = link.class_list().remove_1("active");
        }
        let Some(link) = index
            .and_then(|i| self.active_links.get(i))
            .and_then(Option::as_ref)
        else {
            return;
        };
        let _ = link.class_list().add_1("active");
    }

    fn move_glow(&self, x: f32, y: f32) {
        let Some(glow) = &self.glow else { return };
        Self::set_style(glow, "left", &format!("{x}px"));
        Self::set_style(glow, "top", &format!("{y}px"));
        Self::set_style(glow, "opacity", "1");
    }

    fn set_glow_scale(&self, scale: f32) {
        let Some(glow) = &self.glow else { return };
        // Keep the center anchor while scaling.
        Self::set_style(
            glow,
            "transform",
            &format!("translate(-50%, -50%) scale({scale})"),
        );
    }

    fn scroll_to_fragment(&self, fragment: &str) {
        let Some(target) = self.document.get_element_by_id(fragment) else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

impl Surface for DomSurface {
    fn apply(&mut self, command: &EffectCommand) {
        match command {
            EffectCommand::SuppressSection { index } => {
                self.suppress_section(*index);
            }
            EffectCommand::RevealSection { index } => {
                self.reveal_section(*index);
            }
            EffectCommand::SetHeroFrame {
                translate_y,
                opacity,
            } => self.set_hero_frame(*translate_y, *opacity),
            EffectCommand::SetProgress { percent } => {
                self.set_progress(*percent);
            }
            EffectCommand::SetActiveNav { index } => {
                self.set_active_nav(*index);
            }
            EffectCommand::MoveGlow { pos } => self.move_glow(pos.x, pos.y),
            EffectCommand::SetGlowScale { scale } => {
                self.set_glow_scale(*scale);
            }
            EffectCommand::ScrollToFragment { fragment } => {
                self.scroll_to_fragment(fragment);
            }
        }
    }
}
