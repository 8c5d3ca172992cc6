//! Browser wiring for the effect controller.
//!
//! Compiled for wasm32 targets behind the `web` feature. [`PageEffects`]
//! resolves the markup contract (nav links, sections, hero, progress
//! bar, hover targets), registers DOM listeners plus an
//! `IntersectionObserver` on [`start`](PageEffects::start), and reverses
//! all of it on [`stop`](PageEffects::stop). Every registration is an
//! owned RAII value, so teardown is `Drop`-driven and repeated
//! start/stop cycles leave no residue.
//!
//! ```ignore
//! let mut effects = PageEffects::builder()
//!     .with_hero_selector(".hero")
//!     .build();
//! effects.start()?;
//! // ... page is live ...
//! effects.stop();
//! ```

/// RAII listener registration.
mod listeners;
/// DOM-backed command application.
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub use listeners::EventBinding;
pub use surface::DomSurface;

use crate::controller::EffectController;
use crate::error::GlintError;
use crate::input::PageEvent;
use crate::metrics::{LayoutSnapshot, SectionMetrics};
use crate::options::EffectOptions;
use crate::surface::Surface;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`PageEffects`].
///
/// Selector defaults match a conventional single-page portfolio layout;
/// every part of the markup contract can be overridden.
pub struct PageEffectsBuilder {
    options: EffectOptions,
    anchor_selector: String,
    section_selector: String,
    nav_link_selector: String,
    hero_selector: String,
    progress_id: String,
    hover_selector: String,
}

impl PageEffectsBuilder {
    fn new() -> Self {
        Self {
            options: EffectOptions::default(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            section_selector: "section".into(),
            nav_link_selector: ".nav-links a".into(),
            hero_selector: ".hero".into(),
            progress_id: "scrollProgress".into(),
            hover_selector:
                "a, button, .glass-card, .skill-tag, .project-card, \
                 .coming-soon-card"
                    .into(),
        }
    }

    /// Override the default effect options.
    #[must_use]
    pub fn with_options(mut self, options: EffectOptions) -> Self {
        self.options = options;
        self
    }

    /// Selector for smooth-scroll anchors.
    #[must_use]
    pub fn with_anchor_selector(mut self, selector: impl Into<String>) -> Self {
        self.anchor_selector = selector.into();
        self
    }

    /// Selector for observable (fade-in) sections.
    #[must_use]
    pub fn with_section_selector(
        mut self,
        selector: impl Into<String>,
    ) -> Self {
        self.section_selector = selector.into();
        self
    }

    /// Selector for navigation links.
    #[must_use]
    pub fn with_nav_link_selector(
        mut self,
        selector: impl Into<String>,
    ) -> Self {
        self.nav_link_selector = selector.into();
        self
    }

    /// Selector for the parallax hero region.
    #[must_use]
    pub fn with_hero_selector(mut self, selector: impl Into<String>) -> Self {
        self.hero_selector = selector.into();
        self
    }

    /// Element id of the scroll progress bar.
    #[must_use]
    pub fn with_progress_id(mut self, id: impl Into<String>) -> Self {
        self.progress_id = id.into();
        self
    }

    /// Selector for elements that enlarge the cursor glow on hover.
    #[must_use]
    pub fn with_hover_selector(mut self, selector: impl Into<String>) -> Self {
        self.hover_selector = selector.into();
        self
    }

    /// Consume the builder and produce an unstarted [`PageEffects`].
    #[must_use]
    pub fn build(self) -> PageEffects {
        PageEffects {
            controller: Rc::new(RefCell::new(EffectController::new(
                self.options,
            ))),
            config: self,
            wired: None,
        }
    }
}

// ── Layout probe ─────────────────────────────────────────────────────────

/// Reads one consistent [`LayoutSnapshot`] from the live page.
struct LayoutProbe {
    window: Window,
    root: Option<Element>,
    /// Identified sections, document order (active-nav index space).
    sections: Vec<HtmlElement>,
}

impl LayoutProbe {
    fn snapshot(&self) -> LayoutSnapshot {
        let scroll_y = self.window.page_y_offset().unwrap_or(0.0) as f32;
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let document_height = self
            .root
            .as_ref()
            .map_or(0.0, |root| f64::from(root.scroll_height()))
            as f32;
        let sections = self
            .sections
            .iter()
            .map(|s| {
                SectionMetrics::new(
                    s.offset_top() as f32,
                    s.offset_height() as f32,
                )
            })
            .collect();
        LayoutSnapshot {
            scroll_y,
            viewport_height,
            document_height,
            sections,
        }
    }
}

/// Read metrics, compute commands, apply commands.
fn dispatch(
    controller: &Rc<RefCell<EffectController>>,
    surface: &Rc<RefCell<DomSurface>>,
    probe: &LayoutProbe,
    event: &PageEvent,
) {
    let layout = probe.snapshot();
    let commands = controller.borrow_mut().handle_event(event, &layout);
    surface.borrow_mut().apply_all(&commands);
}

// ── PageEffects ──────────────────────────────────────────────────────────

/// Everything created by one `start()`: listeners, the intersection
/// observer, and the synthetic glow element. Dropping it tears all of
/// it down.
struct Wired {
    /// Listener registrations; each removes itself on drop.
    _bindings: Vec<EventBinding>,
    observer: web_sys::IntersectionObserver,
    /// Kept alive for the observer's lifetime.
    _observer_callback:
        Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    glow: HtmlElement,
}

impl Drop for Wired {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.glow.remove();
    }
}

/// The interaction controller's browser face.
///
/// Construct via [`PageEffects::builder`], then call
/// [`start`](Self::start) at mount and [`stop`](Self::stop) at unmount.
/// The controller (and with it the one-way reveal state) survives a
/// stop/start cycle; listeners and the glow element do not.
pub struct PageEffects {
    config: PageEffectsBuilder,
    controller: Rc<RefCell<EffectController>>,
    wired: Option<Wired>,
}

impl PageEffects {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> PageEffectsBuilder {
        PageEffectsBuilder::new()
    }

    /// Whether the effects are currently wired to the page.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.wired.is_some()
    }

    /// Wire all five behaviors to the current document.
    ///
    /// Idempotent with respect to residue: an already-started instance
    /// is torn down first, so double invocation (e.g. a UI framework's
    /// strict re-invocation checks) never duplicates a listener or the
    /// glow element.
    ///
    /// # Errors
    ///
    /// [`GlintError::NoWindow`] / [`GlintError::NoDocument`] when the
    /// host environment lacks them, [`GlintError::Dom`] when wiring a
    /// listener or creating the glow element fails. Missing page
    /// elements are not errors.
    pub fn start(&mut self) -> Result<(), GlintError> {
        self.stop();

        let window = web_sys::window().ok_or(GlintError::NoWindow)?;
        let document = window.document().ok_or(GlintError::NoDocument)?;

        // Resolve the markup contract. Everything here is optional;
        // absent elements degrade to per-behavior no-ops.
        let sections =
            query_all::<HtmlElement>(&document, &self.config.section_selector);
        let nav_links =
            query_all::<Element>(&document, &self.config.nav_link_selector);
        let anchors =
            query_all::<Element>(&document, &self.config.anchor_selector);
        let hover_targets =
            query_all::<Element>(&document, &self.config.hover_selector);
        let hero = document
            .query_selector(&self.config.hero_selector)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let progress = document
            .get_element_by_id(&self.config.progress_id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());

        // Identified sections drive active-nav tracking; each maps to
        // the nav link whose fragment matches its id, if one exists.
        let mut identified = Vec::new();
        let mut active_links = Vec::new();
        for section in &sections {
            let id = section.id();
            if id.is_empty() {
                continue;
            }
            let link = document
                .query_selector(&format!(
                    "{}[href=\"#{id}\"]",
                    self.config.nav_link_selector
                ))
                .ok()
                .flatten();
            identified.push(section.clone());
            active_links.push(link);
        }

        let glow = create_glow_element(
            &document,
            self.controller.borrow().options().glow.size_px,
        )?;

        let surface = Rc::new(RefCell::new(DomSurface::new(
            document.clone(),
            *self.controller.borrow().options(),
            sections.clone(),
            active_links,
            nav_links,
            hero,
            progress,
            Some(glow.clone()),
        )));
        let probe = Rc::new(LayoutProbe {
            window: window.clone(),
            root: document.document_element(),
            sections: identified,
        });

        // Put every not-yet-revealed section into its suppressed state.
        {
            let commands =
                self.controller.borrow_mut().initial_commands(sections.len());
            surface.borrow_mut().apply_all(&commands);
        }

        let mut bindings = Vec::new();

        // Scroll: parallax hero, progress bar, active nav.
        {
            let (controller, surface, probe) =
                (self.controller.clone(), surface.clone(), probe.clone());
            bindings.push(EventBinding::new(&window, "scroll", move |_| {
                dispatch(&controller, &surface, &probe, &PageEvent::Scroll);
            })?);
        }

        // Pointer: glow follower.
        {
            let (controller, surface, probe) =
                (self.controller.clone(), surface.clone(), probe.clone());
            bindings.push(EventBinding::new(
                &document,
                "mousemove",
                move |event| {
                    let Some(mouse) =
                        event.dyn_ref::<web_sys::MouseEvent>()
                    else {
                        return;
                    };
                    dispatch(
                        &controller,
                        &surface,
                        &probe,
                        &PageEvent::PointerMoved {
                            x: mouse.client_x() as f32,
                            y: mouse.client_y() as f32,
                        },
                    );
                },
            )?);
        }

        // Smooth-scroll anchors.
        for anchor in anchors {
            let (controller, surface, probe) =
                (self.controller.clone(), surface.clone(), probe.clone());
            let href_source = anchor.clone();
            bindings.push(EventBinding::new(&anchor, "click", move |event| {
                let Some(href) = href_source.get_attribute("href") else {
                    return;
                };
                let Some(fragment) = href.strip_prefix('#') else {
                    return;
                };
                event.prevent_default();
                dispatch(
                    &controller,
                    &surface,
                    &probe,
                    &PageEvent::AnchorActivated {
                        fragment: fragment.to_owned(),
                    },
                );
            })?);
        }

        // Hover enlargement for interactive elements.
        for target in hover_targets {
            let (controller, surface, probe) =
                (self.controller.clone(), surface.clone(), probe.clone());
            bindings.push(EventBinding::new(&target, "mouseenter", move |_| {
                dispatch(
                    &controller,
                    &surface,
                    &probe,
                    &PageEvent::HoverChanged { entered: true },
                );
            })?);
            let (controller, surface, probe) =
                (self.controller.clone(), surface.clone(), probe.clone());
            bindings.push(EventBinding::new(&target, "mouseleave", move |_| {
                dispatch(
                    &controller,
                    &surface,
                    &probe,
                    &PageEvent::HoverChanged { entered: false },
                );
            })?);
        }

        // Intersection observer for section reveals.
        let (observer, observer_callback) = build_observer(
            &sections,
            self.controller.clone(),
            surface.clone(),
            probe.clone(),
            self.controller.borrow().options().reveal.threshold,
            self.controller.borrow().options().reveal.bottom_margin_px,
        )?;
        for section in &sections {
            observer.observe(section);
        }

        log::debug!(
            "effects started: {} sections, {} bindings",
            sections.len(),
            bindings.len()
        );

        self.wired = Some(Wired {
            _bindings: bindings,
            observer,
            _observer_callback: observer_callback,
            glow,
        });
        Ok(())
    }

    /// Tear down every listener, the observer, and the glow element.
    ///
    /// Safe to call when not started, and safe to call immediately
    /// after [`start`](Self::start).
    pub fn stop(&mut self) {
        if self.wired.take().is_some() {
            log::debug!("effects stopped");
        }
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        self.stop();
    }
}

// ── Wiring helpers ───────────────────────────────────────────────────────

/// Query all matches of `selector`, keeping those castable to `T`.
fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Create the (hidden) glow follower element and append it to the body.
fn create_glow_element(
    document: &Document,
    size_px: f32,
) -> Result<HtmlElement, GlintError> {
    let glow = document
        .create_element("div")
        .map_err(|_| GlintError::Dom("failed to create glow element".into()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GlintError::Dom("glow element is not an html element".into()))?;
    glow.style().set_css_text(&format!(
        "position: fixed; \
         width: {size_px}px; \
         height: {size_px}px; \
         border-radius: 50%; \
         background: radial-gradient(circle, \
           rgba(0, 245, 255, 0.3) 0%, transparent 70%); \
         pointer-events: none; \
         z-index: 9999; \
         opacity: 0; \
         transition: transform 0.15s ease, opacity 0.2s ease; \
         transform: translate(-50%, -50%);"
    ));
    let body = document
        .body()
        .ok_or_else(|| GlintError::Dom("document has no body".into()))?;
    let _ = body
        .append_child(&glow)
        .map_err(|_| GlintError::Dom("failed to append glow element".into()))?;
    Ok(glow)
}

/// Build the reveal observer. The callback reveals a section on its
/// first threshold crossing and unobserves it; re-delivered entries for
/// revealed sections are ignored by the controller.
fn build_observer(
    sections: &[HtmlElement],
    controller: Rc<RefCell<EffectController>>,
    surface: Rc<RefCell<DomSurface>>,
    probe: Rc<LayoutProbe>,
    threshold: f32,
    bottom_margin_px: f32,
) -> Result<
    (
        web_sys::IntersectionObserver,
        Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    ),
    GlintError,
> {
    let observed: Vec<HtmlElement> = sections.to_vec();
    let callback = Closure::<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >::new(
        move |entries: js_sys::Array,
              observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) =
                    entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = observed.iter().position(|s| {
                    AsRef::<JsValue>::as_ref(s)
                        == AsRef::<JsValue>::as_ref(&target)
                }) else {
                    continue;
                };
                dispatch(
                    &controller,
                    &surface,
                    &probe,
                    &PageEvent::SectionIntersected { index },
                );
                // Revealed sections never revert; stop watching them.
                observer.unobserve(&target);
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(f64::from(threshold)));
    init.set_root_margin(&format!("0px 0px -{bottom_margin_px}px 0px"));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(|_| {
        GlintError::Dom("failed to construct intersection observer".into())
    })?;
    Ok((observer, callback))
}

// ── Wasm entry points ────────────────────────────────────────────────────

/// Running effects handed to a host page; call
/// [`unmount`](EffectsHandle::unmount) at teardown.
#[wasm_bindgen]
pub struct EffectsHandle {
    effects: PageEffects,
}

#[wasm_bindgen]
impl EffectsHandle {
    /// Stop the effects and discard the wiring.
    pub fn unmount(mut self) {
        self.effects.stop();
    }
}

/// Wire the default effect set to the current document and return a
/// handle for teardown.
///
/// # Errors
///
/// Fails when the host environment has no window/document or DOM wiring
/// fails; see [`PageEffects::start`].
#[wasm_bindgen]
pub fn mount() -> Result<EffectsHandle, JsValue> {
    init_logging();
    let mut effects = PageEffects::builder().build();
    effects
        .start()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(EffectsHandle { effects })
}

/// Like [`mount`], with effect options supplied as JSON (missing fields
/// use defaults).
///
/// # Errors
///
/// Fails on malformed options JSON or when wiring fails; see [`mount`].
#[wasm_bindgen]
pub fn mount_with_options(json: &str) -> Result<EffectsHandle, JsValue> {
    init_logging();
    let options = EffectOptions::from_json(json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut effects =
        PageEffects::builder().with_options(options).build();
    effects
        .start()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(EffectsHandle { effects })
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Repeat initialization (e.g. mount after unmount) is fine.
    let _ = console_log::init_with_level(log::Level::Debug);
}
