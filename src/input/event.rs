/// Platform-agnostic page events.
///
/// These are fed into an [`EffectController`](crate::EffectController)
/// which converts them into [`EffectCommand`](crate::EffectCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// let commands = controller.handle_event(
///     &PageEvent::PointerMoved { x: 100.0, y: 200.0 },
///     &layout,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The viewport scrolled; current geometry is in the accompanying
    /// [`LayoutSnapshot`](crate::LayoutSnapshot).
    Scroll,
    /// Pointer moved to absolute viewport position.
    PointerMoved {
        /// Horizontal position in CSS pixels (`clientX`).
        x: f32,
        /// Vertical position in CSS pixels (`clientY`).
        y: f32,
    },
    /// Pointer entered (`true`) or left (`false`) an interactive element.
    HoverChanged {
        /// `true` on enter, `false` on leave.
        entered: bool,
    },
    /// An in-page anchor was activated (its default jump already
    /// cancelled by the platform layer).
    AnchorActivated {
        /// Fragment identifier without the leading `#`.
        fragment: String,
    },
    /// A section crossed the reveal visibility threshold.
    SectionIntersected {
        /// Index of the section in document order.
        index: usize,
    },
}
