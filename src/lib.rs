// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Float comparison: effect math compares against 0.0, 1.0, etc. in tests
#![allow(clippy::float_cmp)]
// Layout metric casts (i32/f64 -> f32) are intentional and safe
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven interaction effects for single-page sites.
//!
//! Glint wires five cosmetic behaviors to browser events: smooth-scroll
//! navigation, fade-in-on-scroll section reveals, a parallax hero, a
//! scroll progress bar with active-nav highlighting, and a cursor glow
//! follower.
//!
//! # Key entry points
//!
//! - [`controller::EffectController`] - converts page events into effect
//!   commands
//! - [`input::PageEvent`] - the platform-agnostic event vocabulary
//! - [`options::EffectOptions`] - runtime configuration (parallax, reveal,
//!   nav, glow constants)
//! - [`surface::Surface`] - the seam through which commands reach a
//!   presentation layer
//!
//! # Architecture
//!
//! All effect arithmetic lives in pure functions under [`effects`],
//! driven by an [`EffectController`](controller::EffectController) that
//! owns the only mutable state (reveal phases, glow tracking). Event
//! handlers reduce to "read metrics, compute commands, apply commands":
//! the platform layer feeds [`PageEvent`](input::PageEvent)s plus a
//! [`LayoutSnapshot`](metrics::LayoutSnapshot) in and applies the
//! resulting [`EffectCommand`](controller::EffectCommand)s out.
//!
//! With the `web` feature enabled (wasm32 targets), the `dom` module
//! supplies the real browser wiring: `dom::PageEffects` registers DOM
//! listeners and an `IntersectionObserver` on `start()` and reverses all
//! of it on `stop()`.

pub mod controller;
pub mod effects;
pub mod error;
pub mod input;
pub mod metrics;
pub mod options;
pub mod surface;

#[cfg(feature = "web")]
pub mod dom;

pub use controller::{EffectCommand, EffectController};
pub use error::GlintError;
pub use input::PageEvent;
pub use metrics::{LayoutSnapshot, SectionMetrics};
pub use options::EffectOptions;
pub use surface::Surface;
