//! Input handling: the platform-agnostic page events fed into the
//! effect controller.

/// Platform-agnostic page events.
pub mod event;

pub use event::PageEvent;
