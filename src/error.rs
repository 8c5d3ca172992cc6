//! Crate-level error types.

use std::fmt;

/// Errors produced by the glint crate.
#[derive(Debug)]
pub enum GlintError {
    /// The host environment has no global `window` object.
    NoWindow,
    /// The host environment has no `document` on the global window.
    NoDocument,
    /// Options JSON parsing/serialization failure.
    OptionsParse(String),
    /// DOM API call failure during wiring (listener registration,
    /// observer construction, element creation).
    Dom(String),
}

impl fmt::Display for GlintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window object"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for GlintError {}
