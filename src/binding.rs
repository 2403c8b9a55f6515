//! Binding struct pairing a chord with the URL it opens

use serde::{Deserialize, Serialize};

use crate::chord::Chord;

/// A link and the chord that opens it
///
/// Serializes as `{"link": "...", "shortcut": ["control", "k"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Target URL, also used to find the binding again when editing
    pub link: String,
    /// Chord that triggers the link; empty means not yet configured
    pub shortcut: Chord,
}

impl Binding {
    pub fn new(link: impl Into<String>, shortcut: Chord) -> Self {
        Self {
            link: link.into(),
            shortcut,
        }
    }

    /// A binding with no link and no chord, as created for a fresh row
    pub fn blank() -> Self {
        Self::new(String::new(), Chord::default())
    }

    /// Check if a chord has been recorded for this binding
    pub fn is_configured(&self) -> bool {
        !self.shortcut.is_empty()
    }
}
