//! Core types for chords: KeyToken, Chord, KeyPress
//!
//! A chord is the set of tokens held together when a shortcut fires.
//! Tokens are plain lowercase strings so that whatever a host reports as
//! the key name (`"k"`, `"arrowup"`, `"f5"`) can be stored and compared
//! without a fixed key table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Token emitted when shift is held
pub const SHIFT: &str = "shift";
/// Token emitted when control is held
pub const CONTROL: &str = "control";
/// Token emitted when alt/option is held
pub const ALT: &str = "alt";

/// A normalized key token: a modifier name or a lowercased key name
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct KeyToken(String);

impl KeyToken {
    /// Create a token, lowercasing the key name
    pub fn new(name: &str) -> Self {
        KeyToken(name.to_lowercase())
    }

    pub fn shift() -> Self {
        KeyToken(SHIFT.to_string())
    }

    pub fn control() -> Self {
        KeyToken(CONTROL.to_string())
    }

    pub fn alt() -> Self {
        KeyToken(ALT.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token with its first character uppercased (`"shift"` → `"Shift"`)
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for KeyToken {
    fn from(name: String) -> Self {
        KeyToken::new(&name)
    }
}

impl From<&str> for KeyToken {
    fn from(name: &str) -> Self {
        KeyToken::new(name)
    }
}

impl From<KeyToken> for String {
    fn from(token: KeyToken) -> Self {
        token.0
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single key-press event as reported by the host
///
/// Only shift, control and alt are tracked. Meta/cmd is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Key name as reported by the host (`"K"`, `"Enter"`, `"Shift"`)
    pub key: Option<String>,
}

impl KeyPress {
    /// Create a key press from individual flags
    pub fn new(shift: bool, control: bool, alt: bool, key: Option<&str>) -> Self {
        Self {
            shift,
            control,
            alt,
            key: key.map(str::to_string),
        }
    }

    /// Create a key press with no modifiers
    pub fn key(key: &str) -> Self {
        Self::new(false, false, false, Some(key))
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_control(mut self) -> Self {
        self.control = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Errors from parsing a chord string like `"control+shift+k"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    Empty,
    EmptyToken(String),
}

impl fmt::Display for ChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordError::Empty => write!(f, "Chord is empty"),
            ChordError::EmptyToken(s) => write!(f, "Empty key in chord: {}", s),
        }
    }
}

impl std::error::Error for ChordError {}

/// An unordered, deduplicated set of key tokens
///
/// Tokens keep the order they were first seen in so labels read naturally
/// (`Shift Control K`), but equality and matching ignore order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<KeyToken>", into = "Vec<KeyToken>")]
pub struct Chord {
    tokens: Vec<KeyToken>,
}

impl Chord {
    /// Build a chord from tokens, dropping duplicates (first occurrence wins)
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<KeyToken>,
    {
        let mut chord = Chord::default();
        for token in tokens {
            chord.insert(token.into());
        }
        chord
    }

    /// Derive the pressed-token set for a key press
    ///
    /// Modifiers come first in fixed order (shift, control, alt), then the
    /// lowercased key name. Pressing a modifier on its own reports it both as
    /// a flag and as the key, which collapses to one token.
    pub fn from_key_press(press: &KeyPress) -> Self {
        let mut chord = Chord::default();
        if press.shift {
            chord.insert(KeyToken::shift());
        }
        if press.control {
            chord.insert(KeyToken::control());
        }
        if press.alt {
            chord.insert(KeyToken::alt());
        }
        if let Some(key) = press.key.as_deref().filter(|k| !k.is_empty()) {
            chord.insert(KeyToken::new(key));
        }
        chord
    }

    fn insert(&mut self, token: KeyToken) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == token)
    }

    /// An empty chord means "not yet configured"
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if every token of this chord is also in `pressed`
    ///
    /// Extra pressed tokens are ignored. The empty chord is a subset of
    /// everything.
    pub fn is_subset_of(&self, pressed: &Chord) -> bool {
        self.tokens.iter().all(|t| pressed.tokens.contains(t))
    }

    /// Human-readable label (`"Shift A"`), or None for an empty chord
    pub fn label(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(
                self.tokens
                    .iter()
                    .map(KeyToken::label)
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        }
    }

    /// Label, or `placeholder` when the chord is empty
    pub fn label_or(&self, placeholder: &str) -> String {
        self.label().unwrap_or_else(|| placeholder.to_string())
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl Eq for Chord {}

impl From<Vec<KeyToken>> for Chord {
    fn from(tokens: Vec<KeyToken>) -> Self {
        Chord::from_tokens(tokens)
    }
}

impl From<Chord> for Vec<KeyToken> {
    fn from(chord: Chord) -> Self {
        chord.tokens
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or_default())
    }
}

/// Parse a chord like `"ctrl+shift+k"` or `"Control K"`
///
/// Accepts `+` or whitespace as separators and the usual modifier aliases.
/// The plus key itself is written as a trailing `+` (`"ctrl++"`) or `plus`.
impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ChordError::Empty);
        }

        let (body, plus_key) = match trimmed.strip_suffix('+') {
            Some(rest) => {
                let rest = rest.trim_end();
                if rest.is_empty() {
                    ("", true)
                } else if let Some(mods) = rest.strip_suffix('+') {
                    (mods, true)
                } else if rest.len() < trimmed.len() - 1 {
                    // "Control +": the plus follows whitespace
                    (rest, true)
                } else {
                    return Err(ChordError::EmptyToken(s.to_string()));
                }
            }
            None => (trimmed, false),
        };

        let mut chord = Chord::default();
        if !body.is_empty() {
            let parts: Vec<&str> = if body.contains('+') {
                body.split('+').map(str::trim).collect()
            } else {
                body.split_whitespace().collect()
            };

            for part in parts {
                if part.is_empty() {
                    return Err(ChordError::EmptyToken(s.to_string()));
                }
                let token = match part.to_lowercase().as_str() {
                    "ctrl" | "control" => KeyToken::control(),
                    "shift" => KeyToken::shift(),
                    "alt" | "option" | "opt" => KeyToken::alt(),
                    "space" => KeyToken::new(" "),
                    "plus" => KeyToken::new("+"),
                    other => KeyToken::new(other),
                };
                chord.insert(token);
            }
        }
        if plus_key {
            chord.insert(KeyToken::new("+"));
        }

        Ok(chord)
    }
}
