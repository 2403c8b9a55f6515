//! linkchord - open links with keyboard chords
//!
//! This crate provides the binding store, the chord matcher and the editor
//! session behind the `linkchord` binary.

pub mod binding;
pub mod chord;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod listener;
pub mod matcher;
pub mod opener;
pub mod store;
pub mod tracing;
pub mod winit_adapter;

// Re-export commonly used types
pub use binding::Binding;
pub use chord::{Chord, KeyPress, KeyToken};
pub use config::Settings;
pub use editor::{EditorSession, KeyOutcome, RowId};
pub use listener::ShortcutListener;
pub use opener::LinkOpener;
pub use store::{BindingStore, FileStore, KeyValueStore, MemoryStore};
