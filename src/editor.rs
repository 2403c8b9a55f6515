//! Binding editor session
//!
//! Holds the rows shown by an editor UI and the single "listening" pointer.
//! Rows carry a generated [`RowId`]; the link is just a field, so renaming a
//! link never changes which row a control belongs to.
//!
//! Every mutation reads the stored list, edits it, and writes it back. Rows
//! are a cache of what was last written from this session.
//!
//! # Key presses
//!
//! ```text
//! KeyPress → Chord ─┬─ row listening? → record_shortcut(row, chord)
//!                   └─ otherwise      → ShortcutListener::dispatch → open link
//! ```

use std::fmt;

use crate::binding::Binding;
use crate::chord::{Chord, KeyPress};
use crate::listener::ShortcutListener;
use crate::opener::LinkOpener;
use crate::store::{BindingStore, KeyValueStore};

/// Default prompt shown in an empty link input
pub const DEFAULT_LINK_PLACEHOLDER: &str = "Type shortcut link";
/// Default label on the chord button before a chord is recorded
pub const DEFAULT_CHORD_PLACEHOLDER: &str = "Press";

/// Stable identifier for an editor row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Placeholder text for empty rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub link: String,
    pub chord: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            link: DEFAULT_LINK_PLACEHOLDER.to_string(),
            chord: DEFAULT_CHORD_PLACEHOLDER.to_string(),
        }
    }
}

/// One editable row: link input, chord button, delete control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    link: String,
    shortcut: Chord,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn shortcut(&self) -> &Chord {
        &self.shortcut
    }
}

/// Result of routing one key press through the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A listening row captured the chord
    Recorded { row: RowId, chord: Chord },
    /// A listening row consumed the press, but its link is not stored so
    /// nothing was written
    NotStored(RowId),
    /// No row was listening and a binding matched; its link was opened
    Opened(Binding),
    /// No row was listening and nothing matched
    NoMatch,
}

/// Editor state for one open editor instance
#[derive(Debug)]
pub struct EditorSession<S> {
    store: BindingStore<S>,
    listener: ShortcutListener<S>,
    rows: Vec<Row>,
    listening: Option<RowId>,
    next_id: u64,
    placeholders: Placeholders,
}

impl<S: KeyValueStore + Clone> EditorSession<S> {
    /// Open a session, building one row per stored binding
    ///
    /// With nothing stored, a single blank row is shown.
    pub fn open(store: BindingStore<S>) -> Self {
        Self::with_placeholders(store, Placeholders::default())
    }

    pub fn with_placeholders(store: BindingStore<S>, placeholders: Placeholders) -> Self {
        let listener = ShortcutListener::new(store.clone());
        let mut session = Self {
            store,
            listener,
            rows: Vec::new(),
            listening: None,
            next_id: 0,
            placeholders,
        };
        session.reload();
        session
    }
}

impl<S: KeyValueStore> EditorSession<S> {
    /// Rebuild rows from the store, dropping the listening pointer
    pub fn reload(&mut self) {
        self.rows.clear();
        self.listening = None;

        let bindings = self.store.get();
        tracing::debug!("Editor loaded {} bindings", bindings.len());
        if bindings.is_empty() {
            self.push_row(Binding::blank());
        } else {
            for binding in bindings {
                self.push_row(binding);
            }
        }
    }

    fn push_row(&mut self, binding: Binding) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row {
            id,
            link: binding.link,
            shortcut: binding.shortcut,
        });
        id
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// First row showing `link`
    pub fn row_for_link(&self, link: &str) -> Option<RowId> {
        self.rows.iter().find(|r| r.link == link).map(|r| r.id)
    }

    pub fn store(&self) -> &BindingStore<S> {
        &self.store
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Text for a row's link input, the placeholder when the link is empty
    pub fn link_label(&self, id: RowId) -> Option<String> {
        self.row(id).map(|r| {
            if r.link.is_empty() {
                self.placeholders.link.clone()
            } else {
                r.link.clone()
            }
        })
    }

    /// Text for a row's chord button
    pub fn chord_label(&self, id: RowId) -> Option<String> {
        self.row(id)
            .map(|r| r.shortcut.label_or(&self.placeholders.chord))
    }

    /// Append a blank row
    ///
    /// Nothing is written until the row's link is first edited.
    pub fn add_row(&mut self) -> RowId {
        let id = self.push_row(Binding::blank());
        tracing::debug!("Added {}", id);
        id
    }

    /// Change a row's link
    ///
    /// The stored binding with the row's old link is renamed in place; if
    /// there is none (the row was never stored) a new unconfigured binding is
    /// appended instead.
    pub fn update_link(&mut self, id: RowId, new_link: &str) {
        let Some(old_link) = self.row(id).map(|r| r.link.clone()) else {
            tracing::debug!("update_link: no {}", id);
            return;
        };

        let mut bindings = self.store.get();
        match bindings.iter_mut().find(|b| b.link == old_link) {
            Some(binding) => {
                tracing::debug!("Renaming {:?} to {:?}", old_link, new_link);
                binding.link = new_link.to_string();
            }
            None => {
                tracing::debug!("{:?} not stored yet, inserting {:?}", old_link, new_link);
                bindings.push(Binding::new(new_link, Chord::default()));
            }
        }
        self.store.set(&bindings);

        if let Some(row) = self.row_mut(id) {
            row.link = new_link.to_string();
        }
    }

    /// Remove a row and the stored binding with its link
    pub fn delete_row(&mut self, id: RowId) {
        let Some(link) = self.row(id).map(|r| r.link.clone()) else {
            tracing::debug!("delete_row: no {}", id);
            return;
        };

        let mut bindings = self.store.get();
        match bindings.iter().position(|b| b.link == link) {
            Some(idx) => {
                bindings.remove(idx);
            }
            None => tracing::debug!("delete_row: {:?} was not stored", link),
        }
        self.store.set(&bindings);

        self.rows.retain(|r| r.id != id);
        if self.listening == Some(id) {
            self.listening = None;
        }
    }

    /// Replace the chord of the stored binding with the row's link
    ///
    /// Returns false, writing nothing, if the row's link is not stored.
    pub fn record_shortcut(&mut self, id: RowId, chord: Chord) -> bool {
        let Some(link) = self.row(id).map(|r| r.link.clone()) else {
            tracing::debug!("record_shortcut: no {}", id);
            return false;
        };

        let mut bindings = self.store.get();
        let Some(binding) = bindings.iter_mut().find(|b| b.link == link) else {
            tracing::debug!("record_shortcut: {:?} is not stored, ignoring", link);
            return false;
        };
        binding.shortcut = chord.clone();
        self.store.set(&bindings);

        tracing::info!("Recorded {} for {}", chord, link);
        if let Some(row) = self.row_mut(id) {
            row.shortcut = chord;
        }
        true
    }

    /// Arm chord capture for a row, replacing any other listening row
    pub fn start_listening(&mut self, id: RowId) {
        if self.row(id).is_none() {
            tracing::debug!("start_listening: no {}", id);
            return;
        }
        self.listening = Some(id);
    }

    /// Row waiting to capture the next key press, if any
    pub fn listening(&self) -> Option<RowId> {
        self.listening
    }

    /// Route a key press to chord capture or to the shortcut listener
    pub fn handle_key_press(&mut self, press: &KeyPress, opener: &mut dyn LinkOpener) -> KeyOutcome {
        self.handle_chord(Chord::from_key_press(press), opener)
    }

    /// Same as [`handle_key_press`](Self::handle_key_press) for an already derived chord
    pub fn handle_chord(&mut self, chord: Chord, opener: &mut dyn LinkOpener) -> KeyOutcome {
        if let Some(row) = self.listening.take() {
            if self.record_shortcut(row, chord.clone()) {
                return KeyOutcome::Recorded { row, chord };
            }
            return KeyOutcome::NotStored(row);
        }

        match self.listener.dispatch(&chord, opener) {
            Some(binding) => KeyOutcome::Opened(binding),
            None => KeyOutcome::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opener::RecordingOpener;
    use crate::store::MemoryStore;

    fn session_with(bindings: &[Binding]) -> (EditorSession<MemoryStore>, BindingStore<MemoryStore>) {
        let store = BindingStore::new(MemoryStore::new());
        store.set(bindings);
        (EditorSession::open(store.clone()), store)
    }

    #[test]
    fn test_empty_store_shows_blank_row() {
        let (session, store) = session_with(&[]);
        assert_eq!(session.rows().len(), 1);
        assert_eq!(session.rows()[0].link(), "");
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_rows_follow_store_order() {
        let (session, _) = session_with(&[
            Binding::new("a.com", Chord::default()),
            Binding::new("b.com", Chord::default()),
        ]);
        let links: Vec<&str> = session.rows().iter().map(Row::link).collect();
        assert_eq!(links, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_row_ids_are_unique() {
        let (mut session, _) = session_with(&[]);
        let a = session.add_row();
        let b = session.add_row();
        assert_ne!(a, b);
        assert_eq!(session.rows().len(), 3);
    }

    #[test]
    fn test_add_row_does_not_write() {
        let (mut session, store) = session_with(&[Binding::new("a.com", Chord::default())]);
        session.add_row();
        assert_eq!(store.get().len(), 1);
    }

    #[test]
    fn test_update_link_inserts_fresh_row() {
        let (mut session, store) = session_with(&[]);
        let row = session.rows()[0].id();

        session.update_link(row, "a.com");

        assert_eq!(store.get(), vec![Binding::new("a.com", Chord::default())]);
        assert_eq!(session.row(row).unwrap().link(), "a.com");
    }

    #[test]
    fn test_update_link_renames_in_place() {
        let (mut session, store) = session_with(&[
            Binding::new("a.com", Chord::from_tokens(["k"])),
            Binding::new("z.com", Chord::default()),
        ]);
        let row = session.row_for_link("a.com").unwrap();

        session.update_link(row, "b.com");

        let stored = store.get();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0], Binding::new("b.com", Chord::from_tokens(["k"])));
        assert!(stored.iter().all(|b| b.link != "a.com"));
        assert_eq!(session.row_for_link("b.com"), Some(row));
    }

    #[test]
    fn test_delete_row() {
        let (mut session, store) = session_with(&[
            Binding::new("a.com", Chord::default()),
            Binding::new("b.com", Chord::default()),
        ]);
        let row = session.row_for_link("a.com").unwrap();

        session.delete_row(row);

        assert_eq!(store.get(), vec![Binding::new("b.com", Chord::default())]);
        assert!(session.row(row).is_none());
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn test_delete_unstored_row_keeps_bindings() {
        let (mut session, store) = session_with(&[Binding::new("a.com", Chord::default())]);
        let row = session.add_row();

        session.delete_row(row);

        assert_eq!(store.get().len(), 1);
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn test_record_shortcut_updates_label() {
        let (mut session, store) = session_with(&[Binding::new("a.com", Chord::default())]);
        let row = session.row_for_link("a.com").unwrap();
        assert_eq!(session.chord_label(row).as_deref(), Some("Press"));

        assert!(session.record_shortcut(row, Chord::from_tokens(["shift", "a"])));

        assert_eq!(store.get()[0].shortcut, Chord::from_tokens(["shift", "a"]));
        assert_eq!(session.chord_label(row).as_deref(), Some("Shift A"));
    }

    #[test]
    fn test_record_shortcut_on_unstored_row_is_noop() {
        let (mut session, store) = session_with(&[]);
        let row = session.rows()[0].id();

        assert!(!session.record_shortcut(row, Chord::from_tokens(["k"])));

        assert!(store.get().is_empty());
        assert!(session.row(row).unwrap().shortcut().is_empty());
    }

    #[test]
    fn test_listening_on_unstored_row_reports_not_stored() {
        let (mut session, store) = session_with(&[]);
        let row = session.rows()[0].id();
        let mut opener = RecordingOpener::default();

        session.start_listening(row);
        let outcome = session.handle_key_press(&KeyPress::key("k").with_control(), &mut opener);

        assert_eq!(outcome, KeyOutcome::NotStored(row));
        assert_eq!(session.listening(), None);
        assert!(store.get().is_empty());
        assert!(opener.opened.is_empty());
    }

    #[test]
    fn test_link_label_uses_placeholder_for_blank_row() {
        let (mut session, _) = session_with(&[]);
        let row = session.rows()[0].id();
        assert_eq!(session.link_label(row).as_deref(), Some("Type shortcut link"));

        session.update_link(row, "a.com");
        assert_eq!(session.link_label(row).as_deref(), Some("a.com"));
    }

    #[test]
    fn test_listening_captures_one_press() {
        let (mut session, store) = session_with(&[Binding::new("a.com", Chord::default())]);
        let row = session.row_for_link("a.com").unwrap();
        let mut opener = RecordingOpener::default();

        session.start_listening(row);
        let outcome = session.handle_key_press(&KeyPress::key("K").with_control(), &mut opener);

        assert_eq!(
            outcome,
            KeyOutcome::Recorded {
                row,
                chord: Chord::from_tokens(["control", "k"])
            }
        );
        assert!(opener.opened.is_empty());
        assert_eq!(session.listening(), None);
        assert_eq!(store.get()[0].shortcut, Chord::from_tokens(["control", "k"]));

        let outcome = session.handle_key_press(&KeyPress::key("k").with_control(), &mut opener);
        assert!(matches!(outcome, KeyOutcome::Opened(_)));
        assert_eq!(opener.opened, vec!["a.com"]);
    }

    #[test]
    fn test_start_listening_moves_pointer() {
        let (mut session, _) = session_with(&[
            Binding::new("a.com", Chord::default()),
            Binding::new("b.com", Chord::default()),
        ]);
        let a = session.row_for_link("a.com").unwrap();
        let b = session.row_for_link("b.com").unwrap();

        session.start_listening(a);
        session.start_listening(b);
        assert_eq!(session.listening(), Some(b));
    }

    #[test]
    fn test_deleting_listening_row_clears_pointer() {
        let (mut session, _) = session_with(&[Binding::new("a.com", Chord::default())]);
        let row = session.row_for_link("a.com").unwrap();
        session.start_listening(row);
        session.delete_row(row);
        assert_eq!(session.listening(), None);
    }

    #[test]
    fn test_unknown_row_is_ignored() {
        let (mut session, store) = session_with(&[Binding::new("a.com", Chord::default())]);
        let ghost = RowId(999);

        session.update_link(ghost, "x.com");
        session.delete_row(ghost);
        session.record_shortcut(ghost, Chord::from_tokens(["x"]));
        session.start_listening(ghost);

        assert_eq!(store.get(), vec![Binding::new("a.com", Chord::default())]);
        assert_eq!(session.listening(), None);
    }

    #[test]
    fn test_custom_placeholders() {
        let store = BindingStore::new(MemoryStore::new());
        let session = EditorSession::with_placeholders(
            store,
            Placeholders {
                link: "URL".to_string(),
                chord: "Set keys".to_string(),
            },
        );
        let row = session.rows()[0].id();
        assert_eq!(session.chord_label(row).as_deref(), Some("Set keys"));
        assert_eq!(session.link_label(row).as_deref(), Some("URL"));
    }
}
