//! Background listener: key press → stored bindings → open link

use crate::binding::Binding;
use crate::chord::{Chord, KeyPress};
use crate::matcher::find_match;
use crate::opener::LinkOpener;
use crate::store::{BindingStore, KeyValueStore};

/// Opens the link bound to whichever chord was pressed
///
/// The binding list is re-read on every key press so edits made elsewhere
/// take effect immediately.
#[derive(Debug, Clone)]
pub struct ShortcutListener<S> {
    store: BindingStore<S>,
}

impl<S: KeyValueStore> ShortcutListener<S> {
    pub fn new(store: BindingStore<S>) -> Self {
        Self { store }
    }

    /// Handle a raw key press from the host
    pub fn handle_key_press(
        &self,
        press: &KeyPress,
        opener: &mut dyn LinkOpener,
    ) -> Option<Binding> {
        self.dispatch(&Chord::from_key_press(press), opener)
    }

    /// Open the first binding matching `pressed`, returning it
    pub fn dispatch(&self, pressed: &Chord, opener: &mut dyn LinkOpener) -> Option<Binding> {
        let bindings = self.store.get();
        let found = find_match(&bindings, pressed).cloned();

        match &found {
            Some(binding) => {
                tracing::debug!("{:?} matched {}", pressed.to_string(), binding.link);
                opener.open_link(&binding.link);
            }
            None => tracing::trace!("No binding for {:?}", pressed.to_string()),
        }

        found
    }
}
