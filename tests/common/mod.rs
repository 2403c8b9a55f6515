//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use linkchord::{Binding, BindingStore, Chord, EditorSession, MemoryStore};

/// Binding with a chord given as token names
pub fn binding(link: &str, tokens: &[&str]) -> Binding {
    Binding::new(link, Chord::from_tokens(tokens.iter().copied()))
}

/// In-memory store pre-filled with `bindings`
pub fn store_with(bindings: &[Binding]) -> BindingStore<MemoryStore> {
    let store = BindingStore::new(MemoryStore::new());
    store.set(bindings);
    store
}

/// Editor session over a fresh store holding `bindings`
pub fn session_with(bindings: &[Binding]) -> (EditorSession<MemoryStore>, BindingStore<MemoryStore>) {
    let store = store_with(bindings);
    (EditorSession::open(store.clone()), store)
}

pub fn links(bindings: &[Binding]) -> Vec<&str> {
    bindings.iter().map(|b| b.link.as_str()).collect()
}
