//! Key-to-binding lookup table.
//!
//! A [`Keymap`] maps a [`Key`] to a [`Binding`]: either a sequence of
//! driver requests or the quit action. Keys are unique; rebinding a key
//! replaces its previous binding. Lookups for unmapped printable
//! characters fall through to an insert, everything else unmapped is
//! ignored - the `default:` arm of the classic curses form loop.

use std::collections::HashMap;

use super::Key;
use crate::form::FormRequest;

// =============================================================================
// Binding / Action
// =============================================================================

/// What a key is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Apply these requests to the form, in order.
    Requests(Vec<FormRequest>),
    /// Leave the read-dispatch loop.
    Quit,
}

/// A resolved lookup, including the unmapped-key fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Apply these requests to the form, in order.
    Requests(&'a [FormRequest]),
    /// Leave the read-dispatch loop.
    Quit,
    /// Unmapped printable character: insert it into the current field.
    Insert(char),
    /// Unmapped non-character key: do nothing.
    Ignore,
}

// =============================================================================
// Keymap
// =============================================================================

/// Lookup table from keys to bindings. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    map: HashMap<Key, Binding>,
}

impl Keymap {
    /// An empty keymap. Every printable key inserts, nothing quits.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic form bindings:
    ///
    /// | Key            | Binding                  |
    /// |----------------|--------------------------|
    /// | Down, Tab      | NextField, EndLine       |
    /// | Up, BackTab    | PrevField, EndLine       |
    /// | Left / Right   | PrevChar / NextChar      |
    /// | Backspace      | DeletePrev               |
    /// | Delete         | DeleteChar               |
    /// | Home / End     | BeginLine / EndLine      |
    /// | F1             | Quit                     |
    pub fn form_default() -> Self {
        use FormRequest::*;

        let mut map = Self::new();
        map.bind_requests(Key::Down, [NextField, EndLine]);
        map.bind_requests(Key::Tab, [NextField, EndLine]);
        map.bind_requests(Key::Up, [PrevField, EndLine]);
        map.bind_requests(Key::BackTab, [PrevField, EndLine]);
        map.bind_requests(Key::Left, [PrevChar]);
        map.bind_requests(Key::Right, [NextChar]);
        map.bind_requests(Key::Backspace, [DeletePrev]);
        map.bind_requests(Key::Delete, [DeleteChar]);
        map.bind_requests(Key::Home, [BeginLine]);
        map.bind_requests(Key::End, [EndLine]);
        map.bind_quit(Key::F(1));
        map
    }

    /// Bind a key, replacing any existing binding for it.
    pub fn bind(&mut self, key: Key, binding: Binding) {
        self.map.insert(key, binding);
    }

    /// Bind a key to a request sequence.
    pub fn bind_requests(
        &mut self,
        key: Key,
        requests: impl IntoIterator<Item = FormRequest>,
    ) {
        self.bind(key, Binding::Requests(requests.into_iter().collect()));
    }

    /// Bind a key to the quit action.
    pub fn bind_quit(&mut self, key: Key) {
        self.bind(key, Binding::Quit);
    }

    /// Remove a binding, returning it.
    pub fn unbind(&mut self, key: Key) -> Option<Binding> {
        self.map.remove(&key)
    }

    /// Look up a key without the fallthrough.
    pub fn binding(&self, key: Key) -> Option<&Binding> {
        self.map.get(&key)
    }

    /// Resolve a key to an [`Action`], applying the unmapped-key
    /// fallthrough: printable characters insert, everything else is
    /// ignored.
    pub fn resolve(&self, key: Key) -> Action<'_> {
        match self.map.get(&key) {
            Some(Binding::Quit) => Action::Quit,
            Some(Binding::Requests(requests)) => Action::Requests(requests),
            None => match key {
                Key::Char(ch) => Action::Insert(ch),
                _ => Action::Ignore,
            },
        }
    }
}
