//! Editor state held in a dioxus signal.

use dioxus::prelude::*;
use editor::state::{EditorState, EditorStore};

/// Copyable handle on the page's `EditorState`.
///
/// Reading through it inside a component subscribes that component to every
/// state change; use [`SignalStore::peek`] in effects that must not rerun.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalStore(pub Signal<EditorState>);

impl SignalStore {
    pub fn peek<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.0.peek())
    }
}

impl EditorStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R {
        let mut signal = self.0;
        f(&mut signal.write())
    }
}
