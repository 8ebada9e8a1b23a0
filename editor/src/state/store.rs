//! Narrow access to the editor state.
//!
//! Handlers never hold the state across an `.await`: they read or update it
//! inside a closure, await the server, then apply the response in another
//! closure.

use std::{cell::RefCell, rc::Rc};

use crate::state::EditorState;

pub trait EditorStore {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R;
}

impl EditorStore for RefCell<EditorState> {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<S: EditorStore + ?Sized> EditorStore for Rc<S> {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        (**self).read(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R {
        (**self).update(f)
    }
}
