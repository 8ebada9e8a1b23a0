//! Keyboard shortcut mapping for the editor page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    Save,
    /// Close the edit panel and any open modal.
    ClosePanels,
    PreviousPage,
    NextPage,
    ShowHelp,
}

pub const HELP_TEXT: &str = "PDF Text Editor\n\nKeyboard Shortcuts:\nCtrl+S: Save\nCtrl+Z: Undo\nCtrl+Y: Redo\nLeft/Right: Previous/Next page\nEsc: Close panel\nF1: Help";

/// What the page looks like when the key goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub edit_panel_open: bool,
    pub add_modal_open: bool,
    /// Focus is in a text input or textarea.
    pub in_text_field: bool,
}

impl KeyContext {
    /// Arrow keys move the caret instead of flipping pages.
    fn typing(&self) -> bool {
        self.edit_panel_open || self.add_modal_open || self.in_text_field
    }
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// `key` is the DOM `KeyboardEvent.key` value. Inside a text field
    /// Ctrl+Z/Ctrl+Y are left to the browser's own text undo.
    pub fn resolve(key: &str, ctrl: bool, context: KeyContext) -> Option<ShortcutAction> {
        if ctrl {
            return match key {
                "z" | "Z" if !context.in_text_field => Some(ShortcutAction::Undo),
                "y" | "Y" if !context.in_text_field => Some(ShortcutAction::Redo),
                "s" | "S" => Some(ShortcutAction::Save),
                _ => None,
            };
        }
        match key {
            "Escape" => Some(ShortcutAction::ClosePanels),
            "F1" => Some(ShortcutAction::ShowHelp),
            "ArrowLeft" if !context.typing() => Some(ShortcutAction::PreviousPage),
            "ArrowRight" if !context.typing() => Some(ShortcutAction::NextPage),
            _ => None,
        }
    }
}
