//! Undo/redo command log.
//!
//! Every entry carries the full text box state on both sides of the change,
//! so undoing it is a matter of sending the inverse request to the server.
//! Re-adding a box gets it a new id from the server; that id is written back
//! into every entry on both stacks that still names the old one.

use common::document::TextBlock;

#[derive(Debug, Clone, PartialEq)]
pub enum TextCommand {
    Edit { page: usize, before: TextBlock, after: TextBlock },
    Add { page: usize, block: TextBlock },
    Delete { page: usize, block: TextBlock },
}

impl TextCommand {
    pub fn description(&self) -> String {
        match self {
            TextCommand::Edit { after, .. } => format!("Edit text \"{}\"", after.text),
            TextCommand::Add { block, .. } => format!("Add text \"{}\"", block.text),
            TextCommand::Delete { block, .. } => format!("Delete text \"{}\"", block.text),
        }
    }

    fn rename_block(&mut self, on_page: usize, old_id: &str, new_id: &str) {
        let blocks = match self {
            TextCommand::Edit { page, before, after } if *page == on_page => vec![before, after],
            TextCommand::Add { page, block } | TextCommand::Delete { page, block } if *page == on_page => {
                vec![block]
            }
            _ => return,
        };
        for block in blocks.into_iter().filter(|b| b.id == old_id) {
            block.id = new_id.to_string();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandHistory {
    undo_stack: Vec<TextCommand>,
    redo_stack: Vec<TextCommand>,
    max_depth: usize,
}

impl CommandHistory {
    pub fn new(max_depth: usize) -> Self {
        Self { undo_stack: Vec::new(), redo_stack: Vec::new(), max_depth }
    }

    /// Records a fresh user action; anything that was undone is no longer redoable.
    pub fn record(&mut self, command: TextCommand) {
        self.redo_stack.clear();
        self.push_undo(command);
    }

    pub fn push_undo(&mut self, command: TextCommand) {
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    pub fn push_redo(&mut self, command: TextCommand) {
        self.redo_stack.push(command);
    }

    pub fn take_undo(&mut self) -> Option<TextCommand> {
        self.undo_stack.pop()
    }

    pub fn take_redo(&mut self) -> Option<TextCommand> {
        self.redo_stack.pop()
    }

    pub fn rename_block(&mut self, page: usize, old_id: &str, new_id: &str) {
        for command in self.undo_stack.iter_mut().chain(self.redo_stack.iter_mut()) {
            command.rename_block(page, old_id, new_id);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
