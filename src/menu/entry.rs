//! Menu entries.
//!
//! An entry is one numbered line of a menu. Its payload is fixed when the
//! entry is created: `MenuTree::add_action` builds an action entry and
//! `MenuTree::add_submenu` builds a submenu entry. Nothing retags it later.

use std::fmt;

use super::node::MenuId;

/// Callback run when an action entry is selected
pub type Action = Box<dyn FnMut()>;

/// What selecting an entry does
pub enum EntryKind {
    /// Invoke a zero-argument callback
    Action(Action),
    /// Display another menu of the same tree
    Submenu(MenuId),
}

impl fmt::Debug for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Action(_) => f.write_str("Action(..)"),
            EntryKind::Submenu(id) => f.debug_tuple("Submenu").field(id).finish(),
        }
    }
}

/// A single selectable line of a menu
#[derive(Debug)]
pub struct MenuEntry {
    name: String,
    description: String,
    kind: EntryKind,
}

impl MenuEntry {
    pub(crate) fn action(name: String, action: Action, description: String) -> Self {
        Self {
            name,
            description,
            kind: EntryKind::Action(action),
        }
    }

    pub(crate) fn submenu(name: String, child: MenuId, description: String) -> Self {
        Self {
            name,
            description,
            kind: EntryKind::Submenu(child),
        }
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inline description, `None` when empty
    pub fn description(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(&self.description)
        }
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut EntryKind {
        &mut self.kind
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self.kind, EntryKind::Submenu(_))
    }

    /// Target menu for submenu entries
    pub fn submenu_id(&self) -> Option<MenuId> {
        match self.kind {
            EntryKind::Submenu(id) => Some(id),
            EntryKind::Action(_) => None,
        }
    }
}
