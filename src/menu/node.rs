//! MenuNode data structure.

use std::fmt;

use super::entry::MenuEntry;

/// Handle to a menu stored in a [`MenuTree`](super::MenuTree).
///
/// Ids remember the tree that issued them; any other tree rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId {
    tree: u64,
    index: usize,
}

impl MenuId {
    pub(crate) fn new(tree: u64, index: usize) -> Self {
        Self { tree, index }
    }

    /// Position of the menu in its tree, in creation order
    pub fn index(self) -> usize {
        self.index
    }

    pub(crate) fn tree(self) -> u64 {
        self.tree
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// One level of the menu hierarchy
#[derive(Debug)]
pub struct MenuNode {
    title: String,
    description: String,
    items: Vec<MenuEntry>,
}

impl MenuNode {
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description shown under the title, `None` when empty
    pub fn description(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(&self.description)
        }
    }

    /// Entries in display order; entry `i` is numbered `i + 1`
    pub fn items(&self) -> &[MenuEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn push(&mut self, entry: MenuEntry) {
        self.items.push(entry);
    }

    pub(crate) fn item_mut(&mut self, index: usize) -> Option<&mut MenuEntry> {
        self.items.get_mut(index)
    }
}
