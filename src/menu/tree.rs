//! MenuTree construction.
//!
//! The tree is an arena: it owns every menu, and submenu entries refer to
//! their target by [`MenuId`]. One menu may be linked from several parents,
//! but links that would let a menu reach itself are rejected, so every
//! display recursion is bounded by the number of menus.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{MenuError, MenuResult};

use super::entry::{EntryKind, MenuEntry};
use super::node::{MenuId, MenuNode};

const DEFAULT_TITLE: &str = "Menu";

static NEXT_TREE: AtomicU64 = AtomicU64::new(1);

/// Arena owning a set of linked menus
#[derive(Debug)]
pub struct MenuTree {
    tag: u64,
    nodes: Vec<MenuNode>,
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            tag: NEXT_TREE.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    /// Create a menu with no entries. An empty description is not rendered.
    pub fn create_menu(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> MenuId {
        let id = MenuId::new(self.tag, self.nodes.len());
        self.nodes.push(MenuNode::new(title, description));
        id
    }

    /// Create a menu titled "Menu" with no description
    pub fn create_default_menu(&mut self) -> MenuId {
        self.create_menu(DEFAULT_TITLE, "")
    }

    /// Append an entry that runs `action` when selected
    pub fn add_action<F>(
        &mut self,
        menu: MenuId,
        name: impl Into<String>,
        action: F,
        description: impl Into<String>,
    ) -> MenuResult<()>
    where
        F: FnMut() + 'static,
    {
        let node = self.node_mut(menu)?;
        node.push(MenuEntry::action(
            name.into(),
            Box::new(action),
            description.into(),
        ));
        Ok(())
    }

    /// Append an entry that opens `child` when selected.
    ///
    /// Fails with [`MenuError::SubmenuCycle`] if `child` is `menu` itself or
    /// can already reach `menu` through its own submenus.
    pub fn add_submenu(
        &mut self,
        menu: MenuId,
        name: impl Into<String>,
        child: MenuId,
        description: impl Into<String>,
    ) -> MenuResult<()> {
        self.node(menu)?;
        self.node(child)?;

        if self.reaches(child, menu) {
            return Err(MenuError::SubmenuCycle {
                parent: self.node(menu)?.title().to_string(),
                child: self.node(child)?.title().to_string(),
            });
        }

        let node = self.node_mut(menu)?;
        node.push(MenuEntry::submenu(name.into(), child, description.into()));
        Ok(())
    }

    /// Look up a menu by id
    pub fn menu(&self, id: MenuId) -> Option<&MenuNode> {
        self.node(id).ok()
    }

    pub fn contains(&self, id: MenuId) -> bool {
        id.tree() == self.tag && id.index() < self.nodes.len()
    }

    /// Number of menus in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of every menu, in creation order
    pub fn ids(&self) -> impl Iterator<Item = MenuId> + '_ {
        let tag = self.tag;
        (0..self.nodes.len()).map(move |index| MenuId::new(tag, index))
    }

    /// Render the hierarchy below `root` as an indented outline.
    ///
    /// Shared submenus are expanded at every place they are linked from.
    pub fn outline(&self, root: MenuId) -> MenuResult<String> {
        let node = self.node(root)?;
        let mut out = String::new();
        out.push_str(node.title());
        out.push('\n');
        self.outline_node(node, 1, &mut out);
        Ok(out)
    }

    fn outline_node(&self, node: &MenuNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        for (i, entry) in node.items().iter().enumerate() {
            out.push_str(&format!("{}{}. {}", indent, i + 1, entry.name()));
            if let Some(desc) = entry.description() {
                out.push_str(&format!(" - {}", desc));
            }
            out.push('\n');

            if let EntryKind::Submenu(child) = entry.kind() {
                if let Some(child_node) = self.menu(*child) {
                    self.outline_node(child_node, depth + 1, out);
                }
            }
        }
    }

    pub(crate) fn node(&self, id: MenuId) -> MenuResult<&MenuNode> {
        if id.tree() != self.tag {
            return Err(MenuError::UnknownMenu { id });
        }
        self.nodes.get(id.index()).ok_or(MenuError::UnknownMenu { id })
    }

    pub(crate) fn node_mut(&mut self, id: MenuId) -> MenuResult<&mut MenuNode> {
        if id.tree() != self.tag {
            return Err(MenuError::UnknownMenu { id });
        }
        self.nodes.get_mut(id.index()).ok_or(MenuError::UnknownMenu { id })
    }

    /// Whether `target` is `from` or reachable from it through submenu links
    fn reaches(&self, from: MenuId, target: MenuId) -> bool {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![from];

        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if std::mem::replace(&mut visited[id.index()], true) {
                continue;
            }
            stack.extend(self.nodes[id.index()].items().iter().filter_map(|e| e.submenu_id()));
        }

        false
    }
}
