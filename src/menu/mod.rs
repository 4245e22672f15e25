//! Menu Tree
//!
//! Numbered console menus that nest: every entry either runs an action or
//! opens a submenu, and `0` always leaves the current level.
//!
//! # Module Structure
//!
//! - `entry` - MenuEntry and the action/submenu payload
//! - `node` - MenuNode data and MenuId handles
//! - `tree` - MenuTree arena construction and cycle checks
//! - `render` - Text protocol rendering
//! - `input` - Reading and classifying selection lines
//! - `display` - The interactive display loop

mod display;
mod entry;
mod input;
mod node;
mod render;
mod tree;

// Re-export public API
pub use display::DisplayOptions;
pub use entry::{Action, EntryKind, MenuEntry};
pub use input::{parse_selection, Selection};
pub use node::{MenuId, MenuNode};
pub use render::{
    invalid_choice_message, render_menu, EXIT_LINE, INVALID_INPUT_MESSAGE, PROMPT,
};
pub use tree::MenuTree;
