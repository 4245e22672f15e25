//! MenuMaker - hierarchical text menus for interactive command-line programs
//!
//! A [`MenuTree`] owns every menu. Each menu has a title, an optional
//! description and an ordered list of entries; an entry either runs an action
//! or opens another menu. [`MenuTree::display`] runs the render-prompt-read
//! loop over any `BufRead` / `Write` pair.
//!
//! ```no_run
//! use menumaker::MenuTree;
//!
//! # fn main() -> menumaker::MenuResult<()> {
//! let mut tree = MenuTree::new();
//! let root = tree.create_menu("Main", "");
//! let audio = tree.create_menu("Audio Settings", "");
//! tree.add_action(audio, "Toggle Mute", || println!("Toggling mute..."), "")?;
//! tree.add_submenu(root, "Audio", audio, "Sound options")?;
//! tree.display_stdio(root)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod menu;

// Re-exports for convenience
pub use config::{Config, EchoMode, Verbosity};
pub use error::{MenuError, MenuResult};
pub use menu::{
    invalid_choice_message, parse_selection, render_menu, DisplayOptions, EntryKind, MenuEntry,
    MenuId, MenuNode, MenuTree, Selection, EXIT_LINE, INVALID_INPUT_MESSAGE, PROMPT,
};
