//! Text rendering for the display loop.
//!
//! The layout is a fixed protocol: scripted clients and tests match it
//! byte-for-byte.

use super::node::MenuNode;

/// Line offered at every level for leaving the menu
pub const EXIT_LINE: &str = "0. Exit\n";

/// Prompt written before each read, without a newline
pub const PROMPT: &str = "Choice: ";

/// Written when a selection line is not a number
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please enter a number.\n";

/// Render a full menu: title, description, numbered entries, exit line and prompt
pub fn render_menu(node: &MenuNode) -> String {
    let mut out = format!("\n=== {} ===\n", node.title());

    if let Some(description) = node.description() {
        out.push_str(&format!("\n{}\n\n", description));
    }

    for (i, entry) in node.items().iter().enumerate() {
        out.push_str(&format!("{}. {}", i + 1, entry.name()));
        if let Some(description) = entry.description() {
            out.push_str(&format!(" - {}", description));
        }
        out.push('\n');
    }

    out.push_str(EXIT_LINE);
    out.push_str(PROMPT);
    out
}

/// Message for a number outside `0..=item_count`
pub fn invalid_choice_message(item_count: usize) -> String {
    format!(
        "Invalid choice! Please select a number between 0 and {}.\n",
        item_count
    )
}
