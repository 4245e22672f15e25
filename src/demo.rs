//! Sample record management menu used by the demo binary.

use menumaker::{MenuId, MenuResult, MenuTree};

fn view_records() {
    println!("Viewing records...");
}

fn add_record() {
    println!("Adding new record...");
}

fn view_help() {
    println!("Displaying help documentation...");
}

fn about() {
    println!("Record Management System v1.0");
}

/// Build the demo hierarchy:
///
/// - Record Management System
///   - Start Game
///   - View Records
///   - Add Record
///   - Settings
///     - Audio: Adjust Volume, Toggle Mute
///     - Video: Change Resolution, Toggle Fullscreen
///   - Help: View Help, About
pub fn build_demo_menu() -> MenuResult<(MenuTree, MenuId)> {
    let mut tree = MenuTree::new();

    let main_menu = tree.create_menu(
        "Record Management System",
        "Welcome to the Record Management System. Please select an option to continue.",
    );
    let settings = tree.create_menu("Settings", "Configure system preferences");
    let audio = tree.create_menu("Audio Settings", "");
    let video = tree.create_menu("Video Settings", "");
    let help = tree.create_menu("Help & Information", "Get help and system information");

    tree.add_action(audio, "Adjust Volume", || println!("Adjusting volume..."), "")?;
    tree.add_action(audio, "Toggle Mute", || println!("Toggling mute..."), "")?;

    tree.add_action(
        video,
        "Change Resolution",
        || println!("Changing resolution..."),
        "",
    )?;
    tree.add_action(
        video,
        "Toggle Fullscreen",
        || println!("Toggling fullscreen..."),
        "",
    )?;

    tree.add_submenu(settings, "Audio", audio, "")?;
    tree.add_submenu(settings, "Video", video, "")?;

    tree.add_action(main_menu, "Start Game", || println!("Starting game..."), "")?;

    tree.add_action(help, "View Help", view_help, "Access user documentation")?;
    tree.add_action(help, "About", about, "View system information")?;

    tree.add_action(main_menu, "View Records", view_records, "Browse existing records")?;
    tree.add_action(main_menu, "Add Record", add_record, "Create a new record entry")?;
    tree.add_submenu(main_menu, "Settings", settings, "Configure system preferences")?;
    tree.add_submenu(main_menu, "Help", help, "Get help and system information")?;

    Ok((tree, main_menu))
}
