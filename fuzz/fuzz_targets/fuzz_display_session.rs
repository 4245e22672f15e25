#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use menumaker::MenuTree;

fuzz_target!(|data: &[u8]| {
    let mut tree = MenuTree::new();
    let root = tree.create_menu("Root", "Fuzzed session");
    let child = tree.create_menu("Child", "");
    tree.add_action(root, "Noop", || {}, "").unwrap();
    tree.add_submenu(root, "Child", child, "").unwrap();
    tree.add_action(child, "Noop", || {}, "").unwrap();

    // Any input ends the session cleanly, either by exiting or at end of input
    let mut input = Cursor::new(data.to_vec());
    let mut output = Vec::new();
    tree.display(root, &mut input, &mut output).unwrap();
});
