//! Property tests for whole display sessions.

use std::io::Cursor;

use proptest::prelude::*;

use crate::common::*;
use menumaker::MenuTree;

fn junk_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z?!.,#]{1,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any input bytes end the session without error or panic.
    ///
    /// Sessions either exit with `0` or stop at end of input.
    #[test]
    fn property_arbitrary_input_terminates(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let out = SharedOutput::new();
        let mut fixture = three_level_tree(&out);
        let mut input = Cursor::new(bytes);
        let mut sink = out.clone();

        fixture.tree.display(fixture.root, &mut input, &mut sink).unwrap();

        prop_assert!(out.contents().starts_with("\n=== Root ===\n"));
    }

    /// PROPERTY: Junk before a valid choice adds exactly one message and nothing else.
    #[test]
    fn property_junk_then_choice_matches_choice(
        junk in junk_token(),
        choice in 0usize..=2
    ) {
        let choice = choice.to_string();

        let clean_out = SharedOutput::new();
        let (mut clean_tree, clean_root) = start_config_tree(&clean_out);
        let clean = run_script(&mut clean_tree, clean_root, &[choice.as_str(), "0", "0"], &clean_out);

        let out = SharedOutput::new();
        let (mut tree, root) = start_config_tree(&out);
        let noisy = run_script(&mut tree, root, &[junk.as_str(), choice.as_str(), "0", "0"], &out);

        prop_assert_eq!(noisy.count("Invalid input!"), 1);
        prop_assert_eq!(
            noisy.text.replacen("Invalid input! Please enter a number.\nChoice: ", "", 1),
            clean.text
        );
    }

    /// PROPERTY: Out-of-range numbers redraw the menu once each and run nothing.
    #[test]
    fn property_out_of_range_redraws(
        misses in proptest::collection::vec(prop_oneof![3i64..1000, -1000i64..0], 1..6)
    ) {
        let out = SharedOutput::new();
        let mut tree = MenuTree::new();
        let root = tree.create_menu("Root", "");
        for name in ["A", "B"] {
            let sink = out.clone();
            tree.add_action(root, name, move || sink.say("ran"), "").unwrap();
        }

        let mut script: Vec<String> = misses.iter().map(|n| n.to_string()).collect();
        script.push("0".to_string());
        let lines: Vec<&str> = script.iter().map(String::as_str).collect();
        let transcript = run_script(&mut tree, root, &lines, &out);

        prop_assert_eq!(transcript.renders_of("Root"), misses.len() + 1);
        prop_assert_eq!(
            transcript.count("Invalid choice! Please select a number between 0 and 2.\n"),
            misses.len()
        );
        prop_assert_eq!(transcript.count("ran"), 0);
    }
}
