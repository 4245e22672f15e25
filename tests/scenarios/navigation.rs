//! Scenario: Walking nested menus
//!
//! Journey: A user opens a submenu, runs an action there, backs out level by
//! level and finally leaves the program.
//!
//! Success Criteria:
//! - Each level redraws after an action or after a child level exits
//! - `0` leaves exactly one level
//! - Actions run exactly once per selection

use crate::common::*;

/// SCENARIO: root -> Config -> Toggle, then back out twice
#[test]
fn scenario_start_config_toggle() {
    let out = SharedOutput::new();
    let (mut tree, root) = start_config_tree(&out);

    let transcript = run_script(&mut tree, root, &["2", "1", "0", "0"], &out);

    assert_eq!(
        transcript.render_order(),
        vec!["Root", "Config", "Config", "Root"],
        "Transcript:\n{}",
        transcript.text
    );
    assert_eq!(transcript.count("Toggled\n"), 1);
    assert_eq!(transcript.count("Starting\n"), 0);

    // Toggle output sits between the two Config renders
    let toggled = transcript.text.find("Toggled").unwrap();
    let second_config = transcript.text.rfind("=== Config ===").unwrap();
    let first_config = transcript.text.find("=== Config ===").unwrap();
    assert!(first_config < toggled && toggled < second_config);
    assert!(transcript.text.ends_with("Choice: "));
}

/// SCENARIO: three levels, exiting audio returns to settings, then to root
#[test]
fn scenario_three_level_back_navigation() {
    let out = SharedOutput::new();
    let mut fixture = three_level_tree(&out);

    let transcript = run_script(
        &mut fixture.tree,
        fixture.root,
        &["1", "1", "2", "0", "0", "0"],
        &out,
    );

    assert_eq!(
        transcript.render_order(),
        vec!["Root", "Settings", "Audio", "Audio", "Settings", "Root"]
    );
    assert_eq!(fixture.mute_calls.get(), 1);
    assert_eq!(fixture.volume_calls.get(), 0);
}

/// SCENARIO: re-entering a submenu starts its loop afresh
#[test]
fn scenario_reenter_submenu() {
    let out = SharedOutput::new();
    let mut fixture = three_level_tree(&out);

    let transcript = run_script(
        &mut fixture.tree,
        fixture.settings,
        &["1", "1", "0", "1", "1", "0", "0"],
        &out,
    );

    assert_eq!(fixture.volume_calls.get(), 2);
    assert_eq!(transcript.renders_of("Settings"), 3);
    assert_eq!(transcript.renders_of("Audio"), 4);
    assert_eq!(transcript.renders_of("Root"), 0);
}

/// SCENARIO: a menu shared by two parents returns to whichever opened it
#[test]
fn scenario_shared_submenu_returns_to_caller() {
    let out = SharedOutput::new();
    let mut fixture = three_level_tree(&out);
    fixture
        .tree
        .add_submenu(fixture.root, "Audio shortcut", fixture.audio, "")
        .unwrap();

    let transcript = run_script(&mut fixture.tree, fixture.root, &["2", "1", "0", "0"], &out);

    assert_eq!(
        transcript.render_order(),
        vec!["Root", "Audio", "Audio", "Root"]
    );
    assert_eq!(fixture.volume_calls.get(), 1);
}

/// SCENARIO: the script runs out while deep in the tree
#[test]
fn scenario_input_ends_inside_submenu() {
    let out = SharedOutput::new();
    let mut fixture = three_level_tree(&out);

    let transcript = run_script(&mut fixture.tree, fixture.root, &["1", "1", "1"], &out);

    assert_eq!(transcript.render_order(), vec!["Root", "Settings", "Audio", "Audio"]);
    assert_eq!(fixture.volume_calls.get(), 1);
    assert!(transcript.text.ends_with("Choice: "));
}

/// SCENARIO: exiting right away touches nothing
#[test]
fn scenario_exit_immediately() {
    let out = SharedOutput::new();
    let mut fixture = three_level_tree(&out);

    let transcript = run_script(&mut fixture.tree, fixture.root, &["0"], &out);

    assert_eq!(transcript.render_order(), vec!["Root"]);
    assert_eq!(fixture.volume_calls.get() + fixture.mute_calls.get(), 0);
}
