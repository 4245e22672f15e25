//! Property tests for selection parsing.

use proptest::prelude::*;

use menumaker::{parse_selection, Selection};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary lines.
    #[test]
    fn property_parse_never_panics(
        line in "(?s).{0,64}",
        item_count in 0usize..1000
    ) {
        let _ = parse_selection(&line, item_count);
    }

    /// PROPERTY: Every integer is classified by range alone.
    #[test]
    fn property_integers_classified_by_range(
        choice in any::<i32>(),
        item_count in 0usize..64
    ) {
        let selection = parse_selection(&choice.to_string(), item_count);

        let expected = if choice == 0 {
            Selection::Exit
        } else if choice > 0 && (choice as u64) <= item_count as u64 {
            Selection::Item(choice as usize)
        } else {
            Selection::OutOfRange(choice)
        };
        prop_assert_eq!(selection, expected);
    }

    /// PROPERTY: Surrounding whitespace does not change the result.
    #[test]
    fn property_whitespace_is_ignored(
        choice in -5i32..20,
        left in "[ \t]{0,4}",
        right in "[ \t\r]{0,4}",
        item_count in 0usize..10
    ) {
        let padded = format!("{}{}{}", left, choice, right);
        prop_assert_eq!(
            parse_selection(&padded, item_count),
            parse_selection(&choice.to_string(), item_count)
        );
    }

    /// PROPERTY: Lines containing letters are never a valid selection.
    #[test]
    fn property_letters_are_malformed(
        line in "[0-9]{0,3}[a-zA-Z]+[0-9a-zA-Z]{0,3}",
        item_count in 0usize..10
    ) {
        prop_assert_eq!(parse_selection(&line, item_count), Selection::Malformed);
    }
}
