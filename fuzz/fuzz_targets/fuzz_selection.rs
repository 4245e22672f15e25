#![no_main]

use libfuzzer_sys::fuzz_target;
use menumaker::{parse_selection, Selection};

fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let item_count = count as usize;
    let line = String::from_utf8_lossy(rest);

    match parse_selection(&line, item_count) {
        Selection::Item(n) => assert!(n >= 1 && n <= item_count),
        Selection::OutOfRange(n) => assert!(n < 0 || n as u64 > item_count as u64),
        Selection::Exit | Selection::Malformed | Selection::Blank => {}
    }
});
