#![no_main]

use gitday_git::parser::{parse_file_count, parse_log};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    for commit in parse_log(&raw) {
        assert!(commit.hash.chars().count() <= 7);
    }
    let _ = parse_file_count(&raw);
});
