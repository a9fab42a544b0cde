#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the vector parser.
///
/// Arbitrary UTF-8 must either parse or fail with a typed error, never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = cvss_scorer::VectorParser::new().parse(s);
    }
});
