#![no_main]

use libfuzzer_sys::fuzz_target;
use media_typer::{format, parse, test};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = parse(s);

        // parse and test must agree on every input
        if let Ok(valid) = test(s) {
            assert_eq!(valid, parsed.is_ok());
        }

        // Subtypes with several `+` parse but do not format
        if let Ok(media_type) = parsed {
            if let Ok(formatted) = format(&media_type) {
                assert!(test(&formatted).unwrap());
            }
        }
    }
});
