#![no_main]

use libfuzzer_sys::fuzz_target;
use media_typer::grammar::MAX_NAME_LEN;
use media_typer::{format, parse, MediaType};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, '\0');
        let media_type = MediaType {
            type_: parts.next().unwrap_or_default().to_string(),
            subtype: parts.next().unwrap_or_default().to_string(),
            suffix: parts.next().map(str::to_string),
        };

        // Anything format accepts must parse back, unless subtype and
        // suffix together overflow the composite subtype length
        if let Ok(formatted) = format(&media_type) {
            let (_, sub) = formatted.split_once('/').unwrap();
            if sub.len() <= MAX_NAME_LEN {
                assert!(parse(&formatted).is_ok());
            }
        }
    }
});
