//! Fuzz target for import declaration extraction.
//!
//! Goal: extraction should **never panic** on any input, and every reported position must be
//! 1-based and inside the text.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_import_extraction
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Keep inputs small so the fuzzer explores structure, not size.
    if text.len() > 16 * 1024 {
        return;
    }

    let line_count = text.lines().count().max(1) as u32 + 1;
    for site in layerguard_repo::extract_imports(text) {
        assert!(site.line >= 1 && site.line <= line_count);
        assert!(site.col >= 1);
        assert!(!site.specifier.is_empty());
    }
});
