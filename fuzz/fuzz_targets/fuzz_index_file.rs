#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must be rejected or load into an index whose
    // queries stay in bounds
    if let Ok(index) = sus::index::IndexReader::parse(data) {
        for p in 0..index.len() {
            let _ = index.query(p);
            let _ = index.lm_sus(p);
        }
    }
});
