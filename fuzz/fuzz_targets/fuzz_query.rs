#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The MUI stack must agree with the naive scan at every position
    let index = sus::SusIndex::build(data).unwrap();
    assert_eq!(sus::query::verify_all(&index), None);
});
