#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(trits) = iota_iss::trits::trits_from_trytes(input) {
            let trytes = iota_iss::trits::trytes_from_trits(&trits).unwrap();
            assert_eq!(trytes, input);
        }
    }
});
