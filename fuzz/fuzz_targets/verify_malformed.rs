#![no_main]
use libfuzzer_sys::fuzz_target;

// verification must reject or return false on arbitrary input, never panic
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parts = input.splitn(3, ',');
        let address = parts.next().unwrap_or_default();
        let fragment = parts.next().unwrap_or_default();
        let hash = parts.next().unwrap_or_default();
        let _ = iota_iss::verify(address, &[fragment], hash);
        let _ = iota_iss::is_valid_checksum(address);
        let _ = iota_iss::normalized_bundle(hash);
    }
});
