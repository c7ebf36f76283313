#![no_main]

use libfuzzer_sys::fuzz_target;
use verifier::parse_kernel_version;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    if let Ok(version) = parse_kernel_version(&raw) {
        let _ = version.code();
    }
});
