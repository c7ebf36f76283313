#![no_main]

use libfuzzer_sys::fuzz_target;
use verifier::extract_attachments;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let records = extract_attachments(&text);
    // Extraction sorts its output whatever the input order was.
    assert!(records.windows(2).all(|w| w[0] <= w[1]));
});
