#![no_main]

use elsevier_mcp::error::parse_error_message;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let body = serde_json::from_slice::<serde_json::Value>(data).ok();
    let status = data.first().map_or(500, |b| 400 + u16::from(*b));

    let message = parse_error_message(status, "Bad Request", body.as_ref());
    assert!(message.starts_with(&format!("HTTP {status}: ")));
});
