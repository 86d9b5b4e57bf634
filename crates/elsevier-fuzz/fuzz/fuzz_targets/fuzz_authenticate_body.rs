#![no_main]

use elsevier_mcp::client::{choice_id, extract_choices, extract_token};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Some(token) = extract_token(&body) {
            assert!(!token.is_empty());
        }
        if let Some(first) = extract_choices(&body).and_then(|c| c.first()) {
            let _ = choice_id(first);
        }
    }
});
