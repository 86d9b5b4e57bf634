#![no_main]

use elsevier_mcp::models::{
    CitationsOverviewInput, ScopusSearchInput, SerialTitleSearchInput,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and validation must never panic, only return Ok or Err
    if let Ok(input) = serde_json::from_slice::<ScopusSearchInput>(data) {
        let _ = input.validate();
    }
    if let Ok(input) = serde_json::from_slice::<SerialTitleSearchInput>(data) {
        let _ = input.validate();
    }
    if let Ok(input) = serde_json::from_slice::<CitationsOverviewInput>(data) {
        let _ = input.validate();
    }
});
