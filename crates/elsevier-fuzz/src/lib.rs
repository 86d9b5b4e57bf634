//! Fuzzing library for elsevier-mcp.
//!
//! This crate provides fuzzing targets for the code that reads untrusted
//! Elsevier API bodies and tool arguments.
//!
//! # Usage
//!
//! ```bash
//! cd crates/elsevier-fuzz
//! cargo +nightly fuzz run fuzz_authenticate_body -- -max_total_time=60
//! ```

pub use elsevier_mcp::{client, error, models};
