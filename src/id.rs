//! ID generation utilities for toolcat
//!
//! Provides unique identifiers for submitted catalog entries.

use rand::Rng;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

/// Generate a unique submission ID
///
/// Format: `{timestamp_ms}-{random_hex}`
/// Example: `1738300800123-9f3a61c2`
///
/// The monotonic timestamp component plus the random suffix makes a
/// collision within one store lifetime negligible.
pub fn generate_submission_id() -> String {
    let timestamp = now_ms();
    let random: u32 = rand::rng().random();
    format!("{}-{:08x}", timestamp, random)
}
