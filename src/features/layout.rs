//! Feature Layout - Centralized Feature Definition
//!
//! **This order is what the remote model was trained on.**
//!
//! Categorical fields use exclusion-based one-hot coding: ICMP is
//! `protocol_is_tcp = 0, protocol_is_udp = 0` and AES is
//! `encryption_is_des = 0, encryption_is_none = 0`. Never add an explicit
//! indicator for the implicit category.
//!
//! Reorder, add or remove a feature → increment FEATURE_VERSION.

use crc32fast::Hasher;
use serde::Serialize;

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Numeric (0-4) ===
    "packet_size",           // 0
    "login_attempts",        // 1
    "session_duration",      // 2
    "ip_reputation",         // 3
    "failed_logins",         // 4

    // === Flag (5) ===
    "unusual_access",        // 5: checkbox as 0/1

    // === Protocol one-hot, ICMP implicit (6-7) ===
    "protocol_is_tcp",       // 6
    "protocol_is_udp",       // 7

    // === Encryption one-hot, AES implicit (8-9) ===
    "encryption_is_des",     // 8
    "encryption_is_none",    // 9
];

/// Total number of features
pub const FEATURE_COUNT: usize = 10;

/// CRC32 of the version byte and the NUL-separated feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

/// Layout information served by the layout endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: String,
    pub feature_count: usize,
    pub feature_names: Vec<&'static str>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: format!("{:08x}", layout_hash()),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.to_vec(),
        }
    }
}

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}
