//! SHA-256 digests of analyzed strings.
//!
//! The digest doubles as the record identifier in the store, so it must be a
//! pure function of the UTF-8 bytes of the input:
//!
//! ```text
//! SHA-256(value_utf8_bytes) → 64 lowercase hex chars
//! ```
//!
//! ```rust
//! use analyzer::sha256_hex;
//!
//! let hash = sha256_hex("hello");
//! assert_eq!(hash.len(), 64);
//! assert_eq!(hash, sha256_hex("hello"));
//! ```

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// Hash `value` with SHA-256 and return the lowercase hex digest.
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
