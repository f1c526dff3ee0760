//! ENS name normalization and hashing.
//!
//! The namehash algorithm folds keccak-256 over the labels of a dotted name,
//! right to left. It is case-sensitive, so names are trimmed and lowercased
//! here before hashing; callers never need to normalize themselves.

use alloy::primitives::{keccak256, B256};

use crate::error::{EnsError, Result};

/// Normalizes an ENS name: trims whitespace and lowercases.
///
/// Returns an error for empty names. Hashing an unnormalized name would
/// silently address a different node, so every component goes through this
/// before touching the chain.
pub fn normalize(name: &str) -> Result<String> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(EnsError::InvalidName("name cannot be empty".into()));
    }
    Ok(normalized)
}

/// Computes the ENS namehash of a dotted name.
///
/// The input is normalized first, so `namehash("Foo.eth")` and
/// `namehash("foo.eth")` produce the same node. The empty name hashes to
/// the zero node, per the algorithm's base case.
pub fn namehash(name: &str) -> B256 {
    let name = name.trim().to_lowercase();

    let mut node = [0u8; 32];
    for label in name.rsplit('.') {
        if label.is_empty() {
            continue;
        }

        let label_hash = keccak256(label.as_bytes());

        let mut combined = [0u8; 64];
        combined[..32].copy_from_slice(&node);
        combined[32..].copy_from_slice(label_hash.as_slice());

        node = keccak256(combined).0;
    }

    B256::from(node)
}
