//! # enskit core
//!
//! Core types, errors and encoding primitives for the enskit ENS toolkit.
//!
//! This crate provides the foundational building blocks used by the other
//! enskit crates:
//!
//! - **Types**: domain models for registrations, text records and receipts
//! - **Errors**: one error enum covering configuration, transport and
//!   on-chain failures
//! - **Constants**: the fixed per-network ENS contract addresses
//! - **Name handling**: normalization and the ENS namehash
//! - **Secret encoding**: the 32-byte commitment secret format
//!
//! ## Example
//!
//! ```rust
//! use enskit_core::name::namehash;
//!
//! let node = namehash("alice.eth");
//! assert_eq!(node, namehash("Alice.eth"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod constants;
pub mod error;
pub mod name;
pub mod network;
pub mod secret;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{EnsError, Result};
pub use network::Network;
pub use types::*;
