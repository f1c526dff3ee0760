//! Error types for enskit.
//!
//! One `thiserror` hierarchy covering every operation. No retries happen
//! anywhere in this workspace; each failure is surfaced to the caller as-is.

use alloy::primitives::B256;
use thiserror::Error;

/// Result type alias using [`EnsError`].
pub type Result<T> = std::result::Result<T, EnsError>;

/// Main error type for all enskit operations.
#[derive(Debug, Error)]
pub enum EnsError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Missing or invalid configuration, raised before any network call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The named network is not one of the supported Ethereum networks.
    #[error("Unsupported network: {0} (expected 'mainnet' or 'sepolia')")]
    UnsupportedNetwork(String),

    /// A write operation was attempted on a client without a wallet.
    #[error("No wallet configured: write operations require a signer")]
    MissingWallet,

    // ═══════════════════════════════════════════════════════════════════════════
    // DOMAIN ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// An ENS name failed validation.
    #[error("Invalid ENS name: {0}")]
    InvalidName(String),

    /// A commitment secret does not fit in 32 bytes once encoded.
    #[error("Secret too long: {length} encoded bytes exceed the 32-byte limit")]
    SecretTooLong {
        /// Length of the percent-encoded secret in bytes.
        length: usize,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // ON-CHAIN ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The pre-flight simulation of a write reverted.
    #[error("Transaction would revert: {message}")]
    Revert {
        /// Revert reason reported by the node.
        message: String,
        /// Raw revert data, when the node provides it.
        data: Option<String>,
    },

    /// No receipt appeared for a broadcast transaction within the deadline.
    #[error("Timed out waiting for receipt of transaction {tx_hash}")]
    ReceiptTimeout {
        /// Hash of the transaction that was broadcast.
        tx_hash: B256,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // TRANSPORT & ENCODING ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The HTTP layer failed before a JSON-RPC response was obtained.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
        /// Optional error data (revert payloads land here).
        data: Option<String>,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),

    /// ABI decoding of a contract response failed.
    #[error("ABI decoding failed: {0}")]
    AbiDecode(#[from] alloy::sol_types::Error),

    /// Transaction signing failed.
    #[error("Signing failed: {0}")]
    Signer(String),
}

impl EnsError {
    /// Returns true if this error was raised by local configuration,
    /// before anything was sent over the wire.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EnsError::Config(_) | EnsError::UnsupportedNetwork(_) | EnsError::MissingWallet
        )
    }

    /// Returns true if this error came from the transport layer rather
    /// than from contract or input semantics.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, EnsError::Http(_) | EnsError::Rpc { .. })
    }

    /// Returns true if the failure happened on-chain (revert) or while
    /// waiting for inclusion.
    pub fn is_chain_error(&self) -> bool {
        matches!(self, EnsError::Revert { .. } | EnsError::ReceiptTimeout { .. })
    }
}
