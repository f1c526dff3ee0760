//! Domain types for enskit.
//!
//! - [`RegistrationRequest`]: everything needed to commit to and register a name
//! - [`TextRecord`]: one resolver key/value pair
//! - [`RentPrice`]: base/premium registration pricing
//! - [`TransactionReceipt`]: the mined result of a write operation

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::constants::ETH_TLD;

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Parameters for registering an ENS name through the controller.
///
/// One request drives both halves of the commit/register flow; `commit` and
/// `register` must be called with identical requests or the on-chain
/// commitment will not match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// The label to register, without the `.eth` suffix.
    pub label: String,
    /// Address that will own the name.
    pub owner: Address,
    /// Registration duration in seconds.
    pub duration: u64,
    /// Commitment secret; must fit in 32 bytes once percent-encoded.
    pub secret: String,
    /// Resolver the name will be configured with.
    pub resolver: Address,
    /// Whether to also set the owner's primary (reverse) name.
    pub set_as_primary: bool,
    /// Fuse bitmask applied to the wrapped name.
    pub fuses: u16,
}

impl RegistrationRequest {
    /// Returns the label trimmed and lowercased.
    ///
    /// The namehash is case-sensitive, so the same normalization must be
    /// applied everywhere the label appears.
    pub fn normalized_label(&self) -> String {
        self.label.trim().to_lowercase()
    }

    /// Returns the full dotted name, e.g. `alice.eth`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.normalized_label(), ETH_TLD)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEXT RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// One resolver text record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Record key, e.g. `avatar` or `com.twitter`.
    pub key: String,
    /// Record value.
    pub value: String,
}

impl TextRecord {
    /// Creates a new text record.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PRICING
// ═══════════════════════════════════════════════════════════════════════════════

/// Registration price quote from the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentPrice {
    /// Base price in wei.
    pub base: U256,
    /// Premium in wei (non-zero shortly after a name expires).
    pub premium: U256,
}

impl RentPrice {
    /// Returns `base + premium`, the value a registration must send.
    pub fn total(&self) -> U256 {
        self.base + self.premium
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECEIPTS
// ═══════════════════════════════════════════════════════════════════════════════

/// A log emitted during transaction execution.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Contract that emitted the log.
    pub address: Address,
    /// Indexed topics.
    pub topics: Vec<B256>,
    /// Unindexed data.
    pub data: Bytes,
}

/// The mined result of a write operation, as returned by
/// `eth_getTransactionReceipt`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the transaction.
    pub transaction_hash: B256,
    /// Hash of the block the transaction landed in.
    pub block_hash: Option<B256>,
    /// Number of that block.
    pub block_number: Option<U256>,
    /// Sender.
    pub from: Address,
    /// Recipient contract.
    pub to: Option<Address>,
    /// Gas consumed by this transaction.
    pub gas_used: U256,
    /// Effective gas price paid.
    pub effective_gas_price: Option<U256>,
    /// Post-Byzantium status flag: 1 for success, 0 for failure.
    pub status: Option<U256>,
    /// Logs emitted during execution.
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl TransactionReceipt {
    /// Returns true if the transaction executed successfully.
    pub fn is_success(&self) -> bool {
        self.status.map(|s| s == U256::from(1)).unwrap_or(false)
    }
}
