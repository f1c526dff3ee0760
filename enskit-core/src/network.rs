//! Network selection.
//!
//! ENS lives on Ethereum mainnet and on the Sepolia test network; every
//! component resolves its contract address from this choice once, at
//! construction time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnsError;

/// The Ethereum network a client is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet (chain id 1).
    Mainnet,
    /// Sepolia test network (chain id 11155111).
    Sepolia,
}

impl Network {
    /// Returns the EIP-155 chain id for this network.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11_155_111,
        }
    }

    /// Returns the canonical lowercase name of this network.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = EnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "ethereum" => Ok(Network::Mainnet),
            "sepolia" | "ethereum-sepolia" => Ok(Network::Sepolia),
            other => Err(EnsError::UnsupportedNetwork(other.to_string())),
        }
    }
}
