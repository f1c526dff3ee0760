//! Transaction signing seam.
//!
//! [`WalletProvider`] is the boundary between call construction and key
//! custody: the contract client builds an [`UnsignedTransaction`], the
//! provider returns raw signed bytes ready for `eth_sendRawTransaction`.
//! [`LocalWallet`] signs in-process from a private key; hardware or remote
//! signers implement the same trait.

use alloy::consensus::{SignableTransaction, TxEip1559, TxEnvelope};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::TxSignerSync;
use alloy::primitives::{Address, Bytes, TxKind, U256};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;

use enskit_core::error::{EnsError, Result};

/// An EIP-1559 transaction with every field filled, ready for signing.
#[derive(Clone, Debug)]
pub struct UnsignedTransaction {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Sender nonce.
    pub nonce: u64,
    /// Recipient contract.
    pub to: Address,
    /// Value in wei.
    pub value: U256,
    /// ABI-encoded calldata.
    pub input: Bytes,
    /// Gas limit.
    pub gas_limit: u128,
    /// Fee cap per gas.
    pub max_fee_per_gas: u128,
    /// Priority fee per gas.
    pub max_priority_fee_per_gas: u128,
}

/// Signs transactions on behalf of one account.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// The account this wallet signs for.
    fn address(&self) -> Address;

    /// Signs the transaction and returns the EIP-2718 encoded raw bytes.
    async fn sign_transaction(&self, tx: UnsignedTransaction) -> Result<Vec<u8>>;
}

/// In-process wallet backed by a secp256k1 private key.
pub struct LocalWallet {
    signer: PrivateKeySigner,
}

impl LocalWallet {
    /// Wraps an existing signer.
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    /// Parses a hex private key, with or without the `0x` prefix.
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let trimmed = private_key.trim().trim_start_matches("0x");
        let signer: PrivateKeySigner = trimmed
            .parse()
            .map_err(|e| EnsError::Config(format!("invalid private key: {e}")))?;
        Ok(Self { signer })
    }
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print key material
        f.debug_struct("LocalWallet")
            .field("address", &self.signer.address())
            .finish()
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn sign_transaction(&self, tx: UnsignedTransaction) -> Result<Vec<u8>> {
        let mut inner = TxEip1559 {
            chain_id: tx.chain_id,
            nonce: tx.nonce,
            gas_limit: tx.gas_limit,
            max_fee_per_gas: tx.max_fee_per_gas,
            max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
            to: TxKind::Call(tx.to),
            value: tx.value,
            access_list: Default::default(),
            input: tx.input,
        };

        let signature = self
            .signer
            .sign_transaction_sync(&mut inner)
            .map_err(|e| EnsError::Signer(e.to_string()))?;

        let envelope = TxEnvelope::Eip1559(inner.into_signed(signature));
        Ok(envelope.encoded_2718())
    }
}
