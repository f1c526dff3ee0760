//! Shared contract read/write capability.
//!
//! One [`ContractClient`] owns the network choice, the RPC transport and an
//! optional wallet; the contract-specific components each hold an `Arc` of
//! it and add nothing but call encoding. All fields are set at construction
//! and never mutated, so a client can be shared freely across tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, instrument};

use enskit_core::error::{EnsError, Result};
use enskit_core::{Network, TransactionReceipt};

use crate::rpc::RpcClient;
use crate::wallet::{UnsignedTransaction, WalletProvider};

/// Configuration for a [`ContractClient`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Network the client is bound to.
    pub network: Network,
    /// JSON-RPC node URL.
    pub rpc_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// How long to wait for a transaction receipt before giving up.
    pub receipt_timeout_seconds: u64,
    /// Receipt polling interval in milliseconds.
    pub receipt_poll_interval_ms: u64,
}

impl ClientConfig {
    /// Creates a configuration with default timeouts.
    pub fn new(network: Network, rpc_url: impl Into<String>) -> Self {
        Self {
            network,
            rpc_url: rpc_url.into(),
            timeout_seconds: 30,
            receipt_timeout_seconds: 120,
            receipt_poll_interval_ms: 1_000,
        }
    }
}

/// Per-transaction overrides for the write path.
///
/// Any field left `None` is filled from the node at send time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TxOptions {
    /// Fixed nonce.
    pub nonce: Option<u64>,
    /// Fixed gas limit.
    pub gas_limit: Option<u128>,
    /// Fixed fee cap per gas, in wei.
    pub max_fee_per_gas: Option<u128>,
    /// Fixed priority fee per gas, in wei.
    pub max_priority_fee_per_gas: Option<u128>,
}

/// Generic contract read/write client.
pub struct ContractClient {
    rpc: RpcClient,
    network: Network,
    wallet: Option<Arc<dyn WalletProvider>>,
    tx_options: TxOptions,
    receipt_timeout: Duration,
    receipt_poll_interval: Duration,
}

impl std::fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("rpc", &self.rpc)
            .field("network", &self.network)
            .field("wallet", &self.wallet.as_ref().map(|w| w.address()))
            .field("tx_options", &self.tx_options)
            .field("receipt_timeout", &self.receipt_timeout)
            .field("receipt_poll_interval", &self.receipt_poll_interval)
            .finish()
    }
}

impl ContractClient {
    /// Creates a read-only client.
    ///
    /// Fails synchronously on an invalid RPC URL; no network traffic
    /// happens here.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let rpc = RpcClient::new(
            &config.rpc_url,
            Duration::from_secs(config.timeout_seconds),
        )?;

        Ok(Self {
            rpc,
            network: config.network,
            wallet: None,
            tx_options: TxOptions::default(),
            receipt_timeout: Duration::from_secs(config.receipt_timeout_seconds),
            receipt_poll_interval: Duration::from_millis(config.receipt_poll_interval_ms),
        })
    }

    /// Attaches a wallet, enabling write operations.
    pub fn with_wallet(mut self, wallet: Arc<dyn WalletProvider>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Applies per-transaction overrides to every write.
    pub fn with_tx_options(mut self, options: TxOptions) -> Self {
        self.tx_options = options;
        self
    }

    /// The network this client is bound to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The signing account, when a wallet is attached.
    pub fn wallet_address(&self) -> Option<Address> {
        self.wallet.as_ref().map(|w| w.address())
    }

    /// The underlying JSON-RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Invokes a read-only contract function via `eth_call`.
    #[instrument(skip(self, data))]
    pub async fn read(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let call = json!({ "to": to, "data": data });
        self.rpc.request("eth_call", json!([call, "latest"])).await
    }

    /// Submits a state-changing call: simulate, sign, broadcast, await
    /// the receipt.
    ///
    /// The simulation runs first so a revert surfaces as
    /// [`EnsError::Revert`] before any gas is spent. Requires a wallet.
    #[instrument(skip(self, data))]
    pub async fn write(
        &self,
        to: Address,
        data: Bytes,
        value: U256,
    ) -> Result<TransactionReceipt> {
        let wallet = self.wallet.clone().ok_or(EnsError::MissingWallet)?;
        let from = wallet.address();

        let call = json!({ "from": from, "to": to, "data": data.clone(), "value": value });

        if let Err(err) = self
            .rpc
            .request::<Bytes>("eth_call", json!([call.clone(), "latest"]))
            .await
        {
            return Err(match err {
                EnsError::Rpc { message, data, .. } => EnsError::Revert { message, data },
                other => other,
            });
        }

        let nonce = match self.tx_options.nonce {
            Some(nonce) => nonce,
            None => {
                self.rpc
                    .request::<U256>("eth_getTransactionCount", json!([from, "pending"]))
                    .await?
                    .to::<u64>()
            }
        };

        let gas_limit = match self.tx_options.gas_limit {
            Some(gas) => gas,
            None => {
                self.rpc
                    .request::<U256>("eth_estimateGas", json!([call]))
                    .await?
                    .to::<u128>()
            }
        };

        let max_priority_fee_per_gas = match self.tx_options.max_priority_fee_per_gas {
            Some(fee) => fee,
            None => {
                self.rpc
                    .request::<U256>("eth_maxPriorityFeePerGas", json!([]))
                    .await?
                    .to::<u128>()
            }
        };

        let max_fee_per_gas = match self.tx_options.max_fee_per_gas {
            Some(fee) => fee,
            None => {
                let gas_price = self
                    .rpc
                    .request::<U256>("eth_gasPrice", json!([]))
                    .await?
                    .to::<u128>();
                gas_price.max(max_priority_fee_per_gas)
            }
        };

        let unsigned = UnsignedTransaction {
            chain_id: self.network.chain_id(),
            nonce,
            to,
            value,
            input: data,
            gas_limit,
            max_fee_per_gas,
            max_priority_fee_per_gas,
        };

        let raw = wallet.sign_transaction(unsigned).await?;
        let tx_hash: B256 = self
            .rpc
            .request("eth_sendRawTransaction", json!([Bytes::from(raw)]))
            .await?;

        info!(%tx_hash, "transaction broadcast");

        self.await_receipt(tx_hash).await
    }

    async fn await_receipt(&self, tx_hash: B256) -> Result<TransactionReceipt> {
        let deadline = Instant::now() + self.receipt_timeout;

        loop {
            let receipt: Option<TransactionReceipt> = self
                .rpc
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;

            if let Some(receipt) = receipt {
                debug!(%tx_hash, "receipt received");
                return Ok(receipt);
            }
            if Instant::now() >= deadline {
                return Err(EnsError::ReceiptTimeout { tx_hash });
            }

            tokio::time::sleep(self.receipt_poll_interval).await;
        }
    }
}
