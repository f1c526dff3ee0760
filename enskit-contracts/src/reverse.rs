//! Reverse registrar client.
//!
//! The reverse registrar manages `<address>.addr.reverse` nodes, which back
//! primary-name resolution. Authorization for third-party updates is
//! checked by the contract, not here.

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::SolCall;
use tracing::instrument;

use enskit_core::constants;
use enskit_core::error::Result;
use enskit_core::TransactionReceipt;

use crate::abi::IReverseRegistrar;
use crate::client::ContractClient;

/// Client for the ENS reverse registrar.
pub struct ReverseRegistrar {
    client: Arc<ContractClient>,
    address: Address,
}

impl ReverseRegistrar {
    /// Creates a reverse registrar bound to the deployment for the
    /// client's network.
    pub fn new(client: Arc<ContractClient>) -> Self {
        let address = constants::reverse_registrar_address(client.network());
        Self { client, address }
    }

    /// Creates a reverse registrar bound to an explicit contract address.
    pub fn at(client: Arc<ContractClient>, address: Address) -> Self {
        Self { client, address }
    }

    /// The reverse registrar contract address this client talks to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Computes the reverse node for an address.
    #[instrument(skip(self))]
    pub async fn node(&self, address: Address) -> Result<B256> {
        let call = IReverseRegistrar::nodeCall { addr: address };
        let ret = self.client.read(self.address, call.abi_encode().into()).await?;
        Ok(IReverseRegistrar::nodeCall::abi_decode_returns(&ret, true)?.node)
    }

    /// Sets the caller's own primary name.
    #[instrument(skip(self))]
    pub async fn set_name(&self, name: &str) -> Result<TransactionReceipt> {
        let call = IReverseRegistrar::setNameCall { name: name.into() };
        self.client
            .write(self.address, call.abi_encode().into(), U256::ZERO)
            .await
    }

    /// Sets the primary name for another address.
    ///
    /// The caller must be authorized for `address` on-chain.
    #[instrument(skip(self))]
    pub async fn set_name_for_addr(
        &self,
        address: Address,
        owner: Address,
        resolver: Address,
        name: &str,
    ) -> Result<TransactionReceipt> {
        let call = IReverseRegistrar::setNameForAddrCall {
            addr: address,
            owner,
            resolver,
            name: name.into(),
        };
        self.client
            .write(self.address, call.abi_encode().into(), U256::ZERO)
            .await
    }
}
