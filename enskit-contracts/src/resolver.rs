//! Public resolver client.
//!
//! Text and address records live on the public resolver, keyed by the
//! namehash of the (normalized) name. Batch operations go through the
//! resolver's own `multicall`, so a set of record updates is one
//! transaction.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol_types::SolCall;
use tracing::{debug, instrument};

use enskit_core::constants;
use enskit_core::error::Result;
use enskit_core::name::{namehash, normalize};
use enskit_core::{TextRecord, TransactionReceipt};

use crate::abi::IPublicResolver;
use crate::client::ContractClient;

/// Client for the ENS public resolver.
pub struct Resolver {
    client: Arc<ContractClient>,
    address: Address,
}

impl Resolver {
    /// Creates a resolver bound to the deployment for the client's network.
    pub fn new(client: Arc<ContractClient>) -> Self {
        let address = constants::resolver_address(client.network());
        Self { client, address }
    }

    /// Creates a resolver bound to an explicit contract address.
    pub fn at(client: Arc<ContractClient>, address: Address) -> Self {
        Self { client, address }
    }

    /// The resolver contract address this client talks to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Writes and removes text records in one multicall transaction.
    ///
    /// Removal is `setText(key, "")`; the resolver has no delete. Atomicity
    /// is whatever the on-chain multicall provides.
    #[instrument(skip(self, updates, removals), fields(updates = updates.len(), removals = removals.len()))]
    pub async fn set_text_records(
        &self,
        name: &str,
        updates: &[TextRecord],
        removals: &[String],
    ) -> Result<TransactionReceipt> {
        let name = normalize(name)?;
        let node = namehash(&name);

        let mut data: Vec<Bytes> = Vec::with_capacity(updates.len() + removals.len());
        for record in updates {
            data.push(
                IPublicResolver::setTextCall {
                    node,
                    key: record.key.clone(),
                    value: record.value.clone(),
                }
                .abi_encode()
                .into(),
            );
        }
        for key in removals {
            data.push(
                IPublicResolver::setTextCall {
                    node,
                    key: key.clone(),
                    value: String::new(),
                }
                .abi_encode()
                .into(),
            );
        }

        let call = IPublicResolver::multicallCall { data };
        self.client
            .write(self.address, call.abi_encode().into(), U256::ZERO)
            .await
    }

    /// Reads text records for the given keys in one multicall.
    ///
    /// Keys whose value decodes to the empty string are omitted from the
    /// result: at the contract level an empty record is indistinguishable
    /// from one that was never set.
    #[instrument(skip(self, keys), fields(keys = keys.len()))]
    pub async fn get_text_records(
        &self,
        name: &str,
        keys: &[String],
    ) -> Result<Vec<TextRecord>> {
        let name = normalize(name)?;
        let node = namehash(&name);

        let data: Vec<Bytes> = keys
            .iter()
            .map(|key| {
                IPublicResolver::textCall {
                    node,
                    key: key.clone(),
                }
                .abi_encode()
                .into()
            })
            .collect();

        let call = IPublicResolver::multicallCall { data };
        let ret = self.client.read(self.address, call.abi_encode().into()).await?;
        let results = IPublicResolver::multicallCall::abi_decode_returns(&ret, true)?.results;

        let mut records = Vec::new();
        for (key, result) in keys.iter().zip(results) {
            let value = IPublicResolver::textCall::abi_decode_returns(&result, true)?.value;
            if value.is_empty() {
                debug!(key, "dropping empty text record");
                continue;
            }
            records.push(TextRecord {
                key: key.clone(),
                value,
            });
        }

        Ok(records)
    }

    /// Sets the address record for a name.
    #[instrument(skip(self))]
    pub async fn set_address(
        &self,
        name: &str,
        address: Address,
    ) -> Result<TransactionReceipt> {
        let name = normalize(name)?;
        let call = IPublicResolver::setAddrCall {
            node: namehash(&name),
            addr: address,
        };
        self.client
            .write(self.address, call.abi_encode().into(), U256::ZERO)
            .await
    }

    /// Reads the address record for a name.
    #[instrument(skip(self))]
    pub async fn get_address(&self, name: &str) -> Result<Address> {
        let name = normalize(name)?;
        let call = IPublicResolver::addrCall {
            node: namehash(&name),
        };
        let ret = self.client.read(self.address, call.abi_encode().into()).await?;
        Ok(IPublicResolver::addrCall::abi_decode_returns(&ret, true)?.addr)
    }

    /// Reverse lookup: the name stored for a node hash.
    #[instrument(skip(self))]
    pub async fn get_name(&self, node: B256) -> Result<String> {
        let call = IPublicResolver::nameCall { node };
        let ret = self.client.read(self.address, call.abi_encode().into()).await?;
        Ok(IPublicResolver::nameCall::abi_decode_returns(&ret, true)?.value)
    }
}
