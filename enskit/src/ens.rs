//! The `Ens` facade.
//!
//! Bundles the controller, resolver and reverse registrar behind one
//! handle. Components share a single [`ContractClient`], so they agree on
//! network, transport and wallet; each method forwards to exactly one
//! component.

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use tracing::info;

use enskit_contracts::{
    ClientConfig, ContractClient, Controller, Resolver, ReverseRegistrar, TxOptions,
    WalletProvider,
};
use enskit_core::error::{EnsError, Result};
use enskit_core::{Network, RegistrationRequest, RentPrice, TextRecord, TransactionReceipt};

/// Builder for [`Ens`].
///
/// `network` and `rpc_url` are mandatory; everything else has defaults.
/// Validation happens in [`build`](Self::build), before any network call.
#[derive(Default)]
pub struct EnsBuilder {
    network: Option<Network>,
    rpc_url: Option<String>,
    wallet: Option<Arc<dyn WalletProvider>>,
    tx_options: TxOptions,
    timeout_seconds: Option<u64>,
    receipt_timeout_seconds: Option<u64>,
}

impl EnsBuilder {
    /// Selects the network. Determines every contract address.
    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    /// Sets the JSON-RPC node URL.
    pub fn rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Attaches a wallet; required for write operations.
    pub fn wallet(mut self, wallet: Arc<dyn WalletProvider>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Applies per-transaction overrides to every write.
    pub fn tx_options(mut self, options: TxOptions) -> Self {
        self.tx_options = options;
        self
    }

    /// Overrides the per-request HTTP timeout.
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Overrides how long writes wait for a receipt.
    pub fn receipt_timeout_seconds(mut self, seconds: u64) -> Self {
        self.receipt_timeout_seconds = Some(seconds);
        self
    }

    /// Builds the facade.
    ///
    /// # Errors
    ///
    /// [`EnsError::Config`] when the network or RPC URL is missing or the
    /// URL does not parse. Nothing goes over the wire here.
    pub fn build(self) -> Result<Ens> {
        let network = self
            .network
            .ok_or_else(|| EnsError::Config("network is required".into()))?;
        let rpc_url = self
            .rpc_url
            .ok_or_else(|| EnsError::Config("rpc_url is required".into()))?;

        let mut config = ClientConfig::new(network, rpc_url);
        if let Some(seconds) = self.timeout_seconds {
            config.timeout_seconds = seconds;
        }
        if let Some(seconds) = self.receipt_timeout_seconds {
            config.receipt_timeout_seconds = seconds;
        }

        let mut client = ContractClient::new(config)?.with_tx_options(self.tx_options);
        if let Some(wallet) = self.wallet {
            client = client.with_wallet(wallet);
        }
        let client = Arc::new(client);

        info!(%network, "ENS client initialized");

        Ok(Ens {
            controller: Controller::new(Arc::clone(&client)),
            resolver: Resolver::new(Arc::clone(&client)),
            reverse_registrar: ReverseRegistrar::new(Arc::clone(&client)),
            client,
        })
    }
}

/// One-stop ENS client.
pub struct Ens {
    client: Arc<ContractClient>,
    controller: Controller,
    resolver: Resolver,
    reverse_registrar: ReverseRegistrar,
}

impl std::fmt::Debug for Ens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ens")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Ens {
    /// Starts building an [`Ens`] client.
    pub fn builder() -> EnsBuilder {
        EnsBuilder::default()
    }

    /// The shared contract client.
    pub fn client(&self) -> &Arc<ContractClient> {
        &self.client
    }

    /// The registration controller component.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The public resolver component.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The reverse registrar component.
    pub fn reverse_registrar(&self) -> &ReverseRegistrar {
        &self.reverse_registrar
    }

    // ─── controller ────────────────────────────────────────────────────────

    /// Quotes the registration price for a label and duration.
    pub async fn rent_price(&self, label: &str, duration: u64) -> Result<RentPrice> {
        self.controller.rent_price(label, duration).await
    }

    /// Returns `base + premium` for a label and duration.
    pub async fn estimate_price(&self, label: &str, duration: u64) -> Result<U256> {
        self.controller.estimate_price(label, duration).await
    }

    /// Publishes a registration commitment.
    pub async fn commit(&self, request: &RegistrationRequest) -> Result<TransactionReceipt> {
        self.controller.commit(request).await
    }

    /// Registers a name after its commitment has matured.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<TransactionReceipt> {
        self.controller.register(request).await
    }

    // ─── resolver ──────────────────────────────────────────────────────────

    /// Writes and removes text records in one transaction.
    pub async fn set_text_records(
        &self,
        name: &str,
        updates: &[TextRecord],
        removals: &[String],
    ) -> Result<TransactionReceipt> {
        self.resolver.set_text_records(name, updates, removals).await
    }

    /// Reads text records; keys with empty values are omitted.
    pub async fn get_text_records(
        &self,
        name: &str,
        keys: &[String],
    ) -> Result<Vec<TextRecord>> {
        self.resolver.get_text_records(name, keys).await
    }

    /// Sets the address record for a name.
    pub async fn set_address(&self, name: &str, address: Address) -> Result<TransactionReceipt> {
        self.resolver.set_address(name, address).await
    }

    /// Reads the address record for a name.
    pub async fn get_address(&self, name: &str) -> Result<Address> {
        self.resolver.get_address(name).await
    }

    /// Reverse lookup: the name stored for a node hash.
    pub async fn get_name(&self, node: B256) -> Result<String> {
        self.resolver.get_name(node).await
    }

    // ─── reverse registrar ─────────────────────────────────────────────────

    /// Computes the reverse node for an address.
    pub async fn node(&self, address: Address) -> Result<B256> {
        self.reverse_registrar.node(address).await
    }

    /// Sets the caller's own primary name.
    pub async fn set_name(&self, name: &str) -> Result<TransactionReceipt> {
        self.reverse_registrar.set_name(name).await
    }

    /// Sets the primary name for another address.
    pub async fn set_name_for_addr(
        &self,
        address: Address,
        owner: Address,
        resolver: Address,
        name: &str,
    ) -> Result<TransactionReceipt> {
        self.reverse_registrar
            .set_name_for_addr(address, owner, resolver, name)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enskit_core::constants;

    #[test]
    fn test_build_without_network_fails() {
        let err = Ens::builder().rpc_url("http://localhost:8545").build().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("network"));
    }

    #[test]
    fn test_build_without_rpc_url_fails() {
        let err = Ens::builder().network(Network::Mainnet).build().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("rpc_url"));
    }

    #[test]
    fn test_build_with_invalid_url_fails() {
        let err = Ens::builder()
            .network(Network::Mainnet)
            .rpc_url("::not-a-url::")
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_components_bind_network_addresses() {
        for network in [Network::Mainnet, Network::Sepolia] {
            let ens = Ens::builder()
                .network(network)
                .rpc_url("http://localhost:8545")
                .build()
                .unwrap();

            assert_eq!(
                ens.controller().address(),
                constants::controller_address(network)
            );
            assert_eq!(
                ens.resolver().address(),
                constants::resolver_address(network)
            );
            assert_eq!(
                ens.reverse_registrar().address(),
                constants::reverse_registrar_address(network)
            );
        }
    }
}
