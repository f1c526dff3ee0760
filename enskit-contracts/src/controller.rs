//! Registration controller client.
//!
//! Registration is two-phase: `commit` publishes a hash of the request,
//! `register` redeems it after the on-chain minimum age. Both phases must
//! derive byte-identical arguments or the controller rejects the
//! registration, so all derivation goes through one helper.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use tracing::{info, instrument};

use enskit_core::constants;
use enskit_core::error::Result;
use enskit_core::name::namehash;
use enskit_core::secret::encode_secret;
use enskit_core::{RegistrationRequest, RentPrice, TransactionReceipt};

use crate::abi::{IEthRegistrarController, IPublicResolver};
use crate::client::ContractClient;

/// Client for the ENS registration controller.
pub struct Controller {
    client: Arc<ContractClient>,
    address: Address,
}

impl Controller {
    /// Creates a controller bound to the deployment for the client's
    /// network.
    pub fn new(client: Arc<ContractClient>) -> Self {
        let address = constants::controller_address(client.network());
        Self { client, address }
    }

    /// Creates a controller bound to an explicit contract address.
    pub fn at(client: Arc<ContractClient>, address: Address) -> Self {
        Self { client, address }
    }

    /// The controller contract address this client talks to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Quotes the registration price for a label and duration.
    #[instrument(skip(self))]
    pub async fn rent_price(&self, label: &str, duration: u64) -> Result<RentPrice> {
        let call = IEthRegistrarController::rentPriceCall {
            name: label.trim().to_lowercase(),
            duration: U256::from(duration),
        };
        let ret = self.client.read(self.address, call.abi_encode().into()).await?;
        let price =
            IEthRegistrarController::rentPriceCall::abi_decode_returns(&ret, true)?.price;

        Ok(RentPrice {
            base: price.base,
            premium: price.premium,
        })
    }

    /// Returns `base + premium` for a label and duration.
    pub async fn estimate_price(&self, label: &str, duration: u64) -> Result<U256> {
        Ok(self.rent_price(label, duration).await?.total())
    }

    /// Publishes the registration commitment.
    ///
    /// Computes the commitment hash via the contract's `makeCommitment`
    /// (read), then submits `commit` (write). The subsequent
    /// [`register`](Self::register) call must use the same request and
    /// happen within the controller's commitment window.
    #[instrument(skip(self, request), fields(label = %request.label))]
    pub async fn commit(&self, request: &RegistrationRequest) -> Result<TransactionReceipt> {
        let call = make_commitment_call(request)?;
        let ret = self.client.read(self.address, call.abi_encode().into()).await?;
        let commitment =
            IEthRegistrarController::makeCommitmentCall::abi_decode_returns(&ret, true)?
                .commitment;

        info!(%commitment, "submitting registration commitment");

        let commit = IEthRegistrarController::commitCall { commitment };
        self.client
            .write(self.address, commit.abi_encode().into(), U256::ZERO)
            .await
    }

    /// Registers the name, sending `base + premium` as the transaction
    /// value.
    ///
    /// Derives the same arguments as [`commit`](Self::commit); the delay
    /// between the two calls is enforced on-chain, not here.
    #[instrument(skip(self, request), fields(label = %request.label))]
    pub async fn register(&self, request: &RegistrationRequest) -> Result<TransactionReceipt> {
        let total = self
            .estimate_price(&request.normalized_label(), request.duration)
            .await?;
        let call = register_call(request)?;

        info!(value = %total, "submitting registration");

        self.client
            .write(self.address, call.abi_encode().into(), total)
            .await
    }
}

/// Calldata configuring the resolver's address record for the new name,
/// passed to the controller so registration and record setup land in one
/// transaction.
fn set_addr_data(request: &RegistrationRequest) -> Bytes {
    IPublicResolver::setAddrCall {
        node: namehash(&request.full_name()),
        addr: request.owner,
    }
    .abi_encode()
    .into()
}

fn make_commitment_call(
    request: &RegistrationRequest,
) -> Result<IEthRegistrarController::makeCommitmentCall> {
    Ok(IEthRegistrarController::makeCommitmentCall {
        label: request.normalized_label(),
        owner: request.owner,
        duration: U256::from(request.duration),
        secret: encode_secret(&request.secret)?,
        resolver: request.resolver,
        data: vec![set_addr_data(request)],
        reverseRecord: request.set_as_primary,
        ownerControlledFuses: request.fuses,
    })
}

fn register_call(
    request: &RegistrationRequest,
) -> Result<IEthRegistrarController::registerCall> {
    Ok(IEthRegistrarController::registerCall {
        label: request.normalized_label(),
        owner: request.owner,
        duration: U256::from(request.duration),
        secret: encode_secret(&request.secret)?,
        resolver: request.resolver,
        data: vec![set_addr_data(request)],
        reverseRecord: request.set_as_primary,
        ownerControlledFuses: request.fuses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use enskit_core::EnsError;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            label: "Alice".into(),
            owner: address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            duration: 31_536_000,
            secret: "hunter2".into(),
            resolver: address!("231b0ee14048e9dccd1d247744d114a4eb5e8e63"),
            set_as_primary: true,
            fuses: 0,
        }
    }

    #[test]
    fn test_commit_and_register_derive_identical_arguments() {
        let request = request();
        let commitment = make_commitment_call(&request).unwrap().abi_encode();
        let register = register_call(&request).unwrap().abi_encode();

        // same argument tuple behind different selectors
        assert_ne!(commitment[..4], register[..4]);
        assert_eq!(commitment[4..], register[4..]);
    }

    #[test]
    fn test_label_case_does_not_change_the_commitment() {
        let mut upper = request();
        upper.label = "ALICE".into();
        let mut lower = request();
        lower.label = "alice".into();

        assert_eq!(
            make_commitment_call(&upper).unwrap().abi_encode(),
            make_commitment_call(&lower).unwrap().abi_encode()
        );
    }

    #[test]
    fn test_oversized_secret_is_rejected_before_encoding() {
        let mut bad = request();
        bad.secret = "x".repeat(40);
        assert!(matches!(
            make_commitment_call(&bad),
            Err(EnsError::SecretTooLong { .. })
        ));
    }

    #[test]
    fn test_set_addr_data_targets_the_full_name_node() {
        let request = request();
        let data = set_addr_data(&request);
        assert_eq!(data[..4], IPublicResolver::setAddrCall::SELECTOR);
        assert_eq!(&data[4..36], namehash("alice.eth").as_slice());
    }
}
