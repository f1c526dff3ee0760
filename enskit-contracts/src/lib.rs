//! # enskit contracts
//!
//! Clients for the three ENS contracts: the registration controller, the
//! public resolver and the reverse registrar.
//!
//! Every client is a thin proxy: it ABI-encodes a call, hands it to a shared
//! [`ContractClient`] for transport, and decodes the response. Reads go out
//! as `eth_call`; writes are simulated first, then signed through the
//! [`WalletProvider`] seam, broadcast, and awaited to a receipt.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use enskit_contracts::{ClientConfig, ContractClient, Resolver};
//! use enskit_core::Network;
//!
//! # async fn example() -> enskit_core::Result<()> {
//! let client = Arc::new(ContractClient::new(ClientConfig::new(
//!     Network::Mainnet,
//!     "https://ethereum.publicnode.com",
//! ))?);
//! let resolver = Resolver::new(client);
//! let address = resolver.get_address("alice.eth").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod abi;
mod client;
mod controller;
mod resolver;
mod reverse;
mod rpc;
mod wallet;

pub use client::{ClientConfig, ContractClient, TxOptions};
pub use controller::Controller;
pub use resolver::Resolver;
pub use reverse::ReverseRegistrar;
pub use rpc::RpcClient;
pub use wallet::{LocalWallet, UnsignedTransaction, WalletProvider};
