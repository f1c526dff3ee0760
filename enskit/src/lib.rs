//! # enskit
//!
//! A small client for the Ethereum Name Service: name registration, text
//! and address records, and reverse (primary-name) records, over plain
//! JSON-RPC with local or pluggable signing.
//!
//! The [`Ens`] facade aggregates one client per ENS contract behind a
//! single builder; each call maps one-to-one onto a contract function.
//!
//! ## Example
//!
//! ```rust,no_run
//! use enskit::{Ens, Network};
//!
//! # async fn example() -> enskit::Result<()> {
//! let ens = Ens::builder()
//!     .network(Network::Mainnet)
//!     .rpc_url("https://ethereum.publicnode.com")
//!     .build()?;
//!
//! let address = ens.get_address("vitalik.eth").await?;
//! println!("vitalik.eth -> {address}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod ens;

pub use ens::{Ens, EnsBuilder};

// Re-export the pieces callers need alongside the facade
pub use enskit_contracts::{
    ClientConfig, ContractClient, Controller, LocalWallet, Resolver, ReverseRegistrar,
    TxOptions, WalletProvider,
};
pub use enskit_core::{
    constants, name, secret, EnsError, Network, RegistrationRequest, RentPrice, Result,
    TextRecord, TransactionReceipt,
};
