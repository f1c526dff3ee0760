//! ENS contract addresses and protocol constants.
//!
//! Addresses are fixed per network; there is no on-chain discovery. The
//! mainnet and Sepolia deployments below are the canonical ENS contracts.

use alloy::primitives::{address, Address};

use crate::network::Network;

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRATION CONTROLLER (ETHRegistrarController)
// ═══════════════════════════════════════════════════════════════════════════════

/// Registration controller on mainnet.
pub const CONTROLLER_ADDRESS_MAINNET: Address =
    address!("253553366da8546fc250f225fe3d25d0c782303b");

/// Registration controller on Sepolia.
pub const CONTROLLER_ADDRESS_SEPOLIA: Address =
    address!("fed6a969aaa60e4961fcd3ebf1a2e8913ac65b72");

// ═══════════════════════════════════════════════════════════════════════════════
// PUBLIC RESOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// Public resolver on mainnet.
pub const RESOLVER_ADDRESS_MAINNET: Address =
    address!("231b0ee14048e9dccd1d247744d114a4eb5e8e63");

/// Public resolver on Sepolia.
pub const RESOLVER_ADDRESS_SEPOLIA: Address =
    address!("8fade66b79cc9f707ab26799354482eb93a5b7dd");

// ═══════════════════════════════════════════════════════════════════════════════
// REVERSE REGISTRAR
// ═══════════════════════════════════════════════════════════════════════════════

/// Reverse registrar on mainnet.
pub const REVERSE_REGISTRAR_ADDRESS_MAINNET: Address =
    address!("a58e81fe9b61b5c3fe2afd33cf304c454abfc7cb");

/// Reverse registrar on Sepolia.
pub const REVERSE_REGISTRAR_ADDRESS_SEPOLIA: Address =
    address!("a0a1abcdae1a2a4a2ef8e9113ff0e02dd81dc0c6");

// ═══════════════════════════════════════════════════════════════════════════════
// PROTOCOL CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// The top-level domain every registration label lives under.
pub const ETH_TLD: &str = "eth";

/// Size of an encoded commitment secret in bytes.
pub const SECRET_SIZE: usize = 32;

/// Returns the registration controller address for a network.
pub fn controller_address(network: Network) -> Address {
    match network {
        Network::Mainnet => CONTROLLER_ADDRESS_MAINNET,
        Network::Sepolia => CONTROLLER_ADDRESS_SEPOLIA,
    }
}

/// Returns the public resolver address for a network.
pub fn resolver_address(network: Network) -> Address {
    match network {
        Network::Mainnet => RESOLVER_ADDRESS_MAINNET,
        Network::Sepolia => RESOLVER_ADDRESS_SEPOLIA,
    }
}

/// Returns the reverse registrar address for a network.
pub fn reverse_registrar_address(network: Network) -> Address {
    match network {
        Network::Mainnet => REVERSE_REGISTRAR_ADDRESS_MAINNET,
        Network::Sepolia => REVERSE_REGISTRAR_ADDRESS_SEPOLIA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_selection_is_deterministic() {
        for network in [Network::Mainnet, Network::Sepolia] {
            let expected = match network {
                Network::Mainnet => (
                    CONTROLLER_ADDRESS_MAINNET,
                    RESOLVER_ADDRESS_MAINNET,
                    REVERSE_REGISTRAR_ADDRESS_MAINNET,
                ),
                Network::Sepolia => (
                    CONTROLLER_ADDRESS_SEPOLIA,
                    RESOLVER_ADDRESS_SEPOLIA,
                    REVERSE_REGISTRAR_ADDRESS_SEPOLIA,
                ),
            };
            assert_eq!(controller_address(network), expected.0);
            assert_eq!(resolver_address(network), expected.1);
            assert_eq!(reverse_registrar_address(network), expected.2);
        }
    }

    #[test]
    fn test_networks_use_distinct_deployments() {
        assert_ne!(CONTROLLER_ADDRESS_MAINNET, CONTROLLER_ADDRESS_SEPOLIA);
        assert_ne!(RESOLVER_ADDRESS_MAINNET, RESOLVER_ADDRESS_SEPOLIA);
        assert_ne!(
            REVERSE_REGISTRAR_ADDRESS_MAINNET,
            REVERSE_REGISTRAR_ADDRESS_SEPOLIA
        );
    }

    #[test]
    fn test_known_mainnet_controller() {
        assert_eq!(
            CONTROLLER_ADDRESS_MAINNET.to_string().to_lowercase(),
            "0x253553366da8546fc250f225fe3d25d0c782303b"
        );
    }
}
