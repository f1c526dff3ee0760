//! ABI definitions for the ENS contracts.
//!
//! Declared with `alloy::sol!`; the generated call types provide encoding
//! and decoding for every function the clients use. Signatures follow the
//! deployed mainnet contracts.

use alloy::sol;

sol! {
    /// Registration controller (`ETHRegistrarController`).
    #[allow(missing_docs)]
    interface IEthRegistrarController {
        struct Price {
            uint256 base;
            uint256 premium;
        }

        function rentPrice(string name, uint256 duration)
            external
            view
            returns (Price price);

        function makeCommitment(
            string label,
            address owner,
            uint256 duration,
            bytes32 secret,
            address resolver,
            bytes[] data,
            bool reverseRecord,
            uint16 ownerControlledFuses
        ) external pure returns (bytes32 commitment);

        function commit(bytes32 commitment) external;

        function register(
            string label,
            address owner,
            uint256 duration,
            bytes32 secret,
            address resolver,
            bytes[] data,
            bool reverseRecord,
            uint16 ownerControlledFuses
        ) external payable;
    }

    /// Public resolver: text records, address records, reverse names.
    #[allow(missing_docs)]
    interface IPublicResolver {
        function setText(bytes32 node, string key, string value) external;

        function text(bytes32 node, string key)
            external
            view
            returns (string value);

        function setAddr(bytes32 node, address addr) external;

        function addr(bytes32 node) external view returns (address addr);

        function name(bytes32 node) external view returns (string value);

        function multicall(bytes[] data) external returns (bytes[] results);
    }

    /// Reverse registrar: primary-name management.
    #[allow(missing_docs)]
    interface IReverseRegistrar {
        function node(address addr) external pure returns (bytes32 node);

        function setName(string name) external returns (bytes32 node);

        function setNameForAddr(
            address addr,
            address owner,
            address resolver,
            string name
        ) external returns (bytes32 node);
    }
}
