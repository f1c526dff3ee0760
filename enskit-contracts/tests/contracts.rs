//! Integration tests against a mock JSON-RPC node.

use std::sync::Arc;

use alloy::primitives::{address, Address, U256};
use alloy::sol_types::SolValue;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use enskit_contracts::abi::IEthRegistrarController;
use enskit_contracts::{
    ClientConfig, ContractClient, Controller, LocalWallet, Resolver, ReverseRegistrar,
};
use enskit_core::{EnsError, Network, TextRecord};

const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const TX_HASH: &str = "0x4c2070dbd6a0587a6ea7bbc8d6a7cdad91a87b2b6b27570b01bc73bcb25b14a1";

async fn client(server: &MockServer) -> Arc<ContractClient> {
    let mut config = ClientConfig::new(Network::Mainnet, server.uri());
    config.receipt_poll_interval_ms = 10;
    Arc::new(ContractClient::new(config).unwrap())
}

async fn client_with_wallet(server: &MockServer) -> Arc<ContractClient> {
    let mut config = ClientConfig::new(Network::Mainnet, server.uri());
    config.receipt_poll_interval_ms = 10;
    Arc::new(
        ContractClient::new(config)
            .unwrap()
            .with_wallet(Arc::new(LocalWallet::from_hex(DEV_KEY).unwrap())),
    )
}

/// Mounts a mock that answers every request with the same `result`.
async fn mount_result(server: &MockServer, result: Value) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": result,
        })))
        .mount(server)
        .await;
}

fn hex_result(bytes: &[u8]) -> Value {
    json!(format!("0x{}", hex::encode(bytes)))
}

/// A canned node: dispatches on the JSON-RPC method, enough to carry a
/// full write (simulate, fill, broadcast, receipt).
struct EthNode;

impl Respond for EthNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let result = match body["method"].as_str().unwrap() {
            "eth_call" => json!("0x"),
            "eth_getTransactionCount" => json!("0x5"),
            "eth_estimateGas" => json!("0x186a0"),
            "eth_maxPriorityFeePerGas" => json!("0x3b9aca00"),
            "eth_gasPrice" => json!("0x6fc23ac00"),
            "eth_sendRawTransaction" => json!(TX_HASH),
            "eth_getTransactionReceipt" => json!({
                "transactionHash": TX_HASH,
                "blockHash": "0x6fd9e2a26ab19d5d4fbd9712b6a1e2a0a4ff34a487cabb0cfb37e4b03a0ee0f4",
                "blockNumber": "0x10",
                "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
                "to": "0xa58e81fe9b61b5c3fe2afd33cf304c454abfc7cb",
                "gasUsed": "0x5208",
                "effectiveGasPrice": "0x6fc23ac00",
                "status": "0x1",
                "logs": []
            }),
            other => json!({ "unexpected-method": other }),
        };

        ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": body["id"],
            "result": result,
        }))
    }
}

#[tokio::test]
async fn get_address_decodes_the_resolver_answer() {
    let server = MockServer::start().await;
    let expected = address!("d8da6bf26964af9d7eed9e03e53415d37aa96045");
    mount_result(&server, hex_result(&expected.abi_encode())).await;

    let resolver = Resolver::new(client(&server).await);
    let resolved = resolver.get_address("vitalik.eth").await.unwrap();
    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn get_address_sends_identical_calldata_regardless_of_case() {
    let server = MockServer::start().await;
    mount_result(&server, hex_result(&Address::ZERO.abi_encode())).await;

    let resolver = Resolver::new(client(&server).await);
    resolver.get_address("Foo.eth").await.unwrap();
    resolver.get_address("foo.eth").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let calldata: Vec<String> = requests
        .iter()
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            body["params"][0]["data"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(calldata[0], calldata[1]);
}

#[tokio::test]
async fn get_text_records_omits_empty_values() {
    let server = MockServer::start().await;

    // multicall answer: "a" resolves to "hello", "b" to the empty string
    let results: Vec<alloy::primitives::Bytes> = vec![
        "hello".to_string().abi_encode().into(),
        String::new().abi_encode().into(),
    ];
    mount_result(&server, hex_result(&results.abi_encode())).await;

    let resolver = Resolver::new(client(&server).await);
    let records = resolver
        .get_text_records("alice.eth", &["a".to_string(), "b".to_string()])
        .await
        .unwrap();

    assert_eq!(records, vec![TextRecord::new("a", "hello")]);
}

#[tokio::test]
async fn get_name_reads_the_reverse_record() {
    let server = MockServer::start().await;
    mount_result(&server, hex_result(&"alice.eth".to_string().abi_encode())).await;

    let resolver = Resolver::new(client(&server).await);
    let name = resolver
        .get_name(enskit_core::name::namehash(
            "1111111111111111111111111111111111111111.addr.reverse",
        ))
        .await
        .unwrap();
    assert_eq!(name, "alice.eth");
}

#[tokio::test]
async fn estimate_price_is_the_exact_sum_of_base_and_premium() {
    let server = MockServer::start().await;
    let price = IEthRegistrarController::Price {
        base: U256::from(40_000_000_000_000_000u64),
        premium: U256::from(3u64),
    };
    mount_result(&server, hex_result(&price.abi_encode())).await;

    let controller = Controller::new(client(&server).await);
    let quote = controller.rent_price("alice", 31_536_000).await.unwrap();
    let estimate = controller.estimate_price("alice", 31_536_000).await.unwrap();

    assert_eq!(estimate, quote.base + quote.premium);
    assert_eq!(estimate, U256::from(40_000_000_000_000_003u64));
}

#[tokio::test]
async fn write_simulation_surfaces_reverts_before_broadcast() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {
                "code": 3,
                "message": "execution reverted: CommitmentTooNew",
                "data": "0x08c379a0"
            }
        })))
        .mount(&server)
        .await;

    let resolver = Resolver::new(client_with_wallet(&server).await);
    let err = resolver
        .set_address("alice.eth", Address::ZERO)
        .await
        .unwrap_err();

    match err {
        EnsError::Revert { message, data } => {
            assert!(message.contains("CommitmentTooNew"));
            assert_eq!(data.as_deref(), Some("0x08c379a0"));
        }
        other => panic!("expected revert, got {other}"),
    }

    // nothing was broadcast after the failed simulation
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn set_name_runs_the_full_write_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(EthNode)
        .mount(&server)
        .await;

    let registrar = ReverseRegistrar::new(client_with_wallet(&server).await);
    let receipt = registrar.set_name("alice.eth").await.unwrap();

    assert!(receipt.is_success());
    assert_eq!(format!("{:?}", receipt.transaction_hash), TX_HASH);

    // the broadcast payload is a signed EIP-1559 envelope
    let requests = server.received_requests().await.unwrap();
    let raw = requests
        .iter()
        .find_map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            (body["method"] == "eth_sendRawTransaction")
                .then(|| body["params"][0].as_str().unwrap().to_string())
        })
        .expect("a raw transaction was broadcast");
    assert!(raw.starts_with("0x02"));
}

#[tokio::test]
async fn read_propagates_rpc_errors_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32601, "message": "method not found" }
        })))
        .mount(&server)
        .await;

    let resolver = Resolver::new(client(&server).await);
    let err = resolver.get_address("alice.eth").await.unwrap_err();
    assert!(matches!(err, EnsError::Rpc { code: -32601, .. }));
}
