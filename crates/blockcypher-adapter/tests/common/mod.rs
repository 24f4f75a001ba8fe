/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for blockcypher-adapter tests

use blockcypher_adapter::{BlockcypherClient, ClientConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TX_HASH: &str = "abc123";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, optionally with an API token
pub fn client_for(server: &MockServer, token: Option<&str>) -> BlockcypherClient {
    let config = ClientConfig {
        token: token.map(str::to_string),
        ..ClientConfig::default()
    };
    BlockcypherClient::with_config_and_base_url(config, &server.uri()).expect("client init")
}

/// Mock API token for testing
#[allow(dead_code)]
pub fn mock_token() -> String {
    "a1b2c3d4e5f60718293a4b5c6d7e8f90".to_string()
}

/// Minimal unconfirmed transaction as returned by the API
pub fn unconfirmed_transaction(hash: &str) -> Value {
    json!({
        "block_height": -1,
        "block_index": -1,
        "hash": hash,
        "addresses": ["mvYwMT3aZ5jNcRNNjv7ckxjbqMDtvQbAHz", "n3hDuRYeYaeV4aEBqYF9byMK5B2c3tR1nB"],
        "total": 4988000,
        "fees": 12000,
        "size": 226,
        "vsize": 226,
        "preference": "high",
        "relayed_by": "104.197.170.160",
        "received": "2024-05-01T10:15:30.123Z",
        "ver": 1,
        "double_spend": false,
        "vin_sz": 1,
        "vout_sz": 2,
        "opt_in_rbf": true,
        "confirmations": 0,
        "inputs": [{
            "prev_hash": "7d4e8f0b6f0f2a9c1b6d5e3a2c1f0e9d8c7b6a5f4e3d2c1b0a9f8e7d6c5b4a39",
            "output_index": 0,
            "output_value": 5000000,
            "sequence": 4294967293_u64,
            "addresses": ["mvYwMT3aZ5jNcRNNjv7ckxjbqMDtvQbAHz"],
            "script_type": "pay-to-pubkey-hash",
            "age": 2812345
        }],
        "outputs": [
            {"value": 100000, "addresses": ["n3hDuRYeYaeV4aEBqYF9byMK5B2c3tR1nB"], "script_type": "pay-to-pubkey-hash", "script": "76a914f3b4c1a8d2e6a0c9b7f5e3d1c9a7b5e3f1d9c7a588ac"},
            {"value": 4888000, "addresses": ["mvYwMT3aZ5jNcRNNjv7ckxjbqMDtvQbAHz"], "script_type": "pay-to-pubkey-hash", "script": "76a914a4c2e0f8d6b4a2c0e8f6d4b2a0c8e6f4d2b0a8c688ac"}
        ]
    })
}

/// Skeleton returned by POST /txs/new for a single-input spend
#[allow(dead_code)]
pub fn skeleton_for(hash: &str) -> Value {
    json!({
        "tx": unconfirmed_transaction(hash),
        "tosign": ["2c0ddb2a9f1e8c7b6a5d4c3b2a1f0e9d8c7b6a5f4e3d2c1b0a9f8e7d6c5b4a3f"],
        "tosign_tx": ["01000000017d4e8f0b6f0f2a9c1b6d5e3a2c1f0e9d"]
    })
}
