/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

// Every response object keeps the fields it does not model in `extra`, and
// optional fields are skipped when absent, so re-serializing a response
// yields the body the server sent. Fractional fields are `Number` rather than
// `f64` so an integral `1` is not re-emitted as `1.0`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::enums::ScriptType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    /// -1 while unconfirmed
    pub block_height: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_index: Option<i64>,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    pub total: u64,
    pub fees: u64,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsize: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relayed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    pub ver: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_time: Option<u32>,
    pub double_spend: bool,
    pub vin_sz: u32,
    pub vout_sz: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_in_rbf: Option<bool>,
    pub confirmations: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Paging URL when more inputs exist than were returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_inputs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_outputs: Option<String>,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<ScriptType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<ScriptType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_string: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Unsigned transaction template returned by `/txs/new`.
///
/// After signing, the same object is posted back to `/txs/send` with
/// `signatures` and `pubkeys` filled in, one entry per `tosign` item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSkeleton {
    pub tx: Transaction,
    /// Absent when the skeleton carries `errors` only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tosign: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tosign_tx: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkeys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SkeletonError>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkeletonError {
    pub error: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionConfidence {
    pub age_millis: u64,
    pub receive_count: i64,
    /// Probability in `[0, 1]` that the transaction will be mined
    pub confidence: Number,
    pub txhash: String,
    pub txurl: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedOrigin {
    pub latitude: Number,
    pub longitude: Number,
}

/// BIP143 preimage fields decoded from a witness `tosign_tx`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WitnessToSignTransaction {
    pub version: u32,
    pub hash_prevouts: String,
    pub hash_sequence: String,
    pub outpoint: String,
    pub outpoint_script: String,
    pub outpoint_value: u64,
    pub sequence: u64,
    pub hash_outputs: String,
    pub lock_time: u32,
    pub sighash_type: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_keeps_unmodelled_fields() {
        let body = json!({
            "block_height": -1,
            "hash": "abc123",
            "addresses": ["addr1"],
            "total": 1000,
            "fees": 10,
            "size": 120,
            "ver": 1,
            "double_spend": false,
            "vin_sz": 1,
            "vout_sz": 1,
            "confirmations": 0,
            "gas_limit": 21000,
            "inputs": [{"prev_hash": "def", "output_index": 0, "future_field": true}],
            "outputs": [{"value": 990, "addresses": ["addr2"], "script_type": "multisig-2-of-3"}]
        });

        let tx: Transaction = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(tx.hash, "abc123");
        assert_eq!(tx.block_height, -1);
        assert_eq!(tx.extra.get("gas_limit"), Some(&json!(21000)));
        assert_eq!(tx.inputs[0].extra.get("future_field"), Some(&json!(true)));
        assert_eq!(
            tx.outputs[0].script_type,
            Some(ScriptType::Other("multisig-2-of-3".to_string()))
        );

        assert_eq!(serde_json::to_value(&tx).unwrap(), body);
    }

    #[test]
    fn test_skeleton_errors_deserialize() {
        let body = json!({
            "tx": {
                "block_height": -1,
                "hash": "h",
                "total": 0,
                "fees": 0,
                "size": 0,
                "ver": 1,
                "double_spend": false,
                "vin_sz": 0,
                "vout_sz": 0,
                "confirmations": 0,
                "inputs": [],
                "outputs": []
            },
            "errors": [{"error": "Not enough funds after fees"}]
        });

        let skeleton: TransactionSkeleton = serde_json::from_value(body).unwrap();
        assert!(skeleton.tosign.is_none());
        assert_eq!(
            skeleton.errors,
            Some(vec![SkeletonError {
                error: "Not enough funds after fees".to_string(),
                extra: Map::new(),
            }])
        );
    }

    #[test]
    fn test_error_skeleton_without_tosign_round_trips() {
        let body = json!({
            "tx": {
                "block_height": -1,
                "hash": "h",
                "total": 0,
                "fees": 0,
                "size": 0,
                "ver": 1,
                "double_spend": false,
                "vin_sz": 0,
                "vout_sz": 0,
                "confirmations": 0,
                "inputs": [],
                "outputs": []
            },
            "errors": [{"error": "Error validating generated transaction", "code": 17}]
        });

        let skeleton: TransactionSkeleton = serde_json::from_value(body.clone()).unwrap();
        let errors = skeleton.errors.as_deref().unwrap();
        assert_eq!(errors[0].extra.get("code"), Some(&json!(17)));
        assert_eq!(serde_json::to_value(&skeleton).unwrap(), body);
    }

    #[test]
    fn test_transaction_without_addresses_round_trips() {
        let body = json!({
            "block_height": 0,
            "hash": "coinbase",
            "total": 5000000000u64,
            "fees": 0,
            "size": 204,
            "ver": 1,
            "double_spend": false,
            "vin_sz": 1,
            "vout_sz": 1,
            "confirmations": 10,
            "inputs": [],
            "outputs": []
        });

        let tx: Transaction = serde_json::from_value(body.clone()).unwrap();
        assert!(tx.addresses.is_none());
        assert_eq!(serde_json::to_value(&tx).unwrap(), body);
    }

    #[test]
    fn test_integral_numbers_are_not_widened() {
        let body = json!({
            "block_height": 100,
            "hash": "confirmed",
            "addresses": [],
            "total": 1,
            "fees": 0,
            "size": 1,
            "ver": 1,
            "double_spend": false,
            "vin_sz": 0,
            "vout_sz": 0,
            "confirmations": 6,
            "confidence": 1,
            "inputs": [],
            "outputs": []
        });
        let tx: Transaction = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(tx.confidence, Some(Number::from(1)));
        assert_eq!(serde_json::to_value(&tx).unwrap(), body);

        let body = json!({
            "age_millis": 9000,
            "receive_count": 0,
            "confidence": 0,
            "txhash": "h",
            "txurl": "https://api.blockcypher.com/v1/btc/main/txs/h"
        });
        let confidence: TransactionConfidence = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&confidence).unwrap(), body);

        let body = json!({"latitude": 40, "longitude": -74.006});
        let origin: AggregatedOrigin = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(origin.latitude.as_i64(), Some(40));
        assert_eq!(serde_json::to_value(&origin).unwrap(), body);
    }
}
