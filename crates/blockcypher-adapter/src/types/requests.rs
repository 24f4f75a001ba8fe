/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs and query parameters with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{Preference, ScriptType};

/// Input of a `/txs/new` request: either addresses to spend from or a
/// previous output reference, optionally scoped to a wallet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransactionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_token: Option<String>,
}

impl NewTransactionInput {
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: Some(addresses.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn from_outpoint(prev_hash: impl Into<String>, output_index: u32) -> Self {
        Self {
            prev_hash: Some(prev_hash.into()),
            output_index: Some(output_index),
            ..Self::default()
        }
    }

    pub fn from_wallet(wallet_name: impl Into<String>, wallet_token: impl Into<String>) -> Self {
        Self {
            wallet_name: Some(wallet_name.into()),
            wallet_token: Some(wallet_token.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransactionOutput {
    pub addresses: Vec<String>,
    pub value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_type: Option<ScriptType>,
}

impl NewTransactionOutput {
    pub fn new<I, S>(addresses: I, value: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
            value,
            script_type: None,
        }
    }
}

/// Body of POST /txs/new
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransactionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    pub inputs: Vec<NewTransactionInput>,
    pub outputs: Vec<NewTransactionOutput>,
}

impl NewTransactionPayload {
    pub fn new(inputs: Vec<NewTransactionInput>, outputs: Vec<NewTransactionOutput>) -> Self {
        Self {
            inputs,
            outputs,
            ..Self::default()
        }
    }
}

/// Body of POST /txs/push and POST /txs/decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransactionRequest {
    pub tx: String,
}

/// Body of POST /txs/decodeWitnessToSign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessToSignRequest {
    pub witness_tosign_tx: String,
}

/// Query parameters of GET /txs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnconfirmedTransactionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Minimum total value in satoshis
    #[serde(rename = "minValue", skip_serializing_if = "Option::is_none")]
    pub min_value: Option<u64>,
}

/// Query parameters of GET /txs/{hash}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionByHashParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instart: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstart: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacyaddrs: Option<bool>,
    #[serde(rename = "includeHex", skip_serializing_if = "Option::is_none")]
    pub include_hex: Option<bool>,
    #[serde(rename = "includeConfidence", skip_serializing_if = "Option::is_none")]
    pub include_confidence: Option<bool>,
}

/// Query parameters of POST /txs/new
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransactionParams {
    #[serde(rename = "includeToSignTx", skip_serializing_if = "Option::is_none")]
    pub include_to_sign_tx: Option<bool>,
}
