/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::models::{AggregatedOrigin, Transaction};

/// Response of POST /txs/send
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendTransactionResponse {
    pub tx: Transaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tosign: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of GET /txs/{hash}/propogation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPropagationResponse {
    pub transaction: String,
    pub first_location: AggregatedOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_city: Option<String>,
    pub first_country: String,
    pub aggregated_origin: AggregatedOrigin,
    /// Radius in meters around `aggregated_origin`
    pub aggregated_origin_radius: Number,
    pub first_received: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
