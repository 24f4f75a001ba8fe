/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::BlockcypherError;

/// Blockchain addressed by the client, as a `{coin}/{chain}` pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    #[default]
    #[serde(rename = "btc/main")]
    BtcMain,
    #[serde(rename = "btc/test3")]
    BtcTest3,
    #[serde(rename = "bcy/test")]
    BcyTest,
    #[serde(rename = "ltc/main")]
    LtcMain,
    #[serde(rename = "doge/main")]
    DogeMain,
    #[serde(rename = "dash/main")]
    DashMain,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::BtcMain,
        Network::BtcTest3,
        Network::BcyTest,
        Network::LtcMain,
        Network::DogeMain,
        Network::DashMain,
    ];

    pub fn coin(self) -> &'static str {
        match self {
            Network::BtcMain | Network::BtcTest3 => "btc",
            Network::BcyTest => "bcy",
            Network::LtcMain => "ltc",
            Network::DogeMain => "doge",
            Network::DashMain => "dash",
        }
    }

    pub fn chain(self) -> &'static str {
        match self {
            Network::BtcTest3 => "test3",
            Network::BcyTest => "test",
            _ => "main",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.coin(), self.chain())
    }
}

impl FromStr for Network {
    type Err = BlockcypherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Network::ALL
            .into_iter()
            .find(|network| network.to_string() == normalized)
            .ok_or_else(|| BlockcypherError::Config(format!("unknown network: {s}")))
    }
}

/// Fee preference for `/txs/new`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    High,
    Medium,
    Low,
}

impl FromStr for Preference {
    type Err = BlockcypherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Preference::High),
            "medium" => Ok(Preference::Medium),
            "low" => Ok(Preference::Low),
            other => Err(BlockcypherError::Config(format!(
                "unknown fee preference: {other}"
            ))),
        }
    }
}

/// Output/input script type as reported by the API.
///
/// Script types the API may add later are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    #[serde(rename = "pay-to-pubkey-hash")]
    PayToPubkeyHash,
    #[serde(rename = "pay-to-multi-pubkey-hash")]
    PayToMultiPubkeyHash,
    #[serde(rename = "pay-to-pubkey")]
    PayToPubkey,
    #[serde(rename = "pay-to-script-hash")]
    PayToScriptHash,
    #[serde(rename = "pay-to-witness-pubkey-hash")]
    PayToWitnessPubkeyHash,
    #[serde(rename = "pay-to-witness-script-hash")]
    PayToWitnessScriptHash,
    #[serde(rename = "null-data")]
    NullData,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(untagged)]
    Other(String),
}
