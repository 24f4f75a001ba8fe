/*
[INPUT]:  Command line arguments
[OUTPUT]: Parsed global flags and one subcommand per transaction endpoint
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding endpoints or flags
*/

use std::path::PathBuf;

use blockcypher_adapter::{
    NewTransactionInput, NewTransactionOutput, NewTransactionParams, NewTransactionPayload,
    Network, Preference, TransactionByHashParams, UnconfirmedTransactionsParams,
};
use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "blockcypher", version, about = "BlockCypher transaction API client")]
pub struct Cli {
    /// YAML config file (default: <config dir>/blockcypher/config.yaml)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    /// Network as coin/chain, e.g. btc/test3
    #[arg(long, value_name = "COIN/CHAIN", global = true)]
    pub network: Option<Network>,
    /// API token (falls back to BLOCKCYPHER_TOKEN, then the config file)
    #[arg(long, value_name = "TOKEN", global = true)]
    pub token: Option<String>,
    /// Full endpoint base URL, overrides --network
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    pub log_level: String,
    /// Resolve configuration and exit without calling the API
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            network: self.network,
            token: self.token.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List unconfirmed transactions (GET /txs)
    Unconfirmed {
        #[arg(long)]
        limit: Option<u32>,
        /// Minimum total value in satoshis
        #[arg(long = "min-value")]
        min_value: Option<u64>,
    },
    /// Get a transaction by hash (GET /txs/{hash})
    Tx(TxArgs),
    /// Create a transaction skeleton (POST /txs/new)
    New(NewArgs),
    /// Send a signed skeleton read from a JSON file, `-` for stdin (POST /txs/send)
    Send {
        #[arg(value_name = "SKELETON_JSON_FILE")]
        skeleton: PathBuf,
    },
    /// Broadcast a raw transaction (POST /txs/push)
    Push {
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Decode a raw transaction (POST /txs/decode)
    Decode {
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Decode a witness tosign_tx (POST /txs/decodeWitnessToSign)
    DecodeWitness {
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Where the network first saw a transaction (GET /txs/{hash}/propogation)
    Propagation {
        #[arg(value_name = "HASH")]
        hash: String,
    },
    /// Confidence that a transaction will confirm (GET /txs/{hash}/confidence)
    Confidence {
        #[arg(value_name = "HASH")]
        hash: String,
    },
}

#[derive(Args, Debug)]
pub struct TxArgs {
    #[arg(value_name = "HASH")]
    pub hash: String,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub instart: Option<u32>,
    #[arg(long)]
    pub outstart: Option<u32>,
    #[arg(long = "legacy-addrs")]
    pub legacy_addrs: bool,
    #[arg(long = "include-hex")]
    pub include_hex: bool,
    #[arg(long = "include-confidence")]
    pub include_confidence: bool,
}

impl TxArgs {
    /// `None` when no query flag was given
    pub fn params(&self) -> Option<TransactionByHashParams> {
        let params = TransactionByHashParams {
            limit: self.limit,
            instart: self.instart,
            outstart: self.outstart,
            legacyaddrs: self.legacy_addrs.then_some(true),
            include_hex: self.include_hex.then_some(true),
            include_confidence: self.include_confidence.then_some(true),
        };
        (params != TransactionByHashParams::default()).then_some(params)
    }
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Address to spend from; repeat for several inputs
    #[arg(long = "input", value_name = "ADDR")]
    pub inputs: Vec<String>,
    /// Previous output to spend; repeat for several inputs
    #[arg(long = "outpoint", value_name = "HASH:INDEX", value_parser = parse_outpoint)]
    pub outpoints: Vec<NewTransactionInput>,
    #[arg(long = "output", value_name = "ADDR:VALUE", value_parser = parse_output, required = true)]
    pub outputs: Vec<NewTransactionOutput>,
    #[arg(long)]
    pub preference: Option<Preference>,
    /// Explicit fee in satoshis
    #[arg(long)]
    pub fee: Option<u64>,
    #[arg(long = "change-address")]
    pub change_address: Option<String>,
    #[arg(long = "include-to-sign-tx")]
    pub include_to_sign_tx: bool,
}

impl NewArgs {
    pub fn payload(&self) -> NewTransactionPayload {
        let inputs = self
            .inputs
            .iter()
            .map(|address| NewTransactionInput::from_addresses([address.as_str()]))
            .chain(self.outpoints.iter().cloned())
            .collect();

        NewTransactionPayload {
            preference: self.preference,
            fee: self.fee,
            change_address: self.change_address.clone(),
            inputs,
            outputs: self.outputs.clone(),
        }
    }

    pub fn params(&self) -> Option<NewTransactionParams> {
        self.include_to_sign_tx.then_some(NewTransactionParams {
            include_to_sign_tx: Some(true),
        })
    }
}

pub fn unconfirmed_params(
    limit: Option<u32>,
    min_value: Option<u64>,
) -> Option<UnconfirmedTransactionsParams> {
    if limit.is_none() && min_value.is_none() {
        return None;
    }
    Some(UnconfirmedTransactionsParams { limit, min_value })
}

/// Parse `ADDR:VALUE`; the value is split at the last colon
pub fn parse_output(s: &str) -> Result<NewTransactionOutput, String> {
    let (address, value) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected ADDR:VALUE, got `{s}`"))?;
    if address.is_empty() {
        return Err(format!("missing address in `{s}`"));
    }
    let value = value
        .parse::<u64>()
        .map_err(|err| format!("invalid value in `{s}`: {err}"))?;
    Ok(NewTransactionOutput::new([address], value))
}

/// Parse `HASH:INDEX`
pub fn parse_outpoint(s: &str) -> Result<NewTransactionInput, String> {
    let (hash, index) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected HASH:INDEX, got `{s}`"))?;
    if hash.is_empty() {
        return Err(format!("missing hash in `{s}`"));
    }
    let index = index
        .parse::<u32>()
        .map_err(|err| format!("invalid output index in `{s}`: {err}"))?;
    Ok(NewTransactionInput::from_outpoint(hash, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output() {
        let output = parse_output("n3hDuRYeYaeV4aEBqYF9byMK5B2c3tR1nB:100000").unwrap();
        assert_eq!(output.addresses, vec!["n3hDuRYeYaeV4aEBqYF9byMK5B2c3tR1nB"]);
        assert_eq!(output.value, 100_000);
        assert!(parse_output("no-colon").is_err());
        assert!(parse_output(":5").is_err());
        assert!(parse_output("addr:-1").is_err());
    }

    #[test]
    fn test_parse_outpoint() {
        let input = parse_outpoint("deadbeef:2").unwrap();
        assert_eq!(input.prev_hash.as_deref(), Some("deadbeef"));
        assert_eq!(input.output_index, Some(2));
        assert!(parse_outpoint("deadbeef").is_err());
    }

    #[test]
    fn test_new_subcommand_builds_payload() {
        let cli = Cli::try_parse_from([
            "blockcypher",
            "--network",
            "bcy/test",
            "new",
            "--input",
            "CEztKBAYNoUEEaPYbkyFeXC5v8Jz9RoZH9",
            "--outpoint",
            "deadbeef:1",
            "--output",
            "C1rGdt7QEPGiwPMFhNKNhHmyoWpa5X92pn:100000",
            "--preference",
            "low",
        ])
        .unwrap();

        assert_eq!(cli.network, Some(Network::BcyTest));
        let Command::New(args) = cli.command else {
            panic!("expected new subcommand");
        };
        let payload = args.payload();
        assert_eq!(payload.inputs.len(), 2);
        assert_eq!(payload.inputs[1].prev_hash.as_deref(), Some("deadbeef"));
        assert_eq!(payload.outputs[0].value, 100_000);
        assert_eq!(payload.preference, Some(Preference::Low));
        assert!(args.params().is_none());
    }

    #[test]
    fn test_tx_params_only_when_flags_given() {
        let cli = Cli::try_parse_from(["blockcypher", "tx", "abc123"]).unwrap();
        let Command::Tx(args) = &cli.command else {
            panic!("expected tx subcommand");
        };
        assert!(args.params().is_none());

        let cli = Cli::try_parse_from(["blockcypher", "tx", "abc123", "--include-hex", "--limit", "5"])
            .unwrap();
        let Command::Tx(args) = &cli.command else {
            panic!("expected tx subcommand");
        };
        let params = args.params().unwrap();
        assert_eq!(params.include_hex, Some(true));
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.include_confidence, None);
    }

    #[test]
    fn test_unconfirmed_params() {
        assert!(unconfirmed_params(None, None).is_none());
        assert_eq!(
            unconfirmed_params(Some(2), None),
            Some(UnconfirmedTransactionsParams {
                limit: Some(2),
                min_value: None
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["blockcypher", "confidence", "abc", "--token", "t"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("t"));
        assert_eq!(cli.log_level, "warn");
    }
}
