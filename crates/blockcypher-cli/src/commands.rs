/*
[INPUT]:  Parsed subcommand and configured client
[OUTPUT]: Raw JSON response of the matching endpoint
[POS]:    CLI layer - subcommand dispatch
[UPDATE]: When adding endpoints or subcommands
*/

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use blockcypher_adapter::{BlockcypherClient, TransactionSkeleton};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::{Command, unconfirmed_params};

/// Run one subcommand and return the response as JSON
pub async fn run(client: &BlockcypherClient, command: &Command) -> Result<Value> {
    match command {
        Command::Unconfirmed { limit, min_value } => {
            let params = unconfirmed_params(*limit, *min_value);
            let txs = client
                .get_unconfirmed_transactions(params.as_ref())
                .await
                .context("list unconfirmed transactions")?;
            info!(count = txs.len(), "unconfirmed transactions fetched");
            to_json(&txs)
        }
        Command::Tx(args) => {
            let params = args.params();
            let tx = client
                .get_transaction_by_hash(&args.hash, params.as_ref())
                .await
                .with_context(|| format!("get transaction {}", args.hash))?;
            to_json(&tx)
        }
        Command::New(args) => {
            let payload = args.payload();
            let params = args.params();
            let skeleton = client
                .new_transaction(&payload, params.as_ref())
                .await
                .context("create transaction skeleton")?;
            info!(
                tosign = skeleton.tosign.as_ref().map_or(0, Vec::len),
                hash = %skeleton.tx.hash,
                "transaction skeleton created"
            );
            to_json(&skeleton)
        }
        Command::Send { skeleton } => {
            let skeleton = read_skeleton(skeleton)?;
            let sent = client
                .send_transaction(&skeleton)
                .await
                .context("send transaction")?;
            info!(hash = %sent.tx.hash, "transaction sent");
            to_json(&sent)
        }
        Command::Push { hex } => {
            let tx = client
                .push_raw_transaction(hex)
                .await
                .context("push raw transaction")?;
            info!(hash = %tx.hash, "raw transaction pushed");
            to_json(&tx)
        }
        Command::Decode { hex } => {
            let tx = client
                .decode_raw_transaction(hex)
                .await
                .context("decode raw transaction")?;
            to_json(&tx)
        }
        Command::DecodeWitness { hex } => {
            let decoded = client
                .decode_transaction_witness_to_sign(hex)
                .await
                .context("decode witness tosign transaction")?;
            to_json(&decoded)
        }
        Command::Propagation { hash } => {
            let propagation = client
                .get_transaction_propagation(hash)
                .await
                .with_context(|| format!("get propagation of {hash}"))?;
            to_json(&propagation)
        }
        Command::Confidence { hash } => {
            let confidence = client
                .get_transaction_confidence(hash)
                .await
                .with_context(|| format!("get confidence of {hash}"))?;
            to_json(&confidence)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("encode response")
}

/// Read a skeleton from a file, or stdin when the path is `-`
pub fn read_skeleton(path: &Path) -> Result<TransactionSkeleton> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read skeleton from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read skeleton file {}", path.display()))?
    };
    serde_json::from_str(&content).context("parse transaction skeleton")
}
