/*
[INPUT]:  CLI arguments, YAML configuration file, BLOCKCYPHER_TOKEN
[OUTPUT]: Pass-through JSON response printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockcypher_cli::config::TOKEN_ENV_VAR;
use blockcypher_cli::{Cli, FileConfig, ResolvedConfig, commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let file_config = FileConfig::load(args.config_path.as_deref()).context("load config")?;
    let env_token = std::env::var(TOKEN_ENV_VAR).ok();
    let resolved = ResolvedConfig::resolve(file_config, args.overrides(), env_token);
    let client = resolved.build_client()?;

    info!(
        base_url = %client.base_url(),
        token = client.has_token(),
        "client configured"
    );

    if args.dry_run {
        let summary = json!({
            "base_url": client.base_url().as_str(),
            "network": resolved.client.network,
            "token": client.has_token(),
            "timeout_secs": resolved.client.timeout.as_secs(),
            "connect_timeout_secs": resolved.client.connect_timeout.as_secs(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let output = commands::run(&client, &args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
