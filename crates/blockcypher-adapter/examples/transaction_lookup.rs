/*
[INPUT]:  Transaction hash (first CLI argument) and optional BLOCKCYPHER_TOKEN
[OUTPUT]: Transaction details and confidence printed to stdout
[POS]:    Examples - read-only transaction queries
[UPDATE]: When adding new lookup endpoints
*/

use blockcypher_adapter::*;

/// Example: look up a transaction and its confidence on btc/main
#[tokio::main]
async fn main() {
    println!("=== BlockCypher Transaction Lookup Example ===\n");

    let hash = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "f854aebae95150b379cc1187d848d58225f3c4157fe992bcd166f58bd5063449".to_string());

    let config = ClientConfig {
        token: std::env::var("BLOCKCYPHER_TOKEN").ok(),
        ..ClientConfig::default()
    };
    let client = match BlockcypherClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    println!("Fetching transaction {}...", hash);
    let params = TransactionByHashParams {
        limit: Some(5),
        ..Default::default()
    };
    match client.get_transaction_by_hash(&hash, Some(&params)).await {
        Ok(tx) => println!(
            "✓ block {} | {} inputs, {} outputs | total {} sat, fees {} sat",
            tx.block_height, tx.vin_sz, tx.vout_sz, tx.total, tx.fees
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching confidence...");
    match client.get_transaction_confidence(&hash).await {
        Ok(c) => println!(
            "✓ confidence {:.4} after {} peers",
            c.confidence.as_f64().unwrap_or_default(),
            c.receive_count
        ),
        Err(e) if e.is_not_found() => println!("✗ Not tracked (already confirmed?)"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Transaction lookup example complete");
}
