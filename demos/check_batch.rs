use std::io;

use emailable::{ApiKey, BatchId, CheckBatch, EmailableClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("EMAILABLE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMAILABLE_API_KEY environment variable is required",
        )
    })?;
    let batch_id = std::env::var("EMAILABLE_BATCH_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMAILABLE_BATCH_ID environment variable is required",
        )
    })?;

    let client = EmailableClient::new(ApiKey::new(api_key)?);
    let request = CheckBatch::new(BatchId::new(batch_id)?);
    let response = client.check_batch(request).await?;

    println!(
        "processed: {}/{}, message: {:?}, verdicts: {}",
        response.processed,
        response.total,
        response.message,
        response.emails.len()
    );
    for verdict in &response.emails {
        println!(
            "  {}: {} ({})",
            verdict.email,
            verdict.state.as_str(),
            verdict.reason.as_str()
        );
    }

    Ok(())
}
