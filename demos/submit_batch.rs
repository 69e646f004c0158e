use std::io;

use emailable::{ApiKey, BatchOptions, EmailAddress, EmailableClient, SubmitBatch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("EMAILABLE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMAILABLE_API_KEY environment variable is required",
        )
    })?;
    let emails_raw = std::env::var("EMAILABLE_EMAILS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMAILABLE_EMAILS environment variable is required (comma-separated addresses)",
        )
    })?;

    let emails = emails_raw
        .split(',')
        .map(EmailAddress::new)
        .collect::<Result<Vec<_>, _>>()?;
    let request = SubmitBatch::new(emails, BatchOptions::default())?;

    let client = EmailableClient::new(ApiKey::new(api_key)?);
    let response = client.submit_batch(request).await?;

    println!("id: {}, message: {:?}", response.id.as_str(), response.message);

    Ok(())
}
