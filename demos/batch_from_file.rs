use std::fs::File;
use std::io::{self, BufReader};

use emailable::{ApiKey, EmailableClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("EMAILABLE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMAILABLE_API_KEY environment variable is required",
        )
    })?;
    let path = std::env::var("EMAILABLE_FILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMAILABLE_FILE environment variable is required (newline-delimited addresses)",
        )
    })?;

    let client = EmailableClient::new(ApiKey::new(api_key)?);
    let reader = BufReader::new(File::open(path)?);
    let responses = client.submit_batches_from_reader(reader).await?;

    for response in responses {
        println!("id: {}, message: {:?}", response.id.as_str(), response.message);
    }

    Ok(())
}
