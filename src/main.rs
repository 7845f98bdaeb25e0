use anyhow::Result;
use edumate::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
