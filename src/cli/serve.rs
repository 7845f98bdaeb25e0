use anyhow::{Result, anyhow};

use crate::api;
use crate::core::AppConfig;

pub async fn run(host: String, port: String) -> Result<()> {
    let config = AppConfig::from_env().map_err(|e| {
        anyhow!(
            "{}\nAdd OPENROUTER_API_KEY=<your key> to the environment before starting the server.",
            e
        )
    })?;
    api::serve(host, port, config).await;
    Ok(())
}
