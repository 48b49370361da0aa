use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use ampdeck::{ApiHandle, App, RegistryClient, UiOptions};

#[derive(Debug, Parser)]
#[command(
    name = "ampdeck",
    version,
    about = "Terminal dashboard for managing an AMP vehicle registry"
)]
struct Cli {
    /// Base URL of the registry service
    #[arg(
        long = "api-url",
        env = "AMPDECK_API_URL",
        default_value = "http://localhost:8000",
        value_name = "URL"
    )]
    api_url: String,

    /// UI poll interval in milliseconds
    #[arg(long = "tick-ms", default_value_t = 250, value_name = "MS")]
    tick_ms: u64,

    /// Delete rows without the confirmation popup
    #[arg(long = "no-confirm-delete")]
    no_confirm_delete: bool,

    /// Hide the key help line
    #[arg(long = "no-help")]
    no_help: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = RegistryClient::new(&cli.api_url)
        .with_context(|| format!("failed to build client for {}", cli.api_url))?;
    let (api, events) = ApiHandle::channel(client);
    let options = UiOptions::default()
        .with_tick_rate(Duration::from_millis(cli.tick_ms))
        .with_confirm_delete(!cli.no_confirm_delete)
        .with_help(!cli.no_help);

    let mut app = App::new(api, events, options);
    app.run()
}
