mod args;
mod output;

use anyhow::Result;
use clap::Parser;
use sportmonks_api::{Client, Config, BASE_URL};

use crate::args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sportmonks=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(timezone) = &cli.timezone {
        config = config.with_timezone(timezone.as_str());
    }

    let base_url = cli.base_url.as_deref().unwrap_or(BASE_URL);
    let mut client = Client::with_base_url(config, base_url)?;
    cli.apply(&mut client);

    let body = client.call(&cli.path).await?;
    println!("{}", output::render_json(&body, cli.compact)?);

    Ok(())
}
