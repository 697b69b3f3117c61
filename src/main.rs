use anyhow::Result;
use tinyalias::config::{self, Config};
use tinyalias::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: `RUST_LOG` filter, text or JSON output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}
