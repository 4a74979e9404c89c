use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weatherscape::config;

/// Current weather for any place, rendered over a matching photo.
#[derive(Parser)]
#[command(name = "weatherscape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Validate configuration and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format);

    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    weatherscape::server::run(config).await
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
