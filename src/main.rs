use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phonecheck::config::Config;
use phonecheck::tui::{Theme, ThemePreset};

#[derive(Parser)]
#[command(name = "phonecheck")]
#[command(author, version, about = "Terminal client for the mobile phone addiction assessment service", long_about = None)]
struct Cli {
    /// Prediction service URL (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Theme preset (catppuccin-mocha, nord)
    #[arg(short, long)]
    theme: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stderr only: stdout belongs to the TUI.
    let filter = if cli.verbose {
        "phonecheck=debug"
    } else {
        "phonecheck=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        url::Url::parse(&endpoint)?;
        config.endpoint = endpoint;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let preset = ThemePreset::from_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!("unknown theme {:?}, using default", config.theme);
        ThemePreset::default()
    });

    tracing::info!("starting assessment session against {}", config.endpoint);
    phonecheck::tui::run(Theme::from_preset(preset), config.endpoint).await
}
