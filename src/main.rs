use clap::Parser;
use segmenta_core::config::Config;

#[derive(Parser)]
#[command(name = "segmenta", about = "Customer-segmentation analytics gateway")]
struct Cli {
    /// Path to config.toml (default: ~/.config/segmenta/config.toml).
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Listen address override, e.g. 0.0.0.0:3000.
    #[arg(long)]
    bind: Option<String>,

    /// Upstream analytics backend base URL override.
    #[arg(long)]
    upstream: Option<String>,

    /// Write debug logs to /tmp/segmenta-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/segmenta-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("segmenta debug log started — tail -f /tmp/segmenta-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(upstream) = cli.upstream {
        config.upstream.base_url = upstream;
    }

    segmenta_gateway::run(config).await
}
