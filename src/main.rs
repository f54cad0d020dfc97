use anyhow::{Context, Result};
use clap::Parser;
use critters_lib::app::{App, JsonLinesView, LogView, View};
use critters_lib::model::config::AppConfig;
use critters_lib::model::BrainRegistry;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// How each tick is reported
    #[arg(short, long, value_enum, default_value = "log")]
    mode: Mode,

    /// Overrides the seed from the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Run ticks back to back instead of at the configured rate
    #[arg(long)]
    unthrottled: bool,

    /// Only spawn these brain codes (comma separated)
    #[arg(long, value_delimiter = ',')]
    brains: Vec<String>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    /// Periodic summaries through the log
    Log,
    /// One JSON document per tick on stdout
    Json,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AppConfig::from_toml(&content).with_context(|| format!("loading {}", path.display()))?
        }
        None => AppConfig::default(),
    };
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // logs go to stderr so json frames on stdout stay clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::info!(
        fingerprint = %config.fingerprint(),
        seed = ?config.world.seed,
        "Configuration loaded"
    );

    let mut registry = BrainRegistry::with_builtins();
    if !args.brains.is_empty() {
        registry.retain_codes(&args.brains)?;
    }

    let mut app = App::new(config, &registry)?
        .with_max_ticks(args.ticks)
        .with_throttle(!args.unthrottled);

    let mut view: Box<dyn View> = match args.mode {
        Mode::Log => Box::new(LogView::new(100)),
        Mode::Json => Box::new(JsonLinesView::new(std::io::BufWriter::new(std::io::stdout()))),
    };

    let summary = app.run(view.as_mut()).await?;
    tracing::info!(
        ticks = summary.ticks,
        living = summary.living,
        reason = ?summary.reason,
        "Exited clean"
    );
    Ok(())
}
