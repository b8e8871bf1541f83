mod cli;
mod session;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use pane_bridge::Bridge;
use pane_common::ConfigError;
use pane_config::PaneConfig;
use pane_engine::HeadlessLoader;
use tracing_subscriber::EnvFilter;

use session::{Session, Settings};

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "pane=info".parse().unwrap()),
            ),
        )
        .init();
}

fn load_config(args: &cli::Args) -> Result<PaneConfig, ConfigError> {
    match &args.config {
        Some(path) => pane_config::load_config_from(path),
        None => pane_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // The config is read before logging is up, so its own diagnostics are
    // reported afterwards.
    let loaded = load_config(&args);
    let directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.filter_directive(),
        Err(_) => "pane=info".into(),
    });
    init_logging(&directive);

    if args.init_config {
        return match pane_config::init_config(args.config.as_deref()) {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("failed to write config: {e}");
                ExitCode::FAILURE
            }
        };
    }

    tracing::info!("pane v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        PaneConfig::default()
    });

    if args.print_config {
        println!("{}", pane_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let source = pane_config::engine_source(&config.engine);
    tracing::info!(source = %source, "engine source resolved");

    let bridge = Bridge::new(Arc::new(HeadlessLoader::new()), source);
    if let Err(e) = bridge.load() {
        tracing::error!("failed to load engine: {e}");
        return ExitCode::FAILURE;
    }

    let settings = Settings::new(&config, &args);
    let result = Session::open(&bridge, settings).and_then(|mut session| {
        let stdout = io::stdout();
        session.run(&mut stdout.lock())
    });

    bridge.unload();
    match result {
        Ok(outcome) => {
            tracing::info!(steps = outcome.steps, "shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("session failed: {e}");
            ExitCode::FAILURE
        }
    }
}
