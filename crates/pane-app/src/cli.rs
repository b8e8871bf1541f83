use clap::Parser;
use std::path::PathBuf;

/// Pane: open windows on the engine and print the events they produce.
#[derive(Parser, Debug)]
#[command(name = "pane", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug` or `pane_bridge=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of windows to open.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub windows: usize,

    /// Stop after this many steps. Runs until a window is closed otherwise.
    #[arg(long)]
    pub steps: Option<u64>,

    /// Window width override, in physical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height override, in physical pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Step interval override, in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Fill and present the frame buffer on every redraw.
    #[arg(long)]
    pub draw: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write a commented config template (to `--config` or the default
    /// path) and exit. An existing file is never overwritten.
    #[arg(long, conflicts_with = "print_config")]
    pub init_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["pane"]);
        assert_eq!(args.windows, 1);
        assert_eq!(args.steps, None);
        assert!(!args.draw);
        assert!(!args.init_config);
    }

    #[test]
    fn init_config_takes_the_config_path() {
        let args = Args::parse_from(["pane", "--init-config", "--config", "/tmp/pane.toml"]);
        assert!(args.init_config);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pane.toml")));
        assert!(Args::try_parse_from(["pane", "--init-config", "--print-config"]).is_err());
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "pane", "-n", "2", "--steps", "10", "--width", "64", "--draw",
        ]);
        assert_eq!(args.windows, 2);
        assert_eq!(args.steps, Some(10));
        assert_eq!(args.width, Some(64));
        assert!(args.draw);
    }
}
