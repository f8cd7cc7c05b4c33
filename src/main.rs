use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stylepanel::config::{Config, DefaultsConfig};

/// Terminal reading-style panel.
#[derive(Debug, Parser)]
#[command(name = "style-panel", version, about)]
struct Cli {
    /// Config file (default: <config dir>/style-panel/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Open the panel at startup
    #[arg(long)]
    open: bool,

    /// Print the resolved default style as TOML and exit
    #[arg(long)]
    print_defaults: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stylepanel::logging::init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if cli.open {
        config.panel.start_open = true;
    }
    let defaults = config.resolve_defaults()?;

    if cli.print_defaults {
        let table = DefaultsConfig::from_style(&defaults);
        print!("{}", toml::to_string(&table).context("serializing defaults")?);
        return Ok(());
    }

    tracing::info!(path = %path.display(), "Starting style panel");
    stylepanel::ui::runtime::run(&config, defaults).context("terminal UI failed")?;
    Ok(())
}
