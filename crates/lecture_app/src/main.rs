mod platform;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use platform::config::{self, LogTarget};

#[derive(Debug, Parser)]
#[command(
    name = "lecture_client",
    version,
    about = "Summarize lectures and ask questions about them"
)]
struct Cli {
    /// RON config file; defaults to ./lecture_client.ron when present.
    #[arg(long, env = "LECTURE_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the processing server.
    #[arg(long, env = "LECTURE_SERVER_URL")]
    server_url: Option<String>,

    #[arg(long)]
    submit_timeout_secs: Option<u64>,

    #[arg(long)]
    ask_timeout_secs: Option<u64>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    log: Option<LogTarget>,

    /// Raise log level (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(url) = cli.server_url {
        config.server_url = url;
    }
    if let Some(secs) = cli.submit_timeout_secs {
        config.submit_timeout_secs = secs;
    }
    if let Some(secs) = cli.ask_timeout_secs {
        config.ask_timeout_secs = secs;
    }
    if let Some(target) = cli.log {
        config.log = target;
    }

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = client_logging::initialize(config.log.into(), level, &config.log_file) {
        eprintln!("Warning: logging disabled: {err}");
    }

    platform::run_app(&config)
}
