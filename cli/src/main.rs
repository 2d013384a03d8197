mod cmd;
mod config;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about, author, version)]
struct Command {
    /// Path to load the configuration file. Default to ~/.config/dropbox.json. If not found, loading from environment.
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: cmd::Command,
}

impl Command {
    fn config(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("dropbox.json")
        } else {
            PathBuf::from(".dropbox.json")
        }
    }

    fn set_log_level(&self) {
        let filter = if self.verbose { "info" } else { "warn" };
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| filter.into());
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err:?}");
        }
    }
}

#[tokio::main]
async fn main() {
    let command = Command::parse();
    command.set_log_level();

    let path = command.config();
    let config = match config::Config::from_path(&path) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("unable to load config from {path:?}: {err:?}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    let client = match config.build() {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("unable to build client: {err}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    if let Err(err) = command.subcmd.execute(&client).await {
        tracing::error!("{err:?}");
        std::process::exit(cmd::exit_code(&err));
    }
}
