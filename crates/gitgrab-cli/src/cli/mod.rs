//! CLI for git-grab.

mod summary;

use anyhow::Result;
use clap::Parser;
use gitgrab_core::batch::run_urls;
use gitgrab_core::clone::Git2Cloner;
use gitgrab_core::config::{self, GrabConfig};
use gitgrab_core::git_url::GitUrlParser;
use gitgrab_core::logging;
use gitgrab_core::process::ProcessSettings;
use std::sync::Arc;

/// Clone git repositories into directories named after their URL paths.
#[derive(Debug, Parser)]
#[command(name = "git-grab", version)]
#[command(about = "Clone git repositories into directories named after their URL paths", long_about = None)]
pub struct Cli {
    /// Repository URLs: https://, ssh://, user@host:path, or a local path.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Seconds to wait for each clone before reporting a timeout.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Clone depth; 0 fetches the full history.
    #[arg(long, value_name = "N")]
    pub depth: Option<u32>,

    /// Do not print transfer progress while cloning.
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Runs the CLI and returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        Cli::parse().run().await
    }

    /// Command-line flags take precedence over the config file.
    pub fn apply(&self, cfg: &mut GrabConfig) {
        if let Some(secs) = self.timeout {
            cfg.clone_timeout_secs = secs;
        }
        if let Some(depth) = self.depth {
            cfg.depth = depth;
        }
        if self.no_progress {
            cfg.show_progress = false;
        }
    }

    async fn run(self) -> Result<i32> {
        let loaded = config::load_or_init();
        let log_to_file = loaded.as_ref().is_ok_and(|l| l.config.log_to_file);
        if logging::init_logging(log_to_file).is_err() {
            logging::init_logging_stderr();
            tracing::warn!("could not open log file; logging to stderr only");
        }

        let mut cfg = match loaded {
            Ok(config::LoadedConfig { config, created }) => {
                if let Some(path) = created {
                    tracing::info!("created default config at {}", path.display());
                }
                config
            }
            Err(e) => {
                tracing::warn!("could not load config, using defaults: {:#}", e);
                GrabConfig::default()
            }
        };

        self.apply(&mut cfg);
        tracing::debug!("effective config: {:?}", cfg);

        let work_dir = std::env::current_dir()?;
        let settings = ProcessSettings::from_config(work_dir, &cfg);
        let tally = run_urls(&self.urls, &GitUrlParser, Arc::new(Git2Cloner), &settings).await;

        if tally.total() > 0 {
            println!("{}", summary::render(&tally, summary::color_enabled()));
        }
        Ok(tally.exit_code())
    }
}
