// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use infrastructure::Config;
use tracing::debug;
use crate::cli::args::Args;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting memo-gallery with arguments");

    let config = Config::resolve(args.config.as_deref())?.with_base_url(args.url);
    debug!(?config, "Resolved configuration");

    // All UI work and network continuations share this one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(cli::commands::execute(config, args.command))
}
