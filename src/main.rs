//! Tunedeck - a static HTML dashboard generator for music libraries.
//!
//! Scans a directory tree for audio files, groups the tracks into an
//! artist -> album -> track hierarchy, and renders a multi-page HTML
//! dashboard into an output directory. Re-runs merge newly discovered
//! artists into the existing top-level index.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod library;
pub mod metadata;
pub mod model;
pub mod render;
pub mod scanner;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tunedeck=info".parse().unwrap()))
        .init();

    cli::run(&args)
}
