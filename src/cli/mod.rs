//! Command-line interface.
//!
//! One-shot invocation: `tunedeck [SOURCE]`. When the source directory is
//! omitted, it is prompted for interactively.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::dashboard;
use crate::library;
use crate::render::Renderer;

/// Tunedeck CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the music folder to scan (prompted for when omitted)
    pub source: Option<PathBuf>,

    /// Output directory for the generated dashboard
    #[arg(short, long, env = "TUNEDECK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to a TOML config file (default: tunedeck.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run a full scan-and-generate pass.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let source = match &cli.source {
        Some(path) => path.clone(),
        None => prompt_for_source()?,
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.root.clone());

    info!(source = %source.display(), "Scanning music folder");
    let (music_data, track_metadata) = library::build_library(&source, &config.library)?;
    info!(
        artists = music_data.artist_count(),
        tracks = track_metadata.len(),
        "Scan complete"
    );

    let renderer = Renderer::new()?;
    dashboard::build(&music_data, &output, &renderer)?;

    println!("Dashboard generated in {} folder.", output.display());
    Ok(())
}

/// Interactive fallback matching the original one-prompt UX.
fn prompt_for_source() -> anyhow::Result<PathBuf> {
    print!("Enter the path to your music folder: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_fails_fast_on_missing_source() {
        let cli = Cli {
            source: Some(PathBuf::from("/nonexistent/music")),
            output: Some(PathBuf::from("/tmp/unused_output")),
            config: None,
        };
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn run_generates_dashboard_for_empty_source() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let out_root = output.path().join("dash");

        let cli = Cli {
            source: Some(source.path().to_path_buf()),
            output: Some(out_root.clone()),
            config: None,
        };
        run(&cli).unwrap();
        assert!(out_root.join("index.html").is_file());
    }
}
