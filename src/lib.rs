#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use app::App;
pub use config::{PERSISTENCE, SimulationMode, SourceKind, ViewMode};
pub use data::{LoadedTokens, RemoteIndexSource, SourceError, SyntheticSource, TokenSource, load_tokens};
pub use engine::TickerEngine;
pub use models::{TokenInfo, TokenRecord};

// CLI argument parsing
use clap::{Args, Parser};

use config::SOURCE;

/// Where the tokens come from. Shared by the GUI and the snapshot binary.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Token source: generated locally or read from the remote asset index
    #[arg(long, value_enum, default_value_t = SourceKind::Synthetic)]
    pub source: SourceKind,

    /// Number of tokens to load
    #[arg(long, default_value_t = SOURCE.default_count)]
    pub count: usize,

    /// Asset index endpoint (remote source only)
    #[arg(long, default_value_t = SOURCE.index_url.to_string())]
    pub index_url: String,

    /// Base URL for per-token details; the token id is appended
    #[arg(long, default_value_t = SOURCE.detail_base_url.to_string())]
    pub detail_url: String,

    /// Seed for every random choice (generation and market moves)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Start in this view instead of the saved one
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Market simulation mode; defaults to the view's own mode
    #[arg(long, value_enum)]
    pub mode: Option<SimulationMode>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["pump-ticker"]).unwrap();
        assert_eq!(cli.source.source, SourceKind::Synthetic);
        assert_eq!(cli.source.count, 20);
        assert_eq!(cli.source.index_url, SOURCE.index_url);
        assert!(cli.source.seed.is_none());
        assert!(cli.view.is_none() && cli.mode.is_none());
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::try_parse_from([
            "pump-ticker",
            "--source",
            "remote",
            "--count",
            "3",
            "--view",
            "grid",
            "--mode",
            "burst",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(cli.source.source, SourceKind::Remote);
        assert_eq!(cli.source.count, 3);
        assert_eq!(cli.view, Some(ViewMode::Grid));
        assert_eq!(cli.mode, Some(SimulationMode::Burst));
        assert_eq!(cli.source.seed, Some(9));
    }

    #[test]
    fn cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["pump-ticker", "--mode", "turbo"]).is_err());
    }
}
