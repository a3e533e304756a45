//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Convert dollar amounts to English words
#[derive(Parser, Debug)]
#[command(name = "currency-words")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one amount; reads a line from stdin when AMOUNT is omitted
    Convert(ConvertArgs),

    /// Start the HTTP form and JSON API
    Serve(ServeArgs),
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Amount in dollars, e.g. "999 999 999,99"
    #[arg(allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the serve command
///
/// Unset flags fall back to `GATEWAY_HOST` / `GATEWAY_PORT`, then `SERVER_HOST` / `SERVER_PORT`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}
