//! CLI module for the text rephraser
//!
//! Provides subcommands:
//! - `serve`: rephrase API plus the web page (or API only)
//! - `rephrase`: submit text to a running server from the terminal

pub mod rephrase;
pub mod serve;

use clap::{Parser, Subcommand};

/// Text Rephraser - rewrite text more clearly and professionally
#[derive(Parser)]
#[command(name = "text-rephraser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the rephrase server
    Serve(serve::ServeArgs),

    /// Rephrase text using a running server
    Rephrase(rephrase::RephraseArgs),
}
