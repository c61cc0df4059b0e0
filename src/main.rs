use clap::Parser;
use text_rephraser::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Rephrase(args) => cli::rephrase::run(args).await,
    }
}
