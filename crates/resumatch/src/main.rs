mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for table and CSV output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => commands::rank::run(&args),
        Commands::Extract { file } => commands::extract::run(&file),
        Commands::Normalize {
            file,
            text,
            lexicon,
        } => commands::normalize::run(file.as_deref(), text.as_deref(), lexicon.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
