use anyhow::Result;
use clap::Parser;

use mindloom::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            input,
            max_nodes,
            topic,
            format,
            out,
            show_text,
        } => mindloom::cli::generate::run(
            input.as_deref(),
            max_nodes,
            topic.as_deref(),
            format,
            out.as_deref(),
            show_text,
        ),
        Commands::Keywords {
            input,
            max_nodes,
            counts,
        } => mindloom::cli::keywords::run(input.as_deref(), max_nodes, counts),
        Commands::Topic { input } => mindloom::cli::topic::run(input.as_deref()),
    }
}
