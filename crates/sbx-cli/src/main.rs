use clap::Parser;

mod cli;
mod commands;
mod render;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    // Logs go to stderr; stdout carries the command output.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    commands::run_command(cli)
}
