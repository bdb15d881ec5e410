use anyhow::Context;
use clap::Parser;
use growth_table::cli::Cli;
use growth_table::tracing_setup::init_tracing;
use std::io::{self, BufWriter, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.command(),
        "Starting growth table"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    growth_table::run(&cli, &mut out).context("failed to print growth table")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
