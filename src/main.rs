//! CLI entry point for the castle room analysis engine

use castlerooms::io::cli::{Cli, run};
use clap::Parser;

fn main() -> castlerooms::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
