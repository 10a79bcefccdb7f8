//! archgraph CLI
//!
//! # Usage
//!
//! ```bash
//! archgraph print-children deps.dot 1 --depth 3
//! archgraph search deps.dot "App&CD;Pie"
//! archgraph --raw hotspots deps.dot --in --top 10
//! archgraph validate-parents deps.dot arch.json --report out/validation.txt
//! archgraph -o out/grouped.dot group deps.dot G v03 v04
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod context;
mod logging;

use cli::Cli;
use commands::Outcome;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(cli, &mut out);
    let _ = out.flush();

    match result {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Findings) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
