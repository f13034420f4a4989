mod cli;
mod logging;
mod output;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run().unwrap_or_else(|err| {
        eprintln!("error: {:#}", err);
        ExitCode::FAILURE
    })
}
