// src/main.rs

use std::process::ExitCode;

use clap::Parser;

use automgr::cli::CliArgs;
use automgr::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(err) = init_logging(args.log_level, args.log_file.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match automgr::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
