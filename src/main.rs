use std::{io, process::ExitCode};

use clap::Parser;
use wg_allowedips::{
    cli::{Args, SettingsLoader},
    diagnostics::LogDiagnostics,
    error::AllowedIpsError,
    logging,
    net::CommandResolver,
    runtime::execute,
};

fn main() -> ExitCode {
    logging::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and go to stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::fatal(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AllowedIpsError> {
    let settings = SettingsLoader::load(args)?;
    let resolver = CommandResolver::from_config(&settings.config.resolver);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&settings, &resolver, &mut LogDiagnostics, &mut out)
}
