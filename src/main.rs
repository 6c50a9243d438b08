use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

use greeter::harness::{self, CheckStatus, CHECK_NAME, EXIT_FAIL, EXPECTED_GREETING};
use greeter::logging::log_init;
use greeter::{Cli, GreeterConfig};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_FAIL),
            };
        }
    };

    let level = match cli.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_FAIL);
        }
    };
    log_init(level);

    let config = GreeterConfig::from_build();
    log::info!("Salutation: {:?}", config.salutation);

    let name = cli.name.as_deref().unwrap_or(CHECK_NAME);
    let expected = cli.expect.as_deref().unwrap_or(EXPECTED_GREETING);

    let outcome = harness::run_check(&config.greeter(), name, expected);
    match &outcome.actual {
        Ok(actual) if outcome.status == CheckStatus::Pass => log::info!("PASS: {}", actual),
        Ok(actual) => log::error!("FAIL: expected {:?}, got {:?}", outcome.expected, actual),
        Err(e) => log::error!("FAIL: formatter error: {}", e),
    }

    let mut status = outcome.status;
    if cli.native {
        let native = harness::run_c_check();
        log::info!("C harness: {:?}", native);
        if native == CheckStatus::Fail {
            status = CheckStatus::Fail;
        }
    }

    status.into()
}
