use std::process::ExitCode;

use clap::Parser;
use console::style;
use stamp::{cli::clap_exit_code, logging, Cli};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(clap_exit_code(&err));
        }
    };

    logging::init(cli.verbose);

    match stamp::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
