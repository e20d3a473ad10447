use inout::commands::Cli;
use inout::libs::logger;
use inout::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
