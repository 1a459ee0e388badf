use std::io;
use std::process::ExitCode;
use log::error;
use crate::initialization::init;
use crate::worker::run;

mod config;
mod initialization;
mod logging;
mod manager_forecast;
mod models;
mod presenter;
mod worker;

fn main() -> ExitCode {
    // If initialization fails there is no logger yet, stderr is all we have
    let (config, mgr) = match init() {
        Ok((c, m)) => (c, m),
        Err(e) => {
            eprintln!("Initialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    match run(&config, &mgr, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
