mod accounts;
mod bank;
mod errors;
mod menu;

use std::io;
use std::process;

use bank::Bank;
use log::info;
use menu::run;

fn main() {
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!("starting virtual banking menu");

    let mut bank = Bank::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run(&mut bank, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
