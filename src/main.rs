use clap::Parser;
use hamilton_exits::app::{run_app, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
