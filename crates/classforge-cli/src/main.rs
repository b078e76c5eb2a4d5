//! Classforge CLI - Model classes and generate UML diagrams and Python skeletons

mod cli;
mod menu;

use clap::Parser;

fn main() {
    // Logging is initialized inside app.run() once the flags are known
    let cli_args = cli::Cli::parse();

    let app = cli::ClassforgeApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
