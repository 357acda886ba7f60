use clap::Parser;
use nippo::cli::commands::Cli;
use nippo::cli::handlers;
use nippo::util::logging;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            logging::init_tui();
            if let Err(e) = nippo::tui::run() {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            logging::init_cli();
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
