use clap::Parser;
use racedb::app::{handle_fatal_error, init_logging, AppConfig};
use racedb::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let app = match AppConfig::new(cli.verbose, cli.quiet) {
        Ok(app) => app,
        Err(e) => handle_fatal_error(e, verbose),
    };
    init_logging(&app);

    if let Err(e) = execute_command(cli, &app) {
        handle_fatal_error(e, verbose);
    }
}
