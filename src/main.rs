#![forbid(unsafe_code)]

//! checksymlinks CLI entry point.

use clap::Parser;
use clap::error::ErrorKind;

mod cli_app;

fn main() {
    let args = match cli_app::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version keep clap's exit 0. Usage errors are remapped
            // from clap's default exit 2 to the documented exit 1.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    if let Err(e) = cli_app::run(&args) {
        eprintln!("checksymlinks: {e}");
        std::process::exit(1);
    }
}
