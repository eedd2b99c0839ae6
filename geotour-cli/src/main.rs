//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = geotour_cli::init_logging() {
        eprintln!("geotour: failed to initialise logging: {err}");
    }
    if let Err(err) = geotour_cli::run() {
        eprintln!("geotour: {err}");
        std::process::exit(1);
    }
}
