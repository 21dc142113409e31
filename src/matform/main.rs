//! The `matform` binary. Everything lives in `cli/`; this file only runs it and turns an error
//! into a message on stderr and exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
