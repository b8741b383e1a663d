//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = talent_cli::run() {
        eprintln!("talent: {err}");
        std::process::exit(1);
    }
}
