//! User-facing verbose output.
//!
//! Diagnostics go through the `log` facade; these helpers are for the chatter
//! a user asks for with `--verbose`.

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
}
