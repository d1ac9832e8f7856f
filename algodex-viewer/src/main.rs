//! Standalone binary for the algodex interactive catalogue browser.
//! Usage:
//!   algodexv [--patterns]

mod viewer;

use clap::{Arg, ArgAction, Command};

fn main() {
    let matches = Command::new("algodexv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal browser for the algodex catalogue")
        .arg(
            Arg::new("patterns")
                .long("patterns")
                .help("Open on the pattern collection instead of the algorithms")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let open_patterns = matches.get_flag("patterns");
    if let Err(err) = viewer::viewer::run_viewer(open_patterns) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
