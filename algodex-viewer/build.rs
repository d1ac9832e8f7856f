use clap::{Arg, ArgAction, Command};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("algodexv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal browser for the algodex catalogue")
        .arg(
            Arg::new("patterns")
                .long("patterns")
                .help("Open on the pattern collection instead of the algorithms")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "algodexv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "algodexv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "algodexv", &outdir)?;

    Ok(())
}
