use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // Mirrors the command tree in src/main.rs (arg help is omitted; the
    // completions only need names and value hints).
    let mut cmd = Command::new("algodex")
        .subcommand(
            Command::new("build")
                .arg(Arg::new("out").long("out").short('o').value_hint(ValueHint::DirPath))
                .arg(Arg::new("config").long("config").short('c').value_hint(ValueHint::FilePath))
                .arg(Arg::new("theme").long("theme")),
        )
        .subcommand(
            Command::new("highlight")
                .arg(Arg::new("path").required(true).index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("format").long("format").short('f')),
        )
        .subcommand(
            Command::new("list")
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("patterns").long("patterns").action(ArgAction::SetTrue)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "algodex", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "algodex", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "algodex", &outdir)?;

    Ok(())
}
