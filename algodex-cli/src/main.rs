//! Command-line interface for algodex
//! This binary builds the reference site and exposes the highlighting core
//! for ad-hoc inspection.
//!
//! Usage:
//!   algodex build [--out <dir>] [--config <file>] [--theme <name>]   - Generate the site
//!   algodex highlight <path> [--format <format>]                     - Highlight one source file
//!   algodex list [--category <id>]                                   - List catalogue entries

use algodex_catalog::Catalog;
use algodex_config::{AlgodexConfig, Loader, ThemeName};
use algodex_site::{build_site, SiteMeta, Theme};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::Path;

fn cli() -> Command {
    Command::new("algodex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for building and inspecting the algodex reference site")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("build")
                .about("Render the full site into the output directory")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output directory (overrides configuration)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .help("Color theme: 'dark' or 'light' (overrides configuration)"),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Highlight a single source file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: 'html' or 'tokens-json'")
                        .default_value("html"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List catalogue entries")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Only list algorithms of this category id"),
                )
                .arg(
                    Arg::new("patterns")
                        .long("patterns")
                        .help("List the pattern collection instead of algorithms")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("build", sub)) => handle_build_command(
            sub.get_one::<String>("out").map(String::as_str),
            sub.get_one::<String>("config").map(String::as_str),
            sub.get_one::<String>("theme").map(String::as_str),
        ),
        Some(("highlight", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            let format = sub.get_one::<String>("format").expect("format has a default");
            handle_highlight_command(path, format);
        }
        Some(("list", sub)) => handle_list_command(
            sub.get_one::<String>("category").map(String::as_str),
            sub.get_flag("patterns"),
        ),
        _ => unreachable!("subcommand is required"),
    }
}

/// Handle the build command
fn handle_build_command(out: Option<&str>, config_file: Option<&str>, theme: Option<&str>) {
    let config = load_config(config_file, theme);
    let catalog = load_catalog();

    let out_dir = out.unwrap_or(config.output.dir.as_str());
    let meta = SiteMeta {
        title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
        footer: config.site.footer.clone(),
    };
    let theme = match config.theme.name {
        ThemeName::Dark => Theme::Dark,
        ThemeName::Light => Theme::Light,
    };

    if let Err(e) = build_site(&catalog, &meta, theme, Path::new(out_dir)) {
        eprintln!("Build error: {}", e);
        std::process::exit(1);
    }

    let pages = 5 + catalog.algorithms().len() + catalog.patterns().len();
    println!("Wrote {} pages to {}", pages, out_dir);
}

/// Handle the highlight command
fn handle_highlight_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        std::process::exit(1);
    });

    let formatted = match format {
        "html" => algodex_highlight::to_html(&source),
        "tokens-json" => {
            let tokens = algodex_highlight::scan(&source);
            serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: html, tokens-json");
            std::process::exit(1);
        }
    };

    println!("{}", formatted);
}

/// Handle the list command
fn handle_list_command(category: Option<&str>, patterns: bool) {
    let catalog = load_catalog();

    if patterns {
        println!("Patterns:\n");
        for pattern in catalog.patterns_by_number() {
            println!("  {:>2}. {} [{}]", pattern.number, pattern.title, pattern.difficulty);
            println!("      {}", pattern.description);
        }
        return;
    }

    let categories: Vec<_> = match category {
        Some(id) => match catalog.category(id) {
            Some(c) => vec![c],
            None => {
                eprintln!("Category '{}' not found", id);
                eprintln!("\nAvailable categories:");
                for c in catalog.categories() {
                    eprintln!("  {} - {}", c.id, c.name);
                }
                std::process::exit(1);
            }
        },
        None => catalog.categories().iter().collect(),
    };

    for category in categories {
        println!("{} ({})", category.name, category.id);
        for algorithm in catalog.algorithms_in(&category.id) {
            println!(
                "  {} - {} [{} time, {} space]",
                algorithm.id,
                algorithm.description,
                algorithm.time_complexity,
                algorithm.space_complexity
            );
        }
        println!();
    }
}

fn load_config(config_file: Option<&str>, theme: Option<&str>) -> AlgodexConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_file {
        loader = loader.with_file(path);
    }
    if let Some(name) = theme {
        loader = loader.set_override("theme.name", name).unwrap_or_else(|e| {
            eprintln!("Invalid theme override: {}", e);
            std::process::exit(1);
        });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn load_catalog() -> Catalog {
    Catalog::load().unwrap_or_else(|e| {
        eprintln!("Catalogue error: {}", e);
        std::process::exit(1);
    })
}
