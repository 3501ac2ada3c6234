use std::io::Read;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::{debug, Level};

use cooklang::conformance;
use cooklang::language::LoadingError;
use cooklang::parsing;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("cooklang")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse recipes written in the Cooklang markup.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit debugging output from the parser on standard error."),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit detailed tracing, including each rejected annotation."),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse the given recipe and print its steps and metadata as JSON")
                .arg(
                    Arg::new("pretty")
                        .short('p')
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Indent the JSON output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the recipe. Use '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given recipe and summarize what was found")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the recipe. Use '-' for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("trace") {
        Level::TRACE
    } else if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("parse", submatches)) => {
            let filename = filename(submatches);
            let content = read(filename);
            let recipe = parsing::parse(&content);
            let result = conformance::render(&recipe);

            let output = if submatches.get_flag("pretty") {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            };

            match output {
                Ok(json) => println!("{}", json),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = read(filename);
            let recipe = parsing::parse(&content);

            println!(
                "{}: {} steps, {} ingredients, {} cookware, {} timers, {} metadata",
                filename.display(),
                recipe
                    .steps
                    .len(),
                recipe
                    .ingredients()
                    .count(),
                recipe
                    .cookware()
                    .count(),
                recipe
                    .timers()
                    .count(),
                recipe
                    .metadata
                    .len()
            );
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: cooklang [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    // required by clap, so always present
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");
    Path::new(filename)
}

fn read(filename: &Path) -> String {
    debug!("Reading {}", filename.display());

    match load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() != Some("-") {
        return parsing::load(filename);
    }

    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|error| LoadingError {
            problem: "Failed reading".to_string(),
            details: error
                .kind()
                .to_string(),
            filename,
        })?;

    parsing::decode(filename, &bytes).map(str::to_string)
}
