/**
 * Zodox CLI - zodox-graph
 *
 * Resolves a module manifest and prints the module graph of one root module.
 */
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;
use zodox_cli::graph::{GraphCommand, OutputFormat};

fn main() {
    let matches = Command::new("zodox-graph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve a module manifest into its module graph")
        .arg(
            Arg::new("manifest")
                .value_name("MANIFEST")
                .required(true)
                .help("Path to the JSON module manifest"),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("NAME")
                .required(true)
                .help("Module to resolve"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["tree", "json"])
                .default_value("tree")
                .help("Output format"),
        )
        .arg(
            Arg::new("kind")
                .short('k')
                .long("kind")
                .value_name("KIND")
                .action(ArgAction::Append)
                .help("Declaration kind to resolve (repeatable)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log resolution steps to stderr"),
        )
        .get_matches();

    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .unwrap_or(Ok(OutputFormat::Tree));
    let format = match format {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let command = GraphCommand {
        manifest: matches
            .get_one::<String>("manifest")
            .map(PathBuf::from)
            .unwrap_or_default(),
        root: matches.get_one::<String>("root").cloned().unwrap_or_default(),
        format,
        kinds: matches
            .get_many::<String>("kind")
            .map(|kinds| kinds.cloned().collect())
            .unwrap_or_default(),
        verbose: matches.get_flag("verbose"),
    };

    match command.execute() {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
