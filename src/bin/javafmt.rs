//! Command-line interface for javafmt
//! This binary reformats Java-family source files through the lexical
//! formatting pipeline.
//!
//! Usage:
//!   javafmt format `<path>` [--config `<file>`] [--print | --output `<path>`]
//!   javafmt tokens `<path>`       - Dump the raw token stream as JSON
//!   javafmt list-passes           - List the formatting passes in order

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::process;

use javafmt::javafmt::lexing::tokenize;
use javafmt::javafmt::pipeline::{format, passes};
use javafmt::javafmt::settings::Settings;
use javafmt_config::{FormattingRulesConfig, Loader};

fn main() {
    let matches = Command::new("javafmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A lexical reformatter for Java-family source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("format")
                .about("Reformat a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file to reformat")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML settings file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("print")
                        .long("print")
                        .action(ArgAction::SetTrue)
                        .help("Print the result to standard output"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of rewriting the input"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the raw token stream as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file to tokenize")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-passes").about("List the formatting passes in order"))
        .get_matches();

    match matches.subcommand() {
        Some(("format", format_matches)) => {
            let path = format_matches.get_one::<String>("path").unwrap();
            let config = format_matches.get_one::<String>("config");
            let print = format_matches.get_flag("print");
            let output = format_matches.get_one::<String>("output");
            handle_format_command(path, config, print, output);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        Some(("list-passes", _)) => {
            handle_list_passes_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the format command
fn handle_format_command(
    path: &str,
    config: Option<&String>,
    print: bool,
    output: Option<&String>,
) {
    let source = read_source(path);
    let settings = load_settings(config);

    let result = format(&source, &settings);
    for diagnostic in &result.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if print {
        print!("{}", result.code);
        return;
    }

    let target = output.map(String::as_str).unwrap_or(path);
    if let Err(e) = fs::write(target, &result.code) {
        eprintln!("Error: could not write {}: {}", target, e);
        process::exit(1);
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let (tokens, diagnostics) = tokenize(&source);
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Handle the list-passes command
fn handle_list_passes_command() {
    let settings = Settings::default();
    println!("Formatting passes, in order:");
    for pass in passes() {
        let state = if pass.enabled(&settings) { "on" } else { "off" };
        println!("  {:35} [{}] {}", pass.name(), state, pass.description());
    }
}

fn read_source(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: could not read {}: {}", path, e);
            process::exit(1);
        }
    }
}

/// Layer the optional user configuration over the embedded defaults and map
/// it onto the pipeline settings.
fn load_settings(config: Option<&String>) -> Settings {
    let loader = match config {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("javafmt.toml"),
    };
    match loader.build() {
        Ok(config) => to_settings(&config.formatting.rules),
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            process::exit(1);
        }
    }
}

fn to_settings(rules: &FormattingRulesConfig) -> Settings {
    Settings {
        format_curly_braces: rules.format_curly_braces,
        clear_spaces_near_brackets: rules.clear_spaces_near_brackets,
        replace_multiple_spaces: rules.replace_multiple_spaces,
        spaces_near_operators: rules.spaces_near_operators,
        space_after_comma: rules.space_after_comma,
        clear_line_breaks_in_signatures: rules.clear_line_breaks_in_signatures,
        line_break_after_semicolon: rules.line_break_after_semicolon,
        put_spaces_near_block_expression: rules.put_spaces_near_block_expression,
        split_long_lines: rules.split_long_lines,
        remove_redundant_line_breaks: rules.remove_redundant_line_breaks,
        preserve_comment_indent: rules.preserve_comment_indent,
        line_break_after_comment: rules.line_break_after_comment,
        indent: rules.indent,
        split_indent: rules.split_indent,
        switch_case_indent: rules.switch_case_indent,
        preferred_line_length: rules.preferred_line_length,
    }
}
