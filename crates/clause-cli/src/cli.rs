//! Command-line definition

use crate::config::{CATALOG_ENV, LOG_ENV};
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Parse a `name=value` assignment; the value may be empty or contain `=`
///
/// # Errors
/// Returns a message when there is no `=` or the name is empty.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        Some(_) => Err(format!("missing field name in '{raw}'")),
        None => Err(format!("expected name=value, got '{raw}'")),
    }
}

/// Build the `clausegen` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("clausegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fill in legal clause templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .env(CATALOG_ENV)
                .value_parser(value_parser!(PathBuf))
                .help("Catalog file (.yaml, .yml, .toml or .json) instead of the built-in one"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output machine-readable JSON"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .global(true)
                .env(LOG_ENV)
                .help("Log filter directive, e.g. 'clause_form=debug'"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
        .subcommand(Command::new("categories").about("List template categories"))
        .subcommand(
            Command::new("search")
                .about("List templates matching a text and/or category filter")
                .arg(
                    Arg::new("query")
                        .help("Case-insensitive text matched against name and description"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("Exact category name"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show a template's fields")
                .arg(Arg::new("id").required(true).help("Template id")),
        )
        .subcommand(
            Command::new("render")
                .about("Render a template with the given field values")
                .arg(Arg::new("id").required(true).help("Template id"))
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .action(ArgAction::Append)
                        .value_parser(parse_assignment)
                        .help("Field value as name=value (repeatable)"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail if any value is missing or malformed"),
                ),
        )
        .subcommand(Command::new("check").about("Validate the catalog and report warnings"))
        .subcommand(Command::new("session").about("Interactive session on stdin"))
}
