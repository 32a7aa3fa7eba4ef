//! Command-line interface for qstr
//! Runs the string utilities on text given as arguments.
//!
//! Usage:
//!   qstr word `<n>` `<text>`             - Print the nth word
//!   qstr tok `<text>` [--skip-delimiter] - Split the first token off
//!   qstr crc32 `<text>`                  - JAMCRC checksum
//!   qstr hex `<value>` / qstr unhex `<text>`
//!   qstr pad `<text>` `<length>`
//!   qstr compress `<text>` / qstr classify `<text>`
//!
//! Defaults come from the embedded configuration, optionally layered with
//! `--config <file>`. Set `QSTR_LOG` (e.g. `QSTR_LOG=debug`) for diagnostics.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use qstr::Delimiters;
use qstr_config::{Loader, QstrConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = Command::new("qstr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deterministic string, bit and hex utilities")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("delimiters")
                .long("delimiters")
                .short('d')
                .global(true)
                .help("Separator characters for word splitting (default: whitespace)"),
        )
        .subcommand(
            Command::new("word")
                .about("Print the nth word (1-based)")
                .arg(
                    Arg::new("n")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(usize)),
                )
                .arg(Arg::new("text").required(true).index(2)),
        )
        .subcommand(
            Command::new("tok")
                .about("Split the first token off the text")
                .arg(Arg::new("text").required(true).index(1))
                .arg(
                    Arg::new("skip-delimiter")
                        .long("skip-delimiter")
                        .help("Drop the delimiter that follows the token")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the token pair as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("crc32")
                .about("Print the JAMCRC checksum of the text")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(
            Command::new("hex")
                .about("Print an unsigned integer in hex")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("digits")
                        .long("digits")
                        .help("Digit count (default from config)")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("unhex")
                .about("Parse hexadecimal text")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(
            Command::new("pad")
                .about("Pad the text on the right")
                .arg(Arg::new("text").required(true).index(1))
                .arg(
                    Arg::new("length")
                        .required(true)
                        .index(2)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("pad-char")
                        .long("pad-char")
                        .value_parser(value_parser!(char)),
                )
                .arg(
                    Arg::new("cut")
                        .long("cut")
                        .help("Truncate text longer than the length")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("compress")
                .about("Trim and collapse whitespace runs")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(
            Command::new("classify")
                .about("Report whether the text is empty, an integer or a float")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .get_matches();

    // global args are propagated down, so each subcommand sees them
    let Some((name, m)) = matches.subcommand() else {
        unreachable!()
    };
    let config = load_config(m);
    let delimiters = match m.get_one::<String>("delimiters") {
        Some(chars) => Delimiters::from(chars.as_str()),
        None => config.words.delimiters(),
    };

    match name {
        "word" => {
            let n = *m.get_one::<usize>("n").unwrap();
            println!("{}", qstr::get_word_n(n, text(m), delimiters));
        }
        "tok" => handle_tok_command(m, delimiters),
        "crc32" => println!("{:08x}", qstr::crc32(text(m))),
        "hex" => {
            let value = *m.get_one::<u32>("value").unwrap();
            let digits = m.get_one::<usize>("digits").copied().unwrap_or(config.hex.digits);
            println!("{}", qstr::uint_to_hex(value, digits));
        }
        "unhex" => match qstr::hex_to_uint(text(m)) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        "pad" => {
            let length = *m.get_one::<usize>("length").unwrap();
            let pad_ch = m
                .get_one::<char>("pad-char")
                .copied()
                .unwrap_or(config.padding.pad_char);
            let cut = m.get_flag("cut") || config.padding.cut;
            println!("{}", qstr::pad_right(text(m), length, pad_ch, cut));
        }
        "compress" => println!("{}", qstr::space_compress(text(m))),
        "classify" => handle_classify_command(text(m), delimiters),
        _ => unreachable!(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QSTR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> QstrConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        tracing::debug!(path = %path, "layering configuration file");
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn text(m: &ArgMatches) -> &str {
    m.get_one::<String>("text").map(String::as_str).unwrap_or_default()
}

/// Handle the tok command
fn handle_tok_command(m: &ArgMatches, delimiters: Delimiters) {
    let pair = if m.get_flag("skip-delimiter") {
        qstr::str_tok1(text(m), delimiters)
    } else {
        qstr::str_tok(text(m), delimiters)
    };

    if m.get_flag("json") {
        let json = serde_json::to_string_pretty(&pair).unwrap_or_else(|e| {
            eprintln!("Error formatting token: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
    } else {
        println!("{}", pair.tok);
        println!("{}", pair.str);
    }
}

/// Handle the classify command
fn handle_classify_command(text: &str, delimiters: Delimiters) {
    let kind = if qstr::is_empty_str(text, delimiters) {
        "empty"
    } else if qstr::is_integer(text) {
        "integer"
    } else if qstr::is_float(text) {
        "float"
    } else {
        "text"
    };
    println!("{}", kind);
}
