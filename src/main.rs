//! Lispy REPL and file runner.
//!
//! Run interactively as:      `RUST_LOG=info cargo run`.
//! Run each input of a file:  `cargo run -- path/to/file.lspy`.
//! Evaluate a JSON tree:      `cargo run -- -j tree.json`.

use clap::{Arg, ArgMatches, Command};
use log::{info, LevelFilter};
use std::fs;

use lispy::ast::AstNode;
use lispy::parser;
use lispy::token::cli_stream::CliStream;
use lispy::token::InputStream;
use lispy::value::{render_colored, Value};


struct Options {
    show_ast: bool,
}

fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    let matches = parse_args();
    if matches.is_present("no-color") {
        colored::control::set_override(false);
    }
    let options = Options {
        show_ast: matches.is_present("ast"),
    };

    if let Some(path) = matches.value_of("json-tree") {
        return json_tree(path, &options);
    }
    match matches.value_of("file") {
        Some(path) => file_repl(path, &options),
        None => interactive_repl(&options),
    }
}

fn parse_args() -> ArgMatches {
    Command::new("lispy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluates Lispy expressions, one input at a time")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Evaluate each input of FILE instead of starting a REPL")
                .index(1),
        )
        .arg(
            Arg::new("ast")
                .short('a')
                .long("ast")
                .help("Print the syntax tree of each input before its result"),
        )
        .arg(
            Arg::new("json-tree")
                .short('j')
                .long("json-tree")
                .value_name("PATH")
                .takes_value(true)
                .conflicts_with("file")
                .help("Evaluate a JSON-encoded syntax tree and exit"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable coloured output"),
        )
        .get_matches()
}

fn interactive_repl(options: &Options) -> Result<(), String> {
    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+d to Exit");
    println!();

    info!("Starting interactive session");
    for input in CliStream::new() {
        run_input(&input, options);
    }
    info!("Interactive session ended");
    Ok(())
}

fn file_repl(path: &str, options: &Options) -> Result<(), String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => return Err(format!("Reading {} failed: {}", path, err)),
    };

    info!("Evaluating inputs of {}", path);
    for input in InputStream::new(contents.lines().map(String::from)) {
        println!("> {}", input);
        run_input(&input, options);
        println!();
    }
    Ok(())
}

fn json_tree(path: &str, options: &Options) -> Result<(), String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => return Err(format!("Reading {} failed: {}", path, err)),
    };
    let tree = match serde_json::from_str::<AstNode>(&contents) {
        Ok(tree) => tree,
        Err(err) => return Err(format!("Invalid syntax tree in {}: {}", path, err)),
    };

    run_tree(&tree, options);
    Ok(())
}

fn run_input(input: &str, options: &Options) {
    match parser::parse(input) {
        Ok(tree) => run_tree(&tree, options),
        Err(err) => println!("{}", err),
    }
}

fn run_tree(tree: &AstNode, options: &Options) {
    if options.show_ast {
        print!("{}", tree);
    }
    print_result(&lispy::eval_tree(tree));
}

fn print_result(value: &Value) {
    println!("{}", render_colored(value));
}
