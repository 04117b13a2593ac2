//! The `lox` command-line interface.

use loxc::commands::{lex_file, parse_file, run_file, run_prompt};
use loxc::exit;

fn main() {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let status = match args.as_slice() {
        [_] => run_prompt(),
        [_, flag] if matches!(flag.as_str(), "help" | "-h" | "--help") => {
            print_usage();
            0
        }
        [_, command, path] if command == "run" => run_file(path),
        [_, command, path] if command == "lex" => lex_file(path),
        [_, command, path] if command == "parse" => parse_file(path),
        [_, command] if matches!(command.as_str(), "run" | "lex" | "parse") => {
            eprintln!("Usage: lox {command} <script>");
            exit::USAGE
        }
        [_, path] if !path.starts_with('-') => run_file(path),
        _ => {
            print_usage();
            exit::USAGE
        }
    };

    std::process::exit(status);
}

fn print_usage() {
    eprintln!("Lox interpreter");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  lox                  Start the interactive prompt");
    eprintln!("  lox <script>         Run a script");
    eprintln!("  lox run <script>     Run a script");
    eprintln!("  lox lex <script>     Print the tokens of a script");
    eprintln!("  lox parse <script>   Print the syntax tree of a script");
    eprintln!("  lox help             Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LOX_LOG=<filter>     Enable logging, e.g. LOX_LOG=lox_eval=trace");
    eprintln!("  LOX_LOG_TREE=1       Show logs as an indented span tree");
}
