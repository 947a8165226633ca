//! Min/max expression calculator CLI.

use mmc::commands::{eval_expression, explain_error, run_file};
use mmc::repl::{run_repl, ReplConfig};
use std::io;
use std::path::Path;

fn main() {
    mmc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let outcome = match command {
        "repl" => {
            let mut config = ReplConfig::default();
            for arg in args.iter().skip(2) {
                if arg == "--quiet" || arg == "-q" {
                    config.quiet = true;
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: mm repl [--quiet]");
                    std::process::exit(1);
                }
            }
            run_repl(io::stdin().lock(), &mut stdout, &config).map(|_| true)
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: mm eval <expression>");
                eprintln!("Example: mm eval \"M(15, m(16, 8))\"");
                std::process::exit(1);
            }
            // Allow the expression to arrive split across shell words.
            let expression = args[2..].join(" ");
            eval_expression(&expression, &mut stdout, &mut stderr)
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: mm run <file>");
                std::process::exit(1);
            }
            run_file(Path::new(&args[2]), &mut stdout, &mut stderr)
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mm --explain <ERROR_CODE>");
                eprintln!("Example: mm --explain E1003");
                std::process::exit(1);
            }
            explain_error(&args[2], &mut stdout, &mut stderr)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "version" | "--version" | "-v" => {
            println!("mm {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Min/Max Expression Calculator");
    println!();
    println!("Usage: mm [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl [--quiet]       Interactive calculator (default)");
    println!("  eval <expression>    Evaluate one expression and print the result");
    println!("  run <file>           Evaluate every non-blank line of a file");
    println!("  --explain <code>     Explain an error code (e.g., E1003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Expressions:");
    println!("  m(a, b)              minimum of a and b");
    println!("  M(a, b)              maximum of a and b");
    println!();
    println!("Examples:");
    println!("  mm eval \"m(5,10)\"               # 5");
    println!("  mm eval \"M(15,m(16,8))\"         # 15");
    println!("  mm run expressions.txt");
    println!("  mm --explain E1002");
    println!();
    println!("Set RUST_LOG=mm_eval=trace to log every stack operation.");
}
