//! Chaos compiler CLI.

use chaosc::commands::{lex_file, parse_lex_options, print_tables};

fn main() {
    chaosc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    flags.push(arg.clone());
                } else if path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("Usage: chaos lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --seed=<n>          Symbol table hash seed (default: 0)");
                eprintln!("  --table-order=<n>   Initial symbol table size 2^n (default: 6)");
                eprintln!("  --hasher=<name>     Symbol hash: xx (default), fx");
                eprintln!("  --stats             Print symbol table statistics");
                std::process::exit(1);
            };

            let options = parse_lex_options(&flags);
            if !lex_file(path, &options) {
                std::process::exit(1);
            }
        }
        "tables" => print_tables(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("Chaos Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Chaos Compiler");
    println!();
    println!("Usage: chaos <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and print the tokens");
    println!("  tables               Show lexer table sizes");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --seed=<n>           Symbol table hash seed (default: 0)");
    println!("  --table-order=<n>    Initial symbol table size 2^n (default: 6)");
    println!("  --hasher=<name>      Symbol hash: xx (default), fx");
    println!("  --stats              Print symbol table statistics");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=chaos_lexer=debug) for tracing output.");
}
