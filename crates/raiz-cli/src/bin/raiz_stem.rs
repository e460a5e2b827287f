// raiz-stem: Stem words from stdin.
//
// Reads words from stdin (one per line) and prints each with its stem:
//   word -> stem
//
// Usage:
//   raiz-stem [OPTIONS]
//
// Options:
//   -l, --lowercase   Lowercase words before stemming
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use raiz_pt::PortugueseStemmer;

fn main() {
    raiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if raiz_cli::wants_help(&args) {
        println!("raiz-stem: Stem Portuguese words from stdin.");
        println!();
        println!("Usage: raiz-stem [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  word -> stem");
        println!();
        println!("Options:");
        println!("  -l, --lowercase   Lowercase words before stemming");
        println!("  -h, --help        Print this help");
        return;
    }

    let mut stemmer = PortugueseStemmer::new();
    if raiz_cli::has_flag(&args, &["-l", "--lowercase"]) {
        stemmer.set_lowercase(true);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if writeln!(out, "{word} -> {}", stemmer.stem(word)).is_err() {
            // Closed pipe.
            break;
        }
    }
    let _ = out.flush();
}
