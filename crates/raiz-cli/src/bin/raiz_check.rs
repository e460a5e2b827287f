// raiz-check: Validate the stemmer against a `word stem` corpus.
//
// Prints every mismatch as
//   MISMATCH: word=<w> expected=<e> actual=<a>
// followed by a summary line, and exits with code 1 if any word mismatched.
//
// Usage:
//   raiz-check [-c PATH] [-q]
//
// Options:
//   -c, --corpus PATH   Corpus file (default: $RAIZ_CORPUS_PATH, then
//                       testdata/ptstems.txt)
//   -q, --quiet         Only print the summary
//   -h, --help          Print help

use std::process;

use raiz_pt::corpus;

fn main() {
    raiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (corpus_path, args) =
        raiz_cli::parse_corpus_path(&args).unwrap_or_else(|e| raiz_cli::fatal(&e));

    if raiz_cli::wants_help(&args) {
        println!("raiz-check: Validate the stemmer against a word/stem corpus.");
        println!();
        println!("Usage: raiz-check [-c PATH] [-q]");
        println!();
        println!("Each corpus line holds a word and its expected stem.");
        println!("Exits with code 1 if any word stems differently.");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH   Corpus file (default: ${}, then", raiz_cli::CORPUS_ENV);
        println!("                      testdata/ptstems.txt)");
        println!("  -q, --quiet         Only print the summary");
        println!("  -h, --help          Print this help");
        return;
    }

    let quiet = raiz_cli::has_flag(&args, &["-q", "--quiet"]);
    let path = raiz_cli::resolve_corpus_path(corpus_path.as_deref());
    tracing::debug!(path = %path.display(), "using corpus");

    let entries = corpus::load(&path).unwrap_or_else(|e| raiz_cli::fatal(&e.to_string()));
    let report = corpus::verify(raiz_pt::shared(), &entries);

    if !quiet {
        for mismatch in &report.mismatches {
            println!("MISMATCH: {mismatch}");
        }
    }
    println!(
        "{}: {} of {} words passed, {} mismatched",
        path.display(),
        report.passed(),
        report.total,
        report.mismatches.len()
    );

    if !report.is_clean() {
        process::exit(1);
    }
}
