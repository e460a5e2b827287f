// raiz-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

/// Environment variable naming the corpus file.
pub const CORPUS_ENV: &str = "RAIZ_CORPUS_PATH";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RAIZ_LOG";

/// Corpus file looked up in the working directory when nothing else is given.
const DEFAULT_CORPUS: &str = "testdata/ptstems.txt";

/// Install a stderr log subscriber filtered by `RAIZ_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (or a subscriber installed by an embedding program) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Pick the corpus file.
///
/// Search order:
/// 1. `flag` argument (if provided)
/// 2. `RAIZ_CORPUS_PATH` environment variable
/// 3. `testdata/ptstems.txt` in the current directory
pub fn resolve_corpus_path(flag: Option<&str>) -> PathBuf {
    resolve_with(flag, std::env::var(CORPUS_ENV).ok())
}

fn resolve_with(flag: Option<&str>, env: Option<String>) -> PathBuf {
    if let Some(p) = flag {
        return PathBuf::from(p);
    }
    match env {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(DEFAULT_CORPUS),
    }
}

/// Parse a `--corpus=PATH`, `--corpus PATH` or `-c PATH` argument.
///
/// Returns `(corpus_path, remaining_args)`.
pub fn parse_corpus_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut corpus = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--corpus=") {
            corpus = Some(val.to_string());
        } else if arg == "--corpus" || arg == "-c" {
            match iter.next() {
                Some(val) => corpus = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((corpus, remaining))
}

/// Check if any of `flags` is in the args.
pub fn has_flag(args: &[String], flags: &[&str]) -> bool {
    args.iter().any(|a| flags.contains(&a.as_str()))
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    has_flag(args, &["--help", "-h"])
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
