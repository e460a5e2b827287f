// Validation corpus: `word stem` pairs, one per line.
//
// Format:
//   - UTF-8 text, one pair per line, separated by whitespace
//   - blank lines and lines starting with `#` are skipped
//   - surrounding whitespace is ignored

use std::fmt;
use std::path::{Path, PathBuf};

use crate::Stemmer;

/// Error type for corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not hold exactly a word and a stem.
    #[error("malformed line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

/// One `word stem` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub word: String,
    pub stem: String,
}

/// A word whose computed stem differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub word: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word={} expected={} actual={}",
            self.word, self.expected, self.actual
        )
    }
}

/// Outcome of checking a stemmer against a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    /// Number of pairs checked.
    pub total: usize,
    /// Every pair that did not match, in corpus order.
    pub mismatches: Vec<Mismatch>,
}

impl CorpusReport {
    /// Number of pairs that matched.
    pub fn passed(&self) -> usize {
        self.total - self.mismatches.len()
    }

    /// `true` if every pair matched.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Parse corpus text.
pub fn parse(text: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
    let mut entries = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(word), Some(stem), None) => entries.push(CorpusEntry {
                word: word.to_string(),
                stem: stem.to_string(),
            }),
            _ => {
                return Err(CorpusError::Malformed {
                    line: i + 1,
                    content: raw.to_string(),
                });
            }
        }
    }
    Ok(entries)
}

/// Read and parse a corpus file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<CorpusEntry>, CorpusError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse(&text)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded corpus");
    Ok(entries)
}

/// Stem every corpus word and collect the pairs that do not match.
pub fn verify<S: Stemmer + ?Sized>(stemmer: &S, entries: &[CorpusEntry]) -> CorpusReport {
    let mut report = CorpusReport {
        total: entries.len(),
        mismatches: Vec::new(),
    };

    for entry in entries {
        let actual = stemmer.stem(&entry.word);
        if actual != entry.stem {
            tracing::warn!(
                word = %entry.word,
                expected = %entry.stem,
                actual = %actual,
                "stem mismatch"
            );
            report.mismatches.push(Mismatch {
                word: entry.word.clone(),
                expected: entry.stem.clone(),
                actual,
            });
        }
    }

    tracing::debug!(
        total = report.total,
        mismatches = report.mismatches.len(),
        "corpus verified"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PortugueseStemmer;

    #[test]
    fn parse_pairs() {
        let entries = parse("ajuda ajud\n  abafaram   abaf  \n").unwrap();
        assert_eq!(
            entries,
            vec![
                CorpusEntry { word: "ajuda".into(), stem: "ajud".into() },
                CorpusEntry { word: "abafaram".into(), stem: "abaf".into() },
            ]
        );
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let entries = parse("# word stem\n\najudou ajud\n\t\n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "ajudou");
    }

    #[test]
    fn parse_tab_separated() {
        let entries = parse("canções\tcançõ\n").unwrap();
        assert_eq!(entries[0].stem, "cançõ");
    }

    #[test]
    fn reject_single_field() {
        let err = parse("ajuda ajud\nsozinho\n").unwrap_err();
        match err {
            CorpusError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "sozinho");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reject_extra_field() {
        assert!(matches!(
            parse("a b c"),
            Err(CorpusError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = load("/nonexistent/raiz/corpus.txt").unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/raiz/corpus.txt"));
    }

    #[test]
    fn verify_reports_mismatches() {
        let entries = parse("ajuda ajud\najudado ajuda\n").unwrap();
        let report = verify(&PortugueseStemmer::new(), &entries);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed(), 1);
        assert!(!report.is_clean());
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                word: "ajudado".into(),
                expected: "ajuda".into(),
                actual: "ajud".into(),
            }]
        );
        assert_eq!(
            report.mismatches[0].to_string(),
            "word=ajudado expected=ajuda actual=ajud"
        );
    }

    #[test]
    fn verify_empty_corpus() {
        let report = verify(&PortugueseStemmer::new(), &[]);
        assert!(report.is_clean());
        assert_eq!(report.passed(), 0);
    }
}
