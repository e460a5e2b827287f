//! Portuguese stemming.
//!
//! Reduces an inflected Portuguese word to its stem by suffix stripping, in
//! five steps guided by the R1, R2 and RV regions of the word.
//!
//! - [`stemmer`] -- the engine ([`PortugueseStemmer`]) and its options
//! - [`corpus`] -- reading and checking `word stem` validation files
//!   (feature `corpus`)
//!
//! ```
//! assert_eq!(raiz_pt::stem("ajudou"), "ajud");
//! ```

use std::sync::LazyLock;

pub mod stemmer;

#[cfg(feature = "corpus")]
pub mod corpus;

pub use stemmer::{PortugueseStemmer, Step, StemTrace, StemmerOptions};

/// Anything that reduces a word to a stem.
pub trait Stemmer {
    /// Return the stem of `word`. Must not fail for any input.
    fn stem(&self, word: &str) -> String;
}

impl Stemmer for PortugueseStemmer {
    fn stem(&self, word: &str) -> String {
        PortugueseStemmer::stem(self, word)
    }
}

static SHARED: LazyLock<PortugueseStemmer> = LazyLock::new(PortugueseStemmer::new);

/// A process-wide stemmer with default options, built on first use.
pub fn shared() -> &'static PortugueseStemmer {
    &SHARED
}

/// Stem `word` with the [`shared`] stemmer.
pub fn stem(word: &str) -> String {
    SHARED.stem(word)
}

/// Library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_is_built_once() {
        assert!(std::ptr::eq(shared(), shared()));
    }

    #[test]
    fn stem_uses_defaults() {
        assert_eq!(stem("ajuda"), "ajud");
        assert_eq!(stem("Ajuda"), "Ajud");
    }

    #[test]
    fn trait_object() {
        let stemmer: Box<dyn Stemmer> = Box::new(PortugueseStemmer::new());
        assert_eq!(stemmer.stem("abafaram"), "abaf");
    }

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }
}
