// WASM bindings for the raiz Portuguese stemmer.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen that wraps
// `PortugueseStemmer` from raiz-pt. Structured results are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const stemmer = new WasmStemmer();
//   stemmer.stem("canções");              // => "cançõ"
//   stemmer.stemAll(["livros", "falar"]); // => [{ word: "livros", stem: "livr" }, ...]
//   stemmer.explain("faço");              // => { stem: "fac", steps: [4, 5] }
//   stemmer.setLowercase(true);
//   WasmStemmer.getVersion();

use serde::Serialize;
use wasm_bindgen::prelude::*;

use raiz_pt::{PortugueseStemmer, StemTrace};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// A word and its stem.
#[derive(Debug, PartialEq, Serialize)]
struct JsStem {
    word: String,
    stem: String,
}

/// A stem and the numbers of the steps that produced it.
#[derive(Debug, PartialEq, Serialize)]
struct JsTrace {
    stem: String,
    steps: Vec<u8>,
}

impl From<StemTrace> for JsTrace {
    fn from(trace: StemTrace) -> Self {
        JsTrace {
            stem: trace.stem,
            steps: trace.applied.iter().map(|s| s.number()).collect(),
        }
    }
}

fn stem_pairs(stemmer: &PortugueseStemmer, words: Vec<String>) -> Vec<JsStem> {
    words
        .into_iter()
        .map(|word| JsStem {
            stem: stemmer.stem(&word),
            word,
        })
        .collect()
}

// ============================================================================
// WasmStemmer
// ============================================================================

/// Portuguese stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    stemmer: PortugueseStemmer,
}

impl Default for WasmStemmer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a stemmer with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmStemmer {
        WasmStemmer {
            stemmer: PortugueseStemmer::new(),
        }
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Stem a list of words.
    ///
    /// Returns a JavaScript array of `{ word, stem }` objects in input order.
    #[wasm_bindgen(js_name = "stemAll")]
    pub fn stem_all(&self, words: Vec<String>) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&stem_pairs(&self.stemmer, words))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Stem a word and report which steps changed it.
    ///
    /// Returns `{ stem, steps }` where `steps` holds step numbers (1-5).
    pub fn explain(&self, word: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&JsTrace::from(self.stemmer.explain(word)))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Set whether words are lowercased before stemming.
    #[wasm_bindgen(js_name = "setLowercase")]
    pub fn set_lowercase(&mut self, value: bool) {
        self.stemmer.set_lowercase(value);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        raiz_pt::version().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_and_lowercase() {
        let mut stemmer = WasmStemmer::new();
        assert_eq!(stemmer.stem("livros"), "livr");
        assert_eq!(stemmer.stem("Livros"), "Livr");
        stemmer.set_lowercase(true);
        assert_eq!(stemmer.stem("LIVROS"), "livr");
    }

    #[test]
    fn pairs_keep_input_order() {
        let pairs = stem_pairs(
            &PortugueseStemmer::new(),
            vec!["livros".into(), "".into(), "canções".into()],
        );
        assert_eq!(
            pairs,
            vec![
                JsStem { word: "livros".into(), stem: "livr".into() },
                JsStem { word: "".into(), stem: "".into() },
                JsStem { word: "canções".into(), stem: "cançõ".into() },
            ]
        );
    }

    #[test]
    fn trace_uses_step_numbers() {
        let trace = JsTrace::from(PortugueseStemmer::new().explain("faço"));
        assert_eq!(trace, JsTrace { stem: "fac".into(), steps: vec![4, 5] });
    }

    #[test]
    fn version() {
        assert_eq!(WasmStemmer::get_version(), raiz_pt::version());
    }
}
