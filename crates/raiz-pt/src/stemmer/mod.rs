// Portuguese stemming engine: the five-step suffix stripping pipeline.
//
// Design notes:
// - The four suffix matchers are built once in `new()` and only read
//   afterwards, so one engine can serve any number of threads.
// - Each call works on its own expanded copy of the word.
// - Regions are recomputed only after a step changed the word.

mod steps;
mod tables;

use std::fmt;

use raiz_core::character::{contract_nasal_vowels, expand_nasal_vowels};
use raiz_core::region::Regions;
use raiz_suffix::SuffixMatcher;

use tables::{STEP1_SUFFIXES, STEP2_SUFFIXES, STEP4_SUFFIXES, STEP5_SUFFIXES, Step1Rule};

/// Options for [`PortugueseStemmer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StemmerOptions {
    /// Lowercase the word before stemming. The algorithm itself only
    /// recognises lowercase suffixes. Default: false.
    pub lowercase: bool,
}

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Step 1: standard suffix removal.
    StandardSuffix,
    /// Step 2: verb suffix removal.
    VerbSuffix,
    /// Step 3: delete a final `i` after `c`.
    SuffixI,
    /// Step 4: residual suffix removal.
    ResidualSuffix,
    /// Step 5: residual form (`e`, `é`, `ê`, `ç`).
    ResidualForm,
}

impl Step {
    /// Position of the step in the pipeline, starting at 1.
    pub fn number(self) -> u8 {
        match self {
            Step::StandardSuffix => 1,
            Step::VerbSuffix => 2,
            Step::SuffixI => 3,
            Step::ResidualSuffix => 4,
            Step::ResidualForm => 5,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::StandardSuffix => "standard suffix",
            Step::VerbSuffix => "verb suffix",
            Step::SuffixI => "suffix i",
            Step::ResidualSuffix => "residual suffix",
            Step::ResidualForm => "residual form",
        };
        write!(f, "step {} ({name})", self.number())
    }
}

/// The result of [`PortugueseStemmer::explain`]: the stem and the steps that
/// changed the word on the way, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemTrace {
    pub stem: String,
    pub applied: Vec<Step>,
}

/// Stemmer for Portuguese.
///
/// ```
/// use raiz_pt::PortugueseStemmer;
///
/// let stemmer = PortugueseStemmer::new();
/// assert_eq!(stemmer.stem("ajudado"), "ajud");
/// assert_eq!(stemmer.stem("abafaram"), "abaf");
/// ```
pub struct PortugueseStemmer {
    step1: SuffixMatcher<Step1Rule>,
    step2: SuffixMatcher<()>,
    step4: SuffixMatcher<()>,
    step5: SuffixMatcher<()>,
    options: StemmerOptions,
}

impl fmt::Debug for PortugueseStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortugueseStemmer")
            .field("step1_suffixes", &self.step1.len())
            .field("step2_suffixes", &self.step2.len())
            .field("step4_suffixes", &self.step4.len())
            .field("step5_suffixes", &self.step5.len())
            .field("options", &self.options)
            .finish()
    }
}

impl Default for PortugueseStemmer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a matcher from a table, expanding nasal vowels in each suffix.
fn build_matcher<C: Copy>(
    entries: impl IntoIterator<Item = (&'static str, C)>,
) -> SuffixMatcher<C> {
    SuffixMatcher::from_entries(
        entries
            .into_iter()
            .map(|(suffix, category)| (expanded(suffix), category)),
    )
}

/// Expanded form of a table suffix, as a string.
fn expanded(suffix: &str) -> String {
    expand_nasal_vowels(suffix).into_iter().collect()
}

impl PortugueseStemmer {
    /// Create a stemmer with default options.
    pub fn new() -> Self {
        Self::with_options(StemmerOptions::default())
    }

    /// Create a stemmer with the given options.
    pub fn with_options(options: StemmerOptions) -> Self {
        Self {
            step1: build_matcher(STEP1_SUFFIXES.iter().copied()),
            step2: build_matcher(STEP2_SUFFIXES.iter().map(|&s| (s, ()))),
            step4: build_matcher(STEP4_SUFFIXES.iter().map(|&s| (s, ()))),
            step5: build_matcher(STEP5_SUFFIXES.iter().map(|&s| (s, ()))),
            options,
        }
    }

    /// Current options.
    pub fn options(&self) -> StemmerOptions {
        self.options
    }

    /// Set whether words are lowercased before stemming.
    pub fn set_lowercase(&mut self, value: bool) {
        self.options.lowercase = value;
    }

    /// Reduce `word` to its stem.
    ///
    /// Never fails: a word no rule applies to comes back unchanged.
    pub fn stem(&self, word: &str) -> String {
        self.run(word, |_| {})
    }

    /// Like [`stem`](Self::stem), also reporting which steps changed the word.
    pub fn explain(&self, word: &str) -> StemTrace {
        let mut applied = Vec::new();
        let stem = self.run(word, |step| applied.push(step));
        StemTrace { stem, applied }
    }

    fn run(&self, word: &str, mut on_applied: impl FnMut(Step)) -> String {
        let lowered;
        let word = if self.options.lowercase {
            lowered = word.to_lowercase();
            lowered.as_str()
        } else {
            word
        };

        let mut w = expand_nasal_vowels(word);
        let mut regions = Regions::compute(&w);

        // Step 1 always; step 2 only if step 1 changed nothing.
        let mut modified = steps::standard_suffix(&self.step1, &mut w, &regions);
        if modified {
            on_applied(Step::StandardSuffix);
        } else {
            modified = steps::suffix_in_rv(&self.step2, &mut w, &regions);
            if modified {
                on_applied(Step::VerbSuffix);
            }
        }

        // Step 3 follows a change by step 1 or 2, step 4 follows no change.
        if modified {
            regions = Regions::compute(&w);
            modified = steps::suffix_i(&mut w, &regions);
            if modified {
                on_applied(Step::SuffixI);
            }
        } else {
            modified = steps::suffix_in_rv(&self.step4, &mut w, &regions);
            if modified {
                on_applied(Step::ResidualSuffix);
            }
        }

        if modified {
            regions = Regions::compute(&w);
        }

        if steps::residual_form(&self.step5, &mut w, &regions) {
            on_applied(Step::ResidualForm);
        }

        contract_nasal_vowels(&w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        PortugueseStemmer::new().stem(word)
    }

    fn applied(word: &str) -> Vec<Step> {
        PortugueseStemmer::new().explain(word).applied
    }

    // -- End-to-end cases --

    #[test]
    fn corner_cases() {
        let cases = [
            ("\u{00E1}", "\u{00E1}"),
            ("ajuda", "ajud"),
            ("ajud\u{00E1}", "ajud"),
            ("ajudado", "ajud"),
            ("ajudou", "ajud"),
            ("abafaram", "abaf"),
            ("abaixa", "abaix"),
            ("abra\u{00E7}ada", "abrac"),
            ("adequadamente", "adequ"),
            ("a\u{00E9}rea", "a\u{00E9}r"),
            ("anatomicamente", "anatom"),
            ("cheira", "cheir"),
            ("\u{00F4}\u{00F4}iii", "\u{00F4}\u{00F4}iii"),
        ];
        for (word, expected) in cases {
            assert_eq!(stem(word), expected, "stem({word})");
        }
    }

    #[test]
    fn empty_word() {
        assert_eq!(stem(""), "");
    }

    #[test]
    fn non_words_pass_through() {
        for word in ["1234", "x", "xyz", "...", "--"] {
            assert_eq!(stem(word), word);
        }
    }

    #[test]
    fn minimal_stems_are_fixed_points() {
        for word in ["ajud", "abaf", "adequ", "anatom", "livr"] {
            assert_eq!(stem(word), word);
        }
    }

    #[test]
    fn nasal_vowels_survive() {
        assert_eq!(stem("canções"), "cançõ");
        assert_eq!(stem("irmãos"), "irmã");
        assert_eq!(stem("comunicação"), "comunic");
    }

    #[test]
    fn uppercase_needs_option() {
        assert_eq!(stem("AJUDADO"), "AJUDADO");

        let stemmer = PortugueseStemmer::with_options(StemmerOptions { lowercase: true });
        assert_eq!(stemmer.stem("AJUDADO"), "ajud");
        assert_eq!(stemmer.stem("Canções"), "cançõ");
    }

    #[test]
    fn set_lowercase_toggles() {
        let mut stemmer = PortugueseStemmer::new();
        assert!(!stemmer.options().lowercase);
        stemmer.set_lowercase(true);
        assert!(stemmer.options().lowercase);
        assert_eq!(stemmer.stem("Abafaram"), "abaf");
    }

    // -- Step 1 rules --

    #[test]
    fn step1_replacements() {
        assert_eq!(stem("experiência"), "experient");
        assert_eq!(stem("solución"), "solución");
        assert_eq!(stem("soluciones"), "solucion");
    }

    #[test]
    fn step1_ucion_becomes_u() {
        assert_eq!(stem("revolución"), "revolu");
        assert_eq!(stem("revoluciones"), "revolu");

        let trace = PortugueseStemmer::new().explain("revoluciones");
        assert_eq!(trace.stem, "revolu");
        assert_eq!(trace.applied, vec![Step::StandardSuffix]);
    }

    #[test]
    fn step1_prefixed_deletions() {
        assert_eq!(stem("confortavelmente"), "confort");
        assert_eq!(stem("estabilidade"), "estabil");
        assert_eq!(stem("responsabilidade"), "respons");
        assert_eq!(stem("informativa"), "inform");
    }

    #[test]
    fn step1_amente_variants() {
        assert_eq!(stem("afirmativamente"), "afirm");
        assert_eq!(stem("criativamente"), "criativ");
        assert_eq!(stem("generosamente"), "gener");
        assert_eq!(stem("basicamente"), "basic");
        assert_eq!(stem("exatamente"), "exat");
    }

    #[test]
    fn step1_ira_after_e() {
        let trace = PortugueseStemmer::new().explain("bebeira");
        assert_eq!(trace.stem, "bebeir");
        assert_eq!(trace.applied, vec![Step::StandardSuffix]);

        // Without a preceding "e" step 1 rejects "iras"; the verb table
        // entry for the same ending removes it instead.
        let trace = PortugueseStemmer::new().explain("feiras");
        assert_eq!(trace.stem, "feir");
        assert_eq!(trace.applied, vec![Step::VerbSuffix]);
    }

    // -- Orchestration --

    #[test]
    fn step1_alone() {
        assert_eq!(applied("político"), vec![Step::StandardSuffix]);
        assert_eq!(applied("anatomicamente"), vec![Step::StandardSuffix]);
    }

    #[test]
    fn step1_then_step5() {
        let trace = PortugueseStemmer::new().explain("experiência");
        assert_eq!(trace.stem, "experient");
        assert_eq!(trace.applied, vec![Step::StandardSuffix, Step::ResidualForm]);
    }

    #[test]
    fn step2_then_step3() {
        let trace = PortugueseStemmer::new().explain("comerciar");
        assert_eq!(trace.stem, "comerc");
        assert_eq!(trace.applied, vec![Step::VerbSuffix, Step::SuffixI]);
    }

    #[test]
    fn step2_without_step3() {
        let trace = PortugueseStemmer::new().explain("ceguei");
        assert_eq!(trace.stem, "cegu");
        assert_eq!(trace.applied, vec![Step::VerbSuffix]);

        let trace = PortugueseStemmer::new().explain("falaram");
        assert_eq!(trace.stem, "fal");
        assert_eq!(trace.applied, vec![Step::VerbSuffix]);
    }

    #[test]
    fn rejected_step1_match_is_not_a_change() {
        // "ante" is the longest step 1 suffix of "cante" but lies outside
        // R2. Steps 2 and 4 find nothing in RV ("te"); step 5 drops the "e".
        let trace = PortugueseStemmer::new().explain("cante");
        assert_eq!(trace.stem, "cant");
        assert_eq!(trace.applied, vec![Step::ResidualForm]);
    }

    #[test]
    fn step4_only_without_step1_or_step2() {
        let trace = PortugueseStemmer::new().explain("livros");
        assert_eq!(trace.stem, "livr");
        assert_eq!(trace.applied, vec![Step::ResidualSuffix]);
    }

    #[test]
    fn step4_then_step5_cedilla() {
        let trace = PortugueseStemmer::new().explain("faço");
        assert_eq!(trace.stem, "fac");
        assert_eq!(trace.applied, vec![Step::ResidualSuffix, Step::ResidualForm]);
    }

    #[test]
    fn nothing_applies() {
        let trace = PortugueseStemmer::new().explain("solución");
        assert_eq!(trace.stem, "solución");
        assert!(trace.applied.is_empty());
    }

    #[test]
    fn step5_gu_and_ci() {
        assert_eq!(stem("chegue"), "cheg");
        assert_eq!(stem("índice"), "índic");
        assert_eq!(stem("tiquê"), "tiqu");
    }

    #[test]
    fn step_display() {
        assert_eq!(Step::StandardSuffix.to_string(), "step 1 (standard suffix)");
        assert_eq!(Step::ResidualForm.number(), 5);
    }

    #[test]
    fn tables_are_loaded() {
        let stemmer = PortugueseStemmer::new();
        assert_eq!(stemmer.step1.len(), 45);
        assert_eq!(stemmer.step2.len(), 120);
        assert_eq!(stemmer.step4.len(), 7);
        assert_eq!(stemmer.step5.len(), 3);
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PortugueseStemmer>();
    }
}
