// Suffix tables for the five stemming steps.
//
// Suffixes are written with the real nasal vowels (ã, õ); they are expanded
// with the same marker as the words when the matchers are built.

/// What step 1 does with the longest standard suffix it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step1Rule {
    /// Delete if in R2.
    Delete,
    /// Replace with the given text if in R2.
    Replace(&'static str),
    /// Delete together with the first listed prefix found before it in R2,
    /// otherwise delete the suffix alone if in R2.
    DeleteWithPrefix(&'static [&'static str]),
    /// `amente`: delete if in R1, then strip `iv` (and a further `at`), or
    /// `os`, `ic`, `ad`, when that longer ending is in R2.
    Amente,
    /// Replace with `ir` if in RV and preceded by `e`.
    IraAfterE,
}

const MENTE_PREFIXES: &[&str] = &["ante", "avel", "ível"];
const IDADE_PREFIXES: &[&str] = &["abil", "ic", "iv"];
const IVO_PREFIXES: &[&str] = &["at"];

/// Standard suffixes removed by step 1.
pub(crate) const STEP1_SUFFIXES: &[(&str, Step1Rule)] = &[
    ("eza", Step1Rule::Delete),
    ("ezas", Step1Rule::Delete),
    ("ico", Step1Rule::Delete),
    ("ica", Step1Rule::Delete),
    ("icos", Step1Rule::Delete),
    ("icas", Step1Rule::Delete),
    ("ismo", Step1Rule::Delete),
    ("ismos", Step1Rule::Delete),
    ("ável", Step1Rule::Delete),
    ("ível", Step1Rule::Delete),
    ("ista", Step1Rule::Delete),
    ("istas", Step1Rule::Delete),
    ("oso", Step1Rule::Delete),
    ("osa", Step1Rule::Delete),
    ("osos", Step1Rule::Delete),
    ("osas", Step1Rule::Delete),
    ("amento", Step1Rule::Delete),
    ("amentos", Step1Rule::Delete),
    ("imento", Step1Rule::Delete),
    ("imentos", Step1Rule::Delete),
    ("adora", Step1Rule::Delete),
    ("ador", Step1Rule::Delete),
    ("ação", Step1Rule::Delete),
    ("adoras", Step1Rule::Delete),
    ("adores", Step1Rule::Delete),
    ("ações", Step1Rule::Delete),
    ("ante", Step1Rule::Delete),
    ("antes", Step1Rule::Delete),
    ("ância", Step1Rule::Delete),
    ("logía", Step1Rule::Replace("log")),
    ("logías", Step1Rule::Replace("log")),
    ("ución", Step1Rule::Replace("u")),
    ("uciones", Step1Rule::Replace("u")),
    ("ência", Step1Rule::Replace("ente")),
    ("ências", Step1Rule::Replace("ente")),
    ("amente", Step1Rule::Amente),
    ("mente", Step1Rule::DeleteWithPrefix(MENTE_PREFIXES)),
    ("idade", Step1Rule::DeleteWithPrefix(IDADE_PREFIXES)),
    ("idades", Step1Rule::DeleteWithPrefix(IDADE_PREFIXES)),
    ("iva", Step1Rule::DeleteWithPrefix(IVO_PREFIXES)),
    ("ivo", Step1Rule::DeleteWithPrefix(IVO_PREFIXES)),
    ("ivas", Step1Rule::DeleteWithPrefix(IVO_PREFIXES)),
    ("ivos", Step1Rule::DeleteWithPrefix(IVO_PREFIXES)),
    ("ira", Step1Rule::IraAfterE),
    ("iras", Step1Rule::IraAfterE),
];

/// Verb suffixes removed by step 2 when found in RV.
///
/// `ira` and `iras` also appear in the step 1 table with a different rule.
/// Both entries are part of the algorithm.
pub(crate) const STEP2_SUFFIXES: &[&str] = &[
    "ada", "ida", "ia", "aria", "eria", "iria", "ará", "ara", "erá", "era", "irá", "ava", "asse",
    "esse", "isse", "aste", "este", "iste", "ei", "arei", "erei", "irei", "am", "iam", "ariam",
    "eriam", "iriam", "aram", "eram", "iram", "avam", "em", "arem", "erem", "irem", "assem",
    "essem", "issem", "ado", "ido", "ando", "endo", "indo", "arão", "erão", "irão", "ar", "er",
    "ir", "as", "adas", "idas", "ias", "arias", "erias", "irias", "arás", "aras", "erás", "eras",
    "irás", "avas", "es", "ardes", "erdes", "irdes", "ares", "eres", "ires", "asses", "esses",
    "isses", "astes", "estes", "istes", "is", "ais", "eis", "íeis", "aríeis", "eríeis", "iríeis",
    "áreis", "areis", "éreis", "ereis", "íreis", "ireis", "ásseis", "ésseis", "ísseis", "áveis",
    "ados", "idos", "ámos", "amos", "íamos", "aríamos", "eríamos", "iríamos", "áramos", "éramos",
    "íramos", "ávamos", "emos", "aremos", "eremos", "iremos", "ássemos", "êssemos", "íssemos",
    "imos", "armos", "ermos", "irmos", "eu", "iu", "ou", "ira", "iras",
];

/// Residual suffixes removed by step 4 when found in RV.
pub(crate) const STEP4_SUFFIXES: &[&str] = &["os", "a", "i", "o", "á", "í", "ó"];

/// Residual vowels removed by step 5 when found in RV.
pub(crate) const STEP5_SUFFIXES: &[&str] = &["e", "é", "ê"];
