// Character classification for Portuguese stemming.

// ---------------------------------------------------------------------------
// Portuguese phonological constants
// ---------------------------------------------------------------------------

/// Portuguese vowels (lowercase): a e i o u plus the acute and circumflex
/// forms that carry stress. The nasal vowels ã and õ are not listed: they
/// never reach the classifier, because they are expanded first.
pub const PORTUGUESE_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u',
    '\u{00E1}', // á
    '\u{00E9}', // é
    '\u{00ED}', // í
    '\u{00F3}', // ó
    '\u{00FA}', // ú
    '\u{00E2}', // â
    '\u{00EA}', // ê
    '\u{00F4}', // ô
];

/// Stands in for the nasal tilde while a word is being stemmed.
///
/// Taken from the Private Use Area so it cannot collide with real text.
/// It is not a vowel, so region logic treats it as a consonant.
pub const NASAL_MARKER: char = '\u{E000}';

/// LATIN SMALL LETTER C WITH CEDILLA.
pub const C_CEDILLA: char = '\u{00E7}';

/// Nasal vowels and the plain vowel each one expands to.
const NASAL_VOWELS: &[(char, char)] = &[
    ('\u{00E3}', 'a'), // ã
    ('\u{00F5}', 'o'), // õ
];

// ---------------------------------------------------------------------------
// Vowel classification
// ---------------------------------------------------------------------------

/// Check whether a character is a Portuguese vowel.
///
/// Case-sensitive: the stemmer works on lowercase words only.
pub fn is_vowel(c: char) -> bool {
    PORTUGUESE_VOWELS.contains(&c)
}

// ---------------------------------------------------------------------------
// Nasal vowel expansion
// ---------------------------------------------------------------------------

/// Expand each nasal vowel into its plain vowel followed by [`NASAL_MARKER`].
///
/// `"canção"` becomes `['c', 'a', 'n', 'ç', 'a', MARKER, 'o']`.
pub fn expand_nasal_vowels(word: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(word.len() + 2);
    for c in word.chars() {
        match NASAL_VOWELS.iter().find(|&&(nasal, _)| nasal == c) {
            Some(&(_, plain)) => {
                out.push(plain);
                out.push(NASAL_MARKER);
            }
            None => out.push(c),
        }
    }
    out
}

/// Inverse of [`expand_nasal_vowels`].
///
/// A marker is folded back only when it follows `a` or `o`; anywhere else
/// it is kept as is.
pub fn contract_nasal_vowels(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if chars.get(i + 1) == Some(&NASAL_MARKER) {
            if let Some(&(nasal, _)) = NASAL_VOWELS.iter().find(|&&(_, plain)| plain == c) {
                out.push(nasal);
                i += 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}
