// Word regions R1, R2 and RV.
//
// All three are tails of the word they were computed from. They are kept as
// start offsets so a region is always a sub-slice of the current word and
// cannot drift from it.

use crate::character::is_vowel;

/// Start offset of the region after the first vowel/non-vowel pair.
///
/// Returns `word.len()` (empty region) when no such pair exists.
fn r_start(word: &[char]) -> usize {
    word.windows(2)
        .position(|pair| is_vowel(pair[0]) && !is_vowel(pair[1]))
        .map_or(word.len(), |i| i + 2)
}

/// Start offset of RV, or `word.len()` when RV is empty.
fn rv_start(word: &[char]) -> usize {
    let len = word.len();
    if len < 3 {
        return len;
    }

    if !is_vowel(word[1]) {
        // Consonant second: region after the next vowel.
        word[2..]
            .iter()
            .position(|&c| is_vowel(c))
            .map_or(len, |i| i + 3)
    } else if is_vowel(word[0]) {
        // Two leading vowels: region after the next consonant.
        word[2..]
            .iter()
            .position(|&c| !is_vowel(c))
            .map_or(len, |i| i + 3)
    } else {
        3
    }
}

/// The region after the first vowel followed by a non-vowel.
///
/// `r("beautiful") == "iful"`. R1 is `r(word)` and R2 is `r(r(word))`.
pub fn r(word: &[char]) -> &[char] {
    &word[r_start(word)..]
}

/// The RV region.
///
/// If the second letter is a consonant, RV is the region after the next
/// vowel. If the first two letters are vowels, RV is the region after the
/// next consonant. Otherwise (consonant then vowel) RV is the region after
/// the third letter. Words shorter than three letters have an empty RV.
pub fn rv(word: &[char]) -> &[char] {
    &word[rv_start(word)..]
}

/// R1, R2 and RV of one word, as start offsets into it.
///
/// A `Regions` value describes exactly the word it was computed from; after
/// the word changes it must be recomputed with [`Regions::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    r1: usize,
    r2: usize,
    rv: usize,
}

impl Regions {
    /// Compute all three regions for `word`.
    pub fn compute(word: &[char]) -> Self {
        let r1 = r_start(word);
        let r2 = r1 + r_start(&word[r1..]);
        Self {
            r1,
            r2,
            rv: rv_start(word),
        }
    }

    /// R1 of `word`. `word` must be the word these regions were computed from.
    pub fn r1<'a>(&self, word: &'a [char]) -> &'a [char] {
        &word[self.r1.min(word.len())..]
    }

    /// R2 of `word`.
    pub fn r2<'a>(&self, word: &'a [char]) -> &'a [char] {
        &word[self.r2.min(word.len())..]
    }

    /// RV of `word`.
    pub fn rv<'a>(&self, word: &'a [char]) -> &'a [char] {
        &word[self.rv.min(word.len())..]
    }
}
