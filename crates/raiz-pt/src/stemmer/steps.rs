// The five rewrite steps.
//
// Every step takes the current (expanded) word and regions computed from it,
// edits the word in place and reports whether it changed anything. A step
// that returns `false` leaves the word untouched.

use raiz_core::character::C_CEDILLA;
use raiz_core::region::Regions;
use raiz_suffix::SuffixMatcher;

use super::tables::Step1Rule;

/// Check whether `chars` ends with the characters of `s`.
fn ends_with_str(chars: &[char], s: &str) -> bool {
    let mut tail = chars.iter().rev();
    s.chars().rev().all(|c| tail.next() == Some(&c))
}

/// Check whether `region` ends with `prefix` immediately followed by `suffix`.
fn ends_with_preceded(region: &[char], prefix: &str, suffix: &[char]) -> bool {
    match region.len().checked_sub(suffix.len()) {
        Some(head) => region[head..] == *suffix && ends_with_str(&region[..head], prefix),
        None => false,
    }
}

/// Drop the last `n` characters of `word`.
fn cut(word: &mut Vec<char>, n: usize) {
    word.truncate(word.len().saturating_sub(n));
}

/// Step 1: standard suffix removal.
///
/// A suffix can match lexically and still be rejected by its region test;
/// that counts as no change.
pub(super) fn standard_suffix(
    table: &SuffixMatcher<Step1Rule>,
    word: &mut Vec<char>,
    regions: &Regions,
) -> bool {
    let Some(found) = table.longest_suffix(word) else {
        return false;
    };
    let suffix = found.chars();
    let r1 = regions.r1(word);
    let r2 = regions.r2(word);

    let remove = match found.category() {
        Step1Rule::Delete => r2.ends_with(suffix).then_some(suffix.len()),
        Step1Rule::Replace(replacement) => {
            if !r2.ends_with(suffix) {
                return false;
            }
            cut(word, suffix.len());
            word.extend(replacement.chars());
            return true;
        }
        Step1Rule::DeleteWithPrefix(prefixes) => prefixes
            .iter()
            .find(|p| ends_with_preceded(r2, p, suffix))
            .map(|p| p.chars().count() + suffix.len())
            .or_else(|| r2.ends_with(suffix).then_some(suffix.len())),
        Step1Rule::Amente => {
            if !r1.ends_with(suffix) {
                return false;
            }
            let extra = if ends_with_preceded(r2, "iv", suffix) {
                if ends_with_preceded(r2, "ativ", suffix) { 4 } else { 2 }
            } else {
                ["os", "ic", "ad"]
                    .iter()
                    .find(|p| ends_with_preceded(r2, p, suffix))
                    .map_or(0, |p| p.chars().count())
            };
            Some(suffix.len() + extra)
        }
        Step1Rule::IraAfterE => {
            if !(regions.rv(word).ends_with(suffix) && ends_with_preceded(word, "e", suffix)) {
                return false;
            }
            cut(word, suffix.len());
            word.extend(['i', 'r']);
            return true;
        }
    };

    match remove {
        Some(n) => {
            cut(word, n);
            true
        }
        None => false,
    }
}

/// Steps 2 and 4: delete the longest suffix from `table` found in RV.
pub(super) fn suffix_in_rv(
    table: &SuffixMatcher<()>,
    word: &mut Vec<char>,
    regions: &Regions,
) -> bool {
    let Some(found) = table.longest_suffix(regions.rv(word)) else {
        return false;
    };
    cut(word, found.len());
    true
}

/// Step 3: delete a final `i` in RV when preceded by `c`.
pub(super) fn suffix_i(word: &mut Vec<char>, regions: &Regions) -> bool {
    if word.ends_with(&['c', 'i']) && regions.rv(word).ends_with(&['i']) {
        word.pop();
        return true;
    }
    false
}

/// Step 5: residual form.
///
/// Deletes a final `e`, `é` or `ê` in RV, together with the `u` of `gu` or
/// the `i` of `ci` before it when that letter is in RV too. With no such
/// vowel, a final `ç` becomes `c`.
pub(super) fn residual_form(
    table: &SuffixMatcher<()>,
    word: &mut Vec<char>,
    regions: &Regions,
) -> bool {
    let rv = regions.rv(word);
    let Some(found) = table.longest_suffix(rv) else {
        if word.last() == Some(&C_CEDILLA) {
            word.pop();
            word.push('c');
            return true;
        }
        return false;
    };
    let suffix = found.chars();

    let n = if ends_with_preceded(rv, "u", suffix) && ends_with_preceded(word, "gu", suffix) {
        suffix.len() + 1
    } else if ends_with_preceded(rv, "i", suffix) && ends_with_preceded(word, "ci", suffix) {
        suffix.len() + 1
    } else {
        suffix.len()
    };
    cut(word, n);
    true
}
