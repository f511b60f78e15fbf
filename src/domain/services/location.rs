//! # Location Text Matching
//!
//! Normalization and approximate matching for free-text place names.
//!
//! Carrier tracking feeds report locations as free text ("Göteborg",
//! "GOTEBORG TERMINAL", "Malmo"), so comparing them needs a canonical form
//! and a similarity measure. [`normalize`] produces the canonical form;
//! [`similarity_percent`] scores two strings with the classic
//! longest-common-substring percentage.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::services::location::{normalize, similarity_percent};
//!
//! assert_eq!(normalize("  Göteborg "), "goteborg");
//! assert_eq!(normalize("Saint-Étienne"), "saintetienne");
//!
//! let pct = similarity_percent("stock", "stockholm");
//! assert!((pct - 2.0 * 5.0 / 14.0 * 100.0).abs() < 1e-9);
//! ```

use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a free-text place name into a comparable key.
///
/// Steps, in order: trim surrounding whitespace, decompose to NFD so base
/// letters separate from their diacritic marks, drop every character that
/// is not an ASCII letter, an ASCII digit, or whitespace (this removes the
/// detached marks along with punctuation), then lowercase.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` for any input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Computes the percentage similarity of two strings.
///
/// The measure is the longest-common-substring recursion: find the first
/// longest common substring, recurse on the text to its left and to its
/// right, and sum the matched lengths. The percentage is
/// `2 * matched / (len_a + len_b) * 100`, so identical strings score 100
/// and disjoint strings score 0. Two empty strings score 0.
#[must_use]
pub fn similarity_percent(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / total as f64 * 100.0
}

/// Total characters matched by the longest-common-substring recursion.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (pos_a, pos_b, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    let (a_left, a_tail) = a.split_at(pos_a);
    let (b_left, b_tail) = b.split_at(pos_b);
    let a_right = a_tail.get(len..).unwrap_or_default();
    let b_right = b_tail.get(len..).unwrap_or_default();
    len + matching_chars(a_left, b_left) + matching_chars(a_right, b_right)
}

/// Finds the first longest common substring of `a` and `b`.
///
/// Returns its start position in each input and its length. Scans `a`
/// outer, `b` inner, keeping a candidate only when strictly longer than the
/// running best, so the first-encountered run wins ties.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let (mut pos_a, mut pos_b, mut max) = (0, 0, 0);
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut k = 0;
            while let (Some(x), Some(y)) = (a.get(i + k), b.get(j + k)) {
                if x != y {
                    break;
                }
                k += 1;
            }
            if k > max {
                pos_a = i;
                pos_b = j;
                max = k;
            }
        }
    }
    (pos_a, pos_b, max)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod normalize {
        use super::*;

        #[test]
        fn strips_diacritics() {
            assert_eq!(normalize("Göteborg"), "goteborg");
            assert_eq!(normalize("Saint-Étienne"), "saintetienne");
            assert_eq!(normalize("Zürich"), "zurich");
            assert_eq!(normalize("São Paulo"), "sao paulo");
        }

        #[test]
        fn drops_punctuation_keeps_inner_whitespace() {
            assert_eq!(normalize("  New   York!  "), "new   york");
            assert_eq!(normalize("O'Fallon"), "ofallon");
        }

        #[test]
        fn keeps_digits() {
            assert_eq!(normalize("Terminal 5"), "terminal 5");
        }

        #[test]
        fn empty_and_symbol_only() {
            assert_eq!(normalize(""), "");
            assert_eq!(normalize("!?#"), "");
        }

        proptest! {
            #[test]
            fn idempotent(s in ".*") {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once);
            }
        }
    }

    mod similarity {
        use super::*;

        fn close(a: f64, b: f64) -> bool {
            (a - b).abs() < 1e-9
        }

        #[test]
        fn identical_is_100() {
            assert!(close(similarity_percent("stockholm", "stockholm"), 100.0));
        }

        #[test]
        fn disjoint_is_0() {
            assert!(close(similarity_percent("abc", "xyz"), 0.0));
        }

        #[test]
        fn both_empty_is_0() {
            assert!(close(similarity_percent("", ""), 0.0));
        }

        #[test]
        fn prefix_match() {
            // 5 matched chars over 5 + 9 total.
            let expected = 2.0 * 5.0 / 14.0 * 100.0;
            assert!(close(similarity_percent("stock", "stockholm"), expected));
        }

        #[test]
        fn recursion_counts_flanking_runs() {
            // "world" matches fully inside "wworld": run "world" (5) plus
            // nothing on the flanks. 2*5/(5+6) = 90.9%.
            let expected = 2.0 * 5.0 / 11.0 * 100.0;
            assert!(close(similarity_percent("world", "wworld"), expected));
        }

        #[test]
        fn symmetric_totals() {
            let ab = similarity_percent("malmo", "malmoe");
            let ba = similarity_percent("malmoe", "malmo");
            assert!(close(ab, ba));
        }
    }
}
