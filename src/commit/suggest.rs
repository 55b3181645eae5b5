//! "Did you mean" suggestions for near-miss types and scopes.
//!
//! The score is a positional heuristic, not an edit distance: it counts the
//! characters that differ at the same index over the shorter of the two
//! strings, then adds the difference in length. Transpositions and insertions
//! are therefore only tolerated through the length penalty.

/// Finds the vocabulary entry closest to `candidate`.
///
/// Returns `None` when `candidate` or `vocabulary` is empty, or when even the
/// best entry scores above `max(len(candidate) / 2, 2)`. Ties keep the entry
/// that appears first in `vocabulary`.
pub fn find_closest_match<'a>(candidate: &str, vocabulary: &[&'a str]) -> Option<&'a str> {
    let first = vocabulary.first()?;
    if candidate.is_empty() {
        return None;
    }

    let candidate: Vec<char> = if is_all_uppercase(first) {
        candidate.to_uppercase().chars().collect()
    } else {
        candidate.to_lowercase().chars().collect()
    };

    let mut best: Option<(&'a str, usize)> = None;
    for &option in vocabulary {
        let distance = score(&candidate, &normalize(option));
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((option, distance));
        }
    }

    let threshold = (candidate.len() / 2).max(2);
    best.filter(|&(_, distance)| distance <= threshold)
        .map(|(option, _)| option)
}

/// Case-folds a vocabulary entry the same way the candidate is folded.
fn normalize(option: &str) -> Vec<char> {
    if is_all_uppercase(option) {
        option.to_uppercase().chars().collect()
    } else {
        option.to_lowercase().chars().collect()
    }
}

fn score(candidate: &[char], option: &[char]) -> usize {
    let mismatches = candidate
        .iter()
        .zip(option)
        .filter(|(a, b)| a != b)
        .count();

    mismatches + candidate.len().abs_diff(option.len())
}

/// True when `s` has at least one cased character and none of them are lowercase.
fn is_all_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::vocabulary::{ALLOWED_SCOPES, ALLOWED_TYPES};

    #[test]
    fn suggests_types() {
        assert_eq!(find_closest_match("fet", ALLOWED_TYPES), Some("feat"));
        assert_eq!(find_closest_match("fixx", ALLOWED_TYPES), Some("fix"));
        assert_eq!(find_closest_match("enhh", ALLOWED_TYPES), Some("enh"));
    }

    #[test]
    fn suggests_scopes() {
        assert_eq!(find_closest_match("CP", ALLOWED_SCOPES), Some("CP"));
        assert_eq!(find_closest_match("CPPP", ALLOWED_SCOPES), Some("CP"));
        assert_eq!(find_closest_match("UII", ALLOWED_SCOPES), Some("UI"));
        assert_eq!(find_closest_match("DOCC", ALLOWED_SCOPES), Some("DOC"));
    }

    #[test]
    fn folds_candidate_to_vocabulary_case() {
        assert_eq!(find_closest_match("cppp", ALLOWED_SCOPES), Some("CP"));
        assert_eq!(find_closest_match("FET", ALLOWED_TYPES), Some("feat"));
    }

    #[test]
    fn no_suggestion_when_too_far() {
        assert_eq!(find_closest_match("zzzzz", ALLOWED_TYPES), None);
        assert_eq!(find_closest_match("ZZZZZ", ALLOWED_SCOPES), None);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(find_closest_match("", ALLOWED_TYPES), None);
        assert_eq!(find_closest_match("fix", &[]), None);
    }

    #[test]
    fn ties_keep_first_entry() {
        // "fet" scores 2 against both "feat" and "fix"
        assert_eq!(find_closest_match("fet", &["feat", "fix"]), Some("feat"));
        assert_eq!(find_closest_match("fet", &["fix", "feat"]), Some("fix"));
    }

    #[test]
    fn threshold_grows_with_candidate_length() {
        // 8 chars, threshold 4: "refactor" vs "rXfXcXoX" is 4 mismatches
        assert_eq!(
            find_closest_match("rxfxcxox", &["refactor"]),
            Some("refactor")
        );
        assert_eq!(find_closest_match("rxfxcxxx", &["refactor"]), None);
    }

    #[test]
    fn digits_do_not_break_uppercase_detection() {
        assert_eq!(find_closest_match("i18m", ALLOWED_SCOPES), Some("I18N"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn suggestion_comes_from_vocabulary(s in "[a-zA-Z0-9]{0,12}") {
                if let Some(found) = find_closest_match(&s, ALLOWED_SCOPES) {
                    prop_assert!(ALLOWED_SCOPES.contains(&found));
                }
            }

            #[test]
            fn exact_member_suggests_itself(i in 0..ALLOWED_TYPES.len()) {
                let member = ALLOWED_TYPES[i];
                prop_assert_eq!(find_closest_match(member, ALLOWED_TYPES), Some(member));
            }

            #[test]
            fn empty_vocabulary_never_matches(s in ".*") {
                prop_assert_eq!(find_closest_match(&s, &[]), None);
            }
        }
    }
}
