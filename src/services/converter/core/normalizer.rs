//! Canonical comparison keys for card and set names.
//!
//! Every equality decision in the converter goes through [`normalize_name`]:
//! two display strings refer to the same thing iff their keys are equal.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Separator between the sub-names of split/dual cards (`"Aragorn/Strider"`).
pub const NAME_SEPARATOR: char = '/';

/// Literal substitutions applied after diacritic stripping, in declared order.
///
/// The curly apostrophe is folded to `'` first so the removal below catches both.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Æ", "Ae"),
    ("æ", "ae"),
    ("\u{2019}", "'"),
    (":", ""),
    ("-", ""),
    ("'", ""),
];

/// Normalize a card or set name into its comparison key.
///
/// Pipeline:
/// 1. Trim surrounding whitespace
/// 2. Decompose, drop non-spacing marks, recompose (`é` → `e`)
/// 3. Apply [`SUBSTITUTIONS`] in order
/// 4. Lowercase (locale-independent)
///
/// Marks introduced by lowercasing (`İ` → `i̇`) are stripped and the result
/// trimmed again, so the function is idempotent.
pub fn normalize_name(name: &str) -> String {
    let stripped = remove_diacritics(name.trim());

    let mut replaced = stripped;
    for (actual, normalized) in SUBSTITUTIONS {
        if replaced.contains(actual) {
            replaced = replaced.replace(actual, normalized);
        }
    }

    let lower = replaced.to_lowercase();
    remove_diacritics(&lower).trim().to_string()
}

/// Strip diacritics via an NFD → filter → NFC round trip.
///
/// Only non-spacing marks (Mn) go. Spacing vowel signs (Mc) and enclosing
/// marks (Me) carry meaning and survive, so `"का"` stays distinct from `"क"`.
pub fn remove_diacritics(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfd().filter(|c| !is_nonspacing_mark(*c)).nfc().collect()
}

fn is_nonspacing_mark(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}

/// Split a possibly multi-part name on `/`, dropping empty segments.
pub fn split_names(name: &str) -> impl Iterator<Item = &str> {
    name.split(NAME_SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Normalized keys of every sub-name, in order.
pub fn normalized_names(name: &str) -> Vec<String> {
    split_names(name).map(normalize_name).collect()
}

/// Normalized key of the first sub-name, or `None` when the name has no
/// non-empty segment at all (`""`, `"/"`).
pub fn first_name_key(name: &str) -> Option<String> {
    split_names(name).next().map(normalize_name)
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
