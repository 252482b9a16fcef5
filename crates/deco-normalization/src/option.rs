//! Canonical-option normalization for free-text attribute values.
//!
//! A raw value resolves to a vocabulary member in up to two passes over the
//! folded forms (see [`normalize_for_comparison`]):
//!
//! 1. exact: the first entry whose folded form equals the folded input;
//! 2. containment (lenient mode only): the first entry whose folded form
//!    contains the folded input, or is contained by it.
//!
//! When neither pass matches, the raw value is returned unchanged. The result
//! is therefore always a literal vocabulary member or the untouched input.

use deco_model::{
    CanonicalOption, DecoBase, DecoColor, HoodieType, MatchingMode, NormalizationOptions,
};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a string for comparison.
///
/// Lowercases, strips diacritics through canonical decomposition, trims, and
/// collapses whitespace runs to a single space.
pub fn normalize_for_comparison(value: &str) -> String {
    let folded: String = value
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Which pass resolved a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMatch<'v> {
    /// Folded forms are equal.
    Exact(&'v str),
    /// One folded form contains the other.
    Contained(&'v str),
    /// No vocabulary entry matched.
    Unmatched,
}

impl<'v> OptionMatch<'v> {
    /// The matched vocabulary member, if any.
    pub fn value(self) -> Option<&'v str> {
        match self {
            OptionMatch::Exact(value) | OptionMatch::Contained(value) => Some(value),
            OptionMatch::Unmatched => None,
        }
    }

    pub fn is_match(self) -> bool {
        !matches!(self, OptionMatch::Unmatched)
    }

    pub fn pass_name(self) -> &'static str {
        match self {
            OptionMatch::Exact(_) => "exact",
            OptionMatch::Contained(_) => "contained",
            OptionMatch::Unmatched => "unmatched",
        }
    }
}

/// Resolves a raw value against a vocabulary.
///
/// Empty input never matches. Whitespace-only input folds to the empty string,
/// which every folded entry contains, so it resolves to the first entry.
pub fn resolve_option<'v, S>(
    raw: &str,
    vocabulary: &'v [S],
    mode: MatchingMode,
) -> OptionMatch<'v>
where
    S: AsRef<str>,
{
    if raw.is_empty() {
        return OptionMatch::Unmatched;
    }
    let needle = normalize_for_comparison(raw);

    let folded: Vec<(&'v str, String)> = vocabulary
        .iter()
        .map(|entry| (entry.as_ref(), normalize_for_comparison(entry.as_ref())))
        .collect();

    if let Some((entry, _)) = folded.iter().find(|(_, key)| *key == needle) {
        trace!(raw, matched = *entry, "exact option match");
        return OptionMatch::Exact(entry);
    }

    if mode == MatchingMode::Lenient
        && let Some((entry, _)) = folded
            .iter()
            .find(|(_, key)| key.contains(&needle) || needle.contains(key))
    {
        trace!(raw, matched = *entry, "contained option match");
        return OptionMatch::Contained(entry);
    }

    trace!(raw, "no option match");
    OptionMatch::Unmatched
}

/// Returns the matching vocabulary member, or `raw` unchanged.
pub fn match_option<S: AsRef<str>>(raw: &str, vocabulary: &[S]) -> String {
    match_option_with(raw, vocabulary, MatchingMode::Lenient)
}

/// [`match_option`] with an explicit matching mode.
pub fn match_option_with<S: AsRef<str>>(
    raw: &str,
    vocabulary: &[S],
    mode: MatchingMode,
) -> String {
    resolve_option(raw, vocabulary, mode)
        .value()
        .unwrap_or(raw)
        .to_string()
}

/// Resolves a raw value to a typed vocabulary member.
pub fn resolve_typed<T: CanonicalOption>(raw: &str, mode: MatchingMode) -> Option<T> {
    resolve_option(raw, T::LABELS, mode)
        .value()
        .and_then(T::from_label)
}

/// Normalizes a primary or secondary decoration color.
pub fn normalize_color(raw: &str, options: &NormalizationOptions) -> String {
    match_option_with(raw, DecoColor::LABELS, options.matching_mode)
}

/// Normalizes a hoodie type.
pub fn normalize_hoodie_type(raw: &str, options: &NormalizationOptions) -> String {
    match_option_with(raw, HoodieType::LABELS, options.matching_mode)
}

/// Normalizes a decoration base. Blank input becomes `N/A` when configured.
pub fn normalize_deco_base(raw: &str, options: &NormalizationOptions) -> String {
    let value = deco_base_input(raw, options);
    match_option_with(value, DecoBase::LABELS, options.matching_mode)
}

/// Applies the blank-to-`N/A` rule for decoration bases.
pub fn deco_base_input<'a>(raw: &'a str, options: &NormalizationOptions) -> &'a str {
    if options.blank_deco_base_as_na && raw.trim().is_empty() {
        DecoBase::NOT_APPLICABLE
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &[&str] = &["Amarillo", "Rojo", "Azul Marino"];

    #[test]
    fn test_fold_strips_accents_and_whitespace() {
        assert_eq!(normalize_for_comparison("  Café   Oscuro "), "cafe oscuro");
        assert_eq!(normalize_for_comparison("SERIGRAFÍA"), "serigrafia");
        assert_eq!(normalize_for_comparison("a\t\nb"), "a b");
        assert_eq!(normalize_for_comparison(""), "");
    }

    #[test]
    fn test_exact_pass_wins_over_containment() {
        let vocabulary = ["Azul Marino", "Azul"];
        assert_eq!(
            resolve_option("azul", &vocabulary, MatchingMode::Lenient),
            OptionMatch::Exact("Azul")
        );
    }

    #[test]
    fn test_containment_both_directions() {
        assert_eq!(
            resolve_option("marino", COLORS, MatchingMode::Lenient),
            OptionMatch::Contained("Azul Marino")
        );
        assert_eq!(
            resolve_option("Rojo Intenso", COLORS, MatchingMode::Lenient),
            OptionMatch::Contained("Rojo")
        );
    }

    #[test]
    fn test_strict_mode_skips_containment() {
        assert_eq!(
            resolve_option("marino", COLORS, MatchingMode::Strict),
            OptionMatch::Unmatched
        );
        assert_eq!(
            match_option_with("marino", COLORS, MatchingMode::Strict),
            "marino"
        );
    }

    #[test]
    fn test_empty_input_is_returned_unchanged() {
        assert_eq!(match_option("", COLORS), "");
        assert_eq!(
            resolve_option("", COLORS, MatchingMode::Lenient),
            OptionMatch::Unmatched
        );
    }

    #[test]
    fn test_whitespace_input_is_contained_in_first_entry() {
        assert_eq!(match_option("   ", COLORS), "Amarillo");
        assert_eq!(
            resolve_option("\t ", COLORS, MatchingMode::Lenient),
            OptionMatch::Contained("Amarillo")
        );
        assert_eq!(
            match_option_with("   ", COLORS, MatchingMode::Strict),
            "   "
        );
    }

    #[test]
    fn test_empty_vocabulary_entry_contained_in_any_input() {
        let vocabulary = ["", "Rojo"];
        assert_eq!(match_option("Verde", &vocabulary), "");
        assert_eq!(match_option("Rojo", &vocabulary), "Rojo");
    }

    #[test]
    fn test_deco_base_blank_becomes_sentinel() {
        let options = NormalizationOptions::default();
        assert_eq!(normalize_deco_base("", &options), "N/A");
        assert_eq!(normalize_deco_base("  ", &options), "N/A");
        assert_eq!(normalize_deco_base("n/a", &options), "N/A");

        let keep_blank = options.with_blank_deco_base_as_na(false);
        assert_eq!(normalize_deco_base("", &keep_blank), "");
    }
}
