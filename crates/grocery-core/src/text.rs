//! Text Normalization and Collation
//!
//! Folding used for search and dedup, never for display.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Decompose, drop combining marks, lowercase, trim
pub fn normalize(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_mark(*c)).collect();
    stripped.to_lowercase().trim().to_string()
}

fn is_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// True when `haystack` contains `needle` ignoring case and accents.
/// An empty (after normalization) needle matches everything.
pub fn matches_query(haystack: &str, needle: &str) -> bool {
    matches_normalized(haystack, &normalize(needle))
}

/// `matches_query` for a needle already passed through `normalize`
pub fn matches_normalized(haystack: &str, normalized_needle: &str) -> bool {
    normalized_needle.is_empty() || normalize(haystack).contains(normalized_needle)
}

/// French-style name ordering.
///
/// Base letters decide first, then accents (unaccented first), then case
/// (lowercase first); raw code points settle whatever is left.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Folded form with ligatures spelled out, so "Œufs" sorts as "oeufs"
fn primary_key(s: &str) -> String {
    let folded = normalize(s);
    let mut key = String::with_capacity(folded.len());
    for c in folded.chars() {
        match c {
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            'ß' => key.push_str("ss"),
            _ => key.push(c),
        }
    }
    key
}

fn accent_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_accents() {
        assert_eq!(normalize("  Crème Fraîche "), "creme fraiche");
        assert_eq!(normalize("ÉPICERIE"), "epicerie");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_precomposed_and_decomposed_agree() {
        assert_eq!(normalize("caf\u{e9}"), normalize("cafe\u{301}"));
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("Pâtes", "pat"));
        assert!(matches_query("Pâtes", ""));
        assert!(matches_query("Pâtes", "   "));
        assert!(!matches_query("Pâtes", "riz"));
    }

    #[test]
    fn test_matches_normalized_takes_folded_needle() {
        let needle = normalize("  PÂT ");
        assert!(matches_normalized("Pâtes", &needle));
        assert!(matches_normalized("Pâtes", ""));
        assert!(!matches_normalized("Riz", &needle));
    }

    #[test]
    fn test_compare_names_french_order() {
        let mut names = vec!["pâtes", "Pain", "avocat", "Épinards", "eau"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["avocat", "eau", "Épinards", "Pain", "pâtes"]);
    }

    #[test]
    fn test_compare_names_spells_out_ligatures() {
        let mut names = vec!["Yaourt", "Œufs", "Oignons", "Pain"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Œufs", "Oignons", "Pain", "Yaourt"]);

        let mut names = vec!["Aubergine", "Æbleskiver", "Abricot"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Abricot", "Æbleskiver", "Aubergine"]);
    }

    #[test]
    fn test_compare_names_tie_levels() {
        assert_eq!(compare_names("pate", "pâte"), Ordering::Less);
        assert_eq!(compare_names("lait", "Lait"), Ordering::Less);
        assert_eq!(compare_names("Lait", "Lait"), Ordering::Equal);
    }
}
