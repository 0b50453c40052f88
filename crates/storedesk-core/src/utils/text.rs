//! String utility functions.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a string for search matching: strips diacritics and lowercases.
///
/// The input is decomposed (NFD) and combining marks are dropped, so "é"
/// becomes "e" and "Ñ" becomes "n".
///
/// # Examples
///
/// ```
/// use storedesk_core::utils::text::fold_for_search;
///
/// assert_eq!(fold_for_search("Québec"), "quebec");
/// assert_eq!(fold_for_search("SÃO PAULO"), "sao paulo");
/// ```
pub fn fold_for_search(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `true` if `haystack` contains `needle` after folding both.
///
/// An empty (or whitespace-only) needle matches everything.
pub fn folded_contains(haystack: &str, needle: &str) -> bool {
    let needle = fold_for_search(needle.trim());
    needle.is_empty() || fold_for_search(haystack).contains(&needle)
}

/// Capitalizes the first character of a string.
///
/// # Examples
///
/// ```
/// use storedesk_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("hello"), "Hello");
/// assert_eq!(capfirst(""), "");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut result = c.to_uppercase().to_string();
        result.extend(chars);
        result
    })
}

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fold_for_search ──────────────────────────────────────────────

    #[test]
    fn test_fold_acute() {
        assert_eq!(fold_for_search("é"), "e");
        assert_eq!(fold_for_search("Éclair"), "eclair");
    }

    #[test]
    fn test_fold_precomposed_and_decomposed_agree() {
        assert_eq!(fold_for_search("Jos\u{e9}"), fold_for_search("Jose\u{301}"));
    }

    #[test]
    fn test_fold_plain_ascii() {
        assert_eq!(fold_for_search("New York"), "new york");
    }

    #[test]
    fn test_folded_contains() {
        assert!(folded_contains("Café Racer", "cafe"));
        assert!(folded_contains("Cafe Racer", "CAFÉ"));
        assert!(!folded_contains("Cafe Racer", "tea"));
        assert!(folded_contains("anything", "   "));
    }

    // ── capfirst ─────────────────────────────────────────────────────

    #[test]
    fn test_capfirst() {
        assert_eq!(capfirst("hello"), "Hello");
        assert_eq!(capfirst("HELLO"), "HELLO");
        assert_eq!(capfirst("a"), "A");
    }

    // ── escape_html ──────────────────────────────────────────────────

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }
}
