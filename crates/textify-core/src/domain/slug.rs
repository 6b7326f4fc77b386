//! Slug derivation for display titles.

/// Derive a URL-safe slug from a display title or name.
///
/// Lower-cases the input, strips everything outside word characters,
/// whitespace and hyphens, collapses whitespace and hyphen runs into a
/// single hyphen, and trims leading/trailing hyphens. Deterministic and
/// idempotent; collisions with existing slugs are not checked.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut separator_pending = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if separator_pending && !slug.is_empty() {
                slug.push('-');
            }
            separator_pending = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            separator_pending = true;
        }
        // any other character is stripped without breaking the current run
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("OCR Tool"), "ocr-tool");
        assert_eq!(slugify("Image to Text Converter"), "image-to-text-converter");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("C++ tips & tricks!"), "c-tips-tricks");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("a  -  b"), "a-b");
        assert_eq!(slugify("rock --- roll"), "rock-roll");
    }

    #[test]
    fn test_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  padded title  "), "padded-title");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        assert_eq!(slugify("top_10 tools 2024"), "top_10-tools-2024");
    }

    #[test]
    fn test_idempotent() {
        let once = slugify("How to Extract Text from Images");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_pure() {
        assert_eq!(slugify("Same Input"), slugify("Same Input"));
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
