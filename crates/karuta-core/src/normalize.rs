use unicode_normalization::UnicodeNormalization;

/// 全角スペース, the whitespace kanji text actually contains
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Canonical lookup key for a raw term: NFKC with every whitespace character removed
pub fn normalize(raw: &str) -> String {
    raw.nfkc()
        .filter(|c| !c.is_whitespace() && *c != IDEOGRAPHIC_SPACE)
        // stripping can land a combining mark on a new base, recompose
        .nfkc()
        .collect()
}
