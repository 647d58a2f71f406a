//! Headline normalization for similarity comparison

/// Normalize a headline for comparison
///
/// - Converts ASCII letters to lowercase
/// - Drops everything that is not an ASCII letter or digit, including
///   whitespace and non-ASCII characters
pub fn normalize_headline(title: &str) -> String {
    title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
