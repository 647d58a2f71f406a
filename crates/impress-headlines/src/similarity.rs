//! Similarity scoring for headline deduplication
//!
//! The metric is the classic "similar_text" score: find the longest common
//! substring, then recurse into the text left of it and the text right of it,
//! summing every matched run. The score is twice the matched length over the
//! combined length, as a percentage.

use crate::normalization::normalize_headline;

/// Score given to headlines that are byte-for-byte identical
pub const IDENTICAL_SCORE: f64 = 100.0;

/// Number of characters matched by the recursive longest-common-substring
/// procedure.
///
/// Directional: when several common substrings share the maximum length, the
/// one starting earliest in `a` wins, then earliest in `b`. Swapping the
/// arguments can therefore change the result.
///
/// # Examples
/// ```
/// use impress_headlines::similar_text;
/// assert_eq!(similar_text("World", "Word"), 4);
/// assert_eq!(similar_text("bafoobar", "barfoo"), 5);
/// assert_eq!(similar_text("barfoo", "bafoobar"), 3);
/// ```
pub fn similar_text(a: &str, b: &str) -> usize {
    matched_length(a.as_bytes(), b.as_bytes())
}

/// [`similar_text`] expressed as a percentage of the combined length.
///
/// Returns 0 when both inputs are empty.
pub fn similar_text_percent(a: &str, b: &str) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    (similar_text(a, b) * 2) as f64 * 100.0 / total as f64
}

/// Similarity between two headlines on a 0–100 scale
///
/// - Either headline empty: 0 (also when both are empty)
/// - Identical before normalization: 100
/// - Otherwise the [`similar_text_percent`] of the normalized headlines,
///   taking the better of the two argument orders so the score is symmetric
pub fn headline_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return IDENTICAL_SCORE;
    }

    let norm_a = normalize_headline(a);
    let norm_b = normalize_headline(b);

    let forward = similar_text_percent(&norm_a, &norm_b);
    let backward = similar_text_percent(&norm_b, &norm_a);
    forward.max(backward)
}

fn matched_length(a: &[u8], b: &[u8]) -> usize {
    let (pos_a, pos_b, max) = longest_common_run(a, b);
    if max == 0 {
        return 0;
    }

    let mut sum = max;

    if pos_a > 0 && pos_b > 0 {
        sum += matched_length(&a[..pos_a], &b[..pos_b]);
    }

    let end_a = pos_a + max;
    let end_b = pos_b + max;
    if end_a < a.len() && end_b < b.len() {
        sum += matched_length(&a[end_a..], &b[end_b..]);
    }

    sum
}

/// First longest common substring as `(start in a, start in b, length)`
fn longest_common_run(a: &[u8], b: &[u8]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);

    for i in 0..a.len() {
        // Nothing starting here can be longer than what is left of `a`
        if a.len() - i <= best.2 {
            break;
        }
        for j in 0..b.len() {
            let len = a[i..]
                .iter()
                .zip(&b[j..])
                .take_while(|(x, y)| x == y)
                .count();
            if len > best.2 {
                best = (i, j, len);
            }
        }
    }

    best
}
