//! impress-headlines: near-duplicate filtering for headline lists.
//!
//! Given rows in display order, keeps a row only when its title is less
//! similar than a threshold to every row already kept, up to a cap
//! (20 by default).
//!
//! # Similarity
//!
//! Titles are lowercased and stripped to ASCII letters and digits, then
//! scored with the "similar_text" metric: the longest common substring is
//! matched, the same is done recursively on the text to its left and right,
//! and the score is `200 * matched / (len(a) + len(b))`.
//!
//! - Empty titles score 0 against anything, including another empty title
//! - Titles identical before normalization score 100

pub mod config;
pub mod error;
pub mod filter;
pub mod normalization;
pub mod record;
pub mod similarity;

pub use config::{
    FilterOptions, SimilarityThreshold, DEFAULT_MAX_KEPT, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use error::{HeadlineError, Result};
pub use filter::{filter_similar_headlines, FilterOutcome, HeadlineFilter, Suppression};
pub use normalization::normalize_headline;
pub use record::{parse_rows, parse_titles, read_input, title_of, LabeledEntity, ResultRow, Titled};
pub use similarity::{headline_similarity, similar_text, similar_text_percent};
