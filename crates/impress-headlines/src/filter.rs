//! Near-duplicate headline filtering
//!
//! Walks the rows in display order and keeps a row only when its title is
//! below the similarity threshold against every row kept so far. Stops once
//! `max_kept` rows are kept.

use serde::Serialize;

use crate::config::{FilterOptions, SimilarityThreshold};
use crate::record::{title_of, Titled};
use crate::similarity::headline_similarity;

/// A row dropped because it matched an earlier kept row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suppression {
    /// Position of the dropped row in the input
    pub index: usize,
    /// Title of the dropped row
    pub title: String,
    /// Position in the input of the kept row it matched
    pub matched_index: usize,
    /// Title of the kept row it matched
    pub matched_title: String,
    /// Similarity score (0–100) that triggered the suppression
    pub similarity: f64,
}

/// Result of running the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOutcome<T> {
    /// Kept rows, in input order
    pub kept: Vec<T>,
    /// Dropped rows, in input order
    pub suppressed: Vec<Suppression>,
    /// Number of rows given to the filter
    pub input_len: usize,
    /// Whether the cap stopped the filter before all rows were examined
    pub truncated: bool,
}

impl<T> FilterOutcome<T> {
    fn empty(input_len: usize) -> Self {
        Self {
            kept: Vec::new(),
            suppressed: Vec::new(),
            input_len,
            truncated: false,
        }
    }

    pub fn into_kept(self) -> Vec<T> {
        self.kept
    }
}

/// Headline filter configured with [`FilterOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlineFilter {
    options: FilterOptions,
}

impl HeadlineFilter {
    pub fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Filter rows, returning kept rows along with what was dropped
    pub fn apply<T: Titled>(&self, records: Vec<T>) -> FilterOutcome<T> {
        let input_len = records.len();
        let mut outcome = FilterOutcome::empty(input_len);

        if records.is_empty() {
            return outcome;
        }

        if self.options.max_kept == 0 {
            outcome.truncated = true;
            return outcome;
        }

        let threshold = self.options.similarity_threshold;
        tracing::debug!(
            "Processing {} results with threshold {}",
            input_len,
            threshold
        );

        // Titles of kept rows with their input positions
        let mut kept_titles: Vec<(usize, String)> = Vec::new();
        let mut rows = records.into_iter().enumerate();

        for (index, record) in rows.by_ref() {
            let title = title_of(&record).to_string();

            let duplicate = kept_titles.iter().find_map(|(kept_index, kept_title)| {
                let similarity = headline_similarity(&title, kept_title);
                threshold
                    .is_met_by(similarity)
                    .then(|| (*kept_index, kept_title.clone(), similarity))
            });

            match duplicate {
                Some((matched_index, matched_title, similarity)) => {
                    tracing::info!(
                        "Found similar title: \"{}\" matches \"{}\" with {:.2}%",
                        title,
                        matched_title,
                        similarity
                    );
                    outcome.suppressed.push(Suppression {
                        index,
                        title,
                        matched_index,
                        matched_title,
                        similarity,
                    });
                }
                None => {
                    kept_titles.push((index, title));
                    outcome.kept.push(record);
                }
            }

            if outcome.kept.len() >= self.options.max_kept {
                break;
            }
        }

        outcome.truncated = rows.next().is_some();

        tracing::debug!(
            "Filtered from {} to {} results",
            input_len,
            outcome.kept.len()
        );

        outcome
    }
}

/// Drop near-duplicate headlines, keeping at most `cap` rows
///
/// # Examples
/// ```
/// use impress_headlines::{filter_similar_headlines, SimilarityThreshold};
///
/// let titles = vec!["Cats are great", "Cats are great!", "Dogs are cool"];
/// let kept = filter_similar_headlines(titles, SimilarityThreshold::default(), 20);
/// assert_eq!(kept, vec!["Cats are great", "Dogs are cool"]);
/// ```
pub fn filter_similar_headlines<T: Titled>(
    records: Vec<T>,
    threshold: SimilarityThreshold,
    cap: usize,
) -> Vec<T> {
    HeadlineFilter::new(FilterOptions::new(threshold, cap))
        .apply(records)
        .into_kept()
}
