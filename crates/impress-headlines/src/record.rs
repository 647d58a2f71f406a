//! Result rows and title extraction
//!
//! A row is whatever the host displays as one headline. The filter only
//! needs its title, which comes from the labeled entity attached to the row.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HeadlineError, Result};

/// Anything that can expose a headline title
pub trait Titled {
    /// The title, or `None` when the record has nothing to show
    fn title(&self) -> Option<&str>;
}

impl Titled for String {
    fn title(&self) -> Option<&str> {
        Some(self)
    }
}

impl Titled for str {
    fn title(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: Titled + ?Sized> Titled for &T {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }
}

/// Entity attached to a result row, carrying a human-readable label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledEntity {
    /// Entity identifier in the host system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Entity type (e.g., "node", "article")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Human-readable label, used as the headline title
    pub label: String,
}

impl LabeledEntity {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            entity_type: None,
            label: label.into(),
        }
    }
}

/// A single displayed result row
///
/// Keys other than `index` and `entity` are kept untouched in `fields`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultRow {
    /// Position of the row in the host's result set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Attached entity, if the host loaded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<LabeledEntity>,
    /// Remaining row fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResultRow {
    /// Row with an attached entity labeled `title`
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            entity: Some(LabeledEntity::new(title)),
            ..Self::default()
        }
    }

    /// Row without any entity
    pub fn untitled() -> Self {
        Self::default()
    }
}

impl Titled for ResultRow {
    fn title(&self) -> Option<&str> {
        self.entity.as_ref().map(|entity| entity.label.as_str())
    }
}

/// Title of a record, falling back to the empty string
pub fn title_of<T: Titled + ?Sized>(record: &T) -> &str {
    match record.title() {
        Some(title) => title,
        None => {
            tracing::error!("Unable to find title in row");
            ""
        }
    }
}

/// Parse rows from a JSON array
pub fn parse_rows(json: &str) -> Result<Vec<ResultRow>> {
    serde_json::from_str(json).map_err(|e| HeadlineError::InputParse(e.to_string()))
}

/// Parse one title per line, trimming each line and dropping blank ones
pub fn parse_titles(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read row input from `path`, or from `stdin` when the path is absent or `-`
pub fn read_input<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| HeadlineError::Io(format!("{}: {}", path.display(), e))),
        _ => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|e| HeadlineError::Io(e.to_string()))?;
            Ok(buffer)
        }
    }
}
