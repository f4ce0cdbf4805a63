//! Dataset: the dishes and seed comments the app starts from.
//!
//! The file shape matches a `db.json`-style dump:
//!
//! ```json
//! { "dishes": [ { "id": 0, "name": "...", ... } ],
//!   "comments": [ { "id": 0, "dishId": 0, "rating": 5, ... } ] }
//! ```

use crate::model::{Comment, CommentId, Dish, DishId};
use crate::store::{Catalog, CommentLog};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dataset compiled into the binary, used when no file is configured.
pub const EMBEDDED: &str = include_str!("../data/menu.json");

/// Problems loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON was malformed or a field was invalid.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// A dish's declared id does not match its position.
    #[error("dish at position {index} declares id {id}")]
    IdMismatch {
        /// Position in the dish array.
        index: usize,
        /// Declared id.
        id: DishId,
    },
    /// A seed comment uses the largest id, leaving none to assign.
    #[error("comment id {id} leaves no room for new comments")]
    CommentIdOverflow {
        /// The offending id.
        id: CommentId,
    },
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    dishes: Vec<Dish>,
    #[serde(default)]
    comments: Vec<Comment>,
}

/// A loaded dataset, ready to seed a store.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Dish catalog.
    pub catalog: Catalog,
    /// Seed comments.
    pub comments: CommentLog,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let catalog = Catalog::new(raw.dishes)?;
        let dangling = raw
            .comments
            .iter()
            .filter(|c| catalog.get(c.dish_id).is_none())
            .count();
        if dangling > 0 {
            tracing::warn!(dangling, "comments reference dishes outside the catalog");
        }
        let comments = CommentLog::new(raw.comments)?;
        Ok(Self { catalog, comments })
    }

    /// Load a dataset file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            dishes = dataset.catalog.len(),
            comments = dataset.comments.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED)
    }

    /// Load from `path` when given, otherwise fall back to the embedded data.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.catalog.len(), 4);
        assert_eq!(
            dataset.catalog.featured().map(|d| d.name.as_str()),
            Some("Uthappizza")
        );
        assert!(!dataset.comments.is_empty());
    }

    #[test]
    fn test_comments_optional() {
        let json = r#"{"dishes":[{"id":0,"name":"Soup","description":"Hot","image":"s.png","category":"mains","price":"3.00"}]}"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert!(dataset.comments.is_empty());
        assert!(!dataset.catalog.dishes()[0].featured);
    }

    #[test]
    fn test_id_mismatch_reported() {
        let json = r#"{"dishes":[{"id":4,"name":"Soup","description":"","image":"","category":"","price":""}]}"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "dish at position 0 declares id 4");
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/menu.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn test_comment_id_overflow_rejected() {
        let json = r#"{"dishes":[{"id":0,"name":"Soup","description":"","image":"","category":"","price":""}],
            "comments":[{"id":4294967295,"dishId":0,"rating":5,"comment":"","author":"","date":"2012-10-16T17:57:28.556094Z"}]}"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::CommentIdOverflow { .. }));
        assert_eq!(err.to_string(), "comment id 4294967295 leaves no room for new comments");
    }
}
