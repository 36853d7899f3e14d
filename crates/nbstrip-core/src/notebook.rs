//! In-memory notebook document model.
//!
//! The model is deliberately loose: only the fields the cleaner touches are
//! typed, and everything else (notebook metadata, cell ids, attachments, ...)
//! is captured verbatim in flattened maps so the cleaned document keeps the
//! structure of the input.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A parsed notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Ordered cells of the notebook
    pub cells: Vec<Cell>,
    /// All other top-level keys, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One notebook cell.
///
/// `outputs` and `execution_count` are modeled as optional fields rather than
/// checked at runtime: a field absent in the input stays absent in the output,
/// and a present field is forcibly reset by the cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell kind ("code", "markdown", "raw"). Required by the nbformat
    /// schema, but kept optional here so a malformed cell is reported with
    /// its index instead of failing opaquely at parse time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_type: Option<String>,

    /// Cell source text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CellSource>,

    /// Execution outputs, present only on code cells in real documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,

    /// Execution counter. Double option: outer `None` means the key was
    /// absent, `Some(None)` means it was present as JSON null.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_count: Option<Option<i64>>,

    /// All other cell keys (id, metadata, attachments, ...), preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Source text of a cell.
///
/// The nbformat on-disk encoding allows either a list of lines (each line
/// keeping its own `\n` terminator) or a single string. Whichever form was
/// read is the form written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    /// Line-list form, the common encoding
    Lines(Vec<String>),
    /// Single-string form
    Text(String),
}

impl CellSource {
    /// Number of lines in the source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        match self {
            Self::Lines(lines) => lines.len(),
            Self::Text(text) => text.split_inclusive('\n').count(),
        }
    }
}

impl Notebook {
    /// Parse a notebook from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Parse`](crate::CleanError::Parse) if the content
    /// is not well-formed notebook JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the notebook back to JSON text.
    ///
    /// Formatting is not byte-for-byte identical to the input; only
    /// structural equivalence is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Parse`](crate::CleanError::Parse) if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Distinguish "key absent" from "key present as null" during deserialization.
fn double_option<'de, D>(deserializer: D) -> std::result::Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_notebook() {
        let json = r#"{"nbformat": 4, "nbformat_minor": 5, "metadata": {}, "cells": []}"#;
        let notebook = Notebook::from_json(json).unwrap();
        assert!(notebook.cells.is_empty());
        assert_eq!(notebook.extra["nbformat"], 4);
    }

    #[test]
    fn test_missing_cells_is_parse_error() {
        let json = r#"{"nbformat": 4, "metadata": {}}"#;
        assert!(Notebook::from_json(json).is_err());
    }

    #[test]
    fn test_execution_count_absent_vs_null() {
        let absent: Cell =
            serde_json::from_str(r#"{"cell_type": "markdown", "source": []}"#).unwrap();
        assert_eq!(absent.execution_count, None);

        let null: Cell = serde_json::from_str(
            r#"{"cell_type": "code", "source": [], "execution_count": null, "outputs": []}"#,
        )
        .unwrap();
        assert_eq!(null.execution_count, Some(None));

        let set: Cell = serde_json::from_str(
            r#"{"cell_type": "code", "source": [], "execution_count": 7, "outputs": []}"#,
        )
        .unwrap();
        assert_eq!(set.execution_count, Some(Some(7)));
    }

    #[test]
    fn test_execution_count_roundtrip() {
        let null: Cell = serde_json::from_str(
            r#"{"cell_type": "code", "source": [], "execution_count": null, "outputs": []}"#,
        )
        .unwrap();
        let json = serde_json::to_string(&null).unwrap();
        assert!(json.contains(r#""execution_count":null"#));

        let absent: Cell =
            serde_json::from_str(r#"{"cell_type": "markdown", "source": []}"#).unwrap();
        let json = serde_json::to_string(&absent).unwrap();
        assert!(!json.contains("execution_count"));
        assert!(!json.contains("outputs"));
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let json = r#"{
            "cell_type": "code",
            "id": "abc123",
            "metadata": {"collapsed": true},
            "source": ["x = 1"],
            "outputs": [],
            "execution_count": null
        }"#;
        let cell: Cell = serde_json::from_str(json).unwrap();
        assert_eq!(cell.extra["id"], "abc123");
        assert_eq!(cell.extra["metadata"]["collapsed"], true);

        let reserialized = serde_json::to_string(&cell).unwrap();
        let reparsed: Cell = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(cell, reparsed);
    }

    #[test]
    fn test_source_forms() {
        let list: Cell =
            serde_json::from_str(r#"{"cell_type": "code", "source": ["a\n", "b"]}"#).unwrap();
        assert_eq!(
            list.source,
            Some(CellSource::Lines(vec!["a\n".to_string(), "b".to_string()]))
        );

        let string: Cell =
            serde_json::from_str(r#"{"cell_type": "code", "source": "a\nb"}"#).unwrap();
        assert_eq!(string.source, Some(CellSource::Text("a\nb".to_string())));

        // Each form serializes back to its own encoding
        assert!(serde_json::to_string(&list).unwrap().contains(r#"["a\n","b"]"#));
        assert!(serde_json::to_string(&string).unwrap().contains(r#""a\nb""#));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(
            CellSource::Lines(vec!["a\n".into(), "b\n".into()]).line_count(),
            2
        );
        assert_eq!(CellSource::Text("a\nb".to_string()).line_count(), 2);
        assert_eq!(CellSource::Text(String::new()).line_count(), 0);
    }
}
