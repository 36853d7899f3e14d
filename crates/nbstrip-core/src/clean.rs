//! The cleaning transform: line rewriter, cell cleaner, document pipeline.
//!
//! The transform is a pure function over the in-memory [`Notebook`]; file
//! I/O lives only in the thin [`clean_file`] adapter at the boundary.

use std::fs;
use std::path::Path;

use crate::error::{CleanError, Result};
use crate::notebook::{Cell, CellSource, Notebook};

/// Marker token that reveals the public version of a code line.
pub const DEFAULT_MARKER: &str = "# <<<";

/// Summary of one completed clean run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    /// Number of cells in the cleaned notebook
    pub cells: usize,
    /// Size in bytes of the serialized output
    pub bytes: usize,
}

/// Rewrite one source line according to the marker rule.
///
/// Lines without the marker pass through unchanged. For a marked line, only
/// the text strictly after the first marker occurrence survives: its leading
/// whitespace is stripped and, when anything is left, the original line's
/// leading whitespace is restored verbatim. A marker with nothing after it
/// deletes the line (the result is the empty string, no indent).
///
/// Only the first occurrence is honored; a second marker inside the revealed
/// remainder is emitted verbatim, never re-scanned.
#[must_use]
pub fn rewrite_line(line: &str, marker: &str) -> String {
    // An empty marker would match every line; treat it as no marker.
    if marker.is_empty() {
        return line.to_string();
    }
    let Some((_, after)) = line.split_once(marker) else {
        return line.to_string();
    };
    let revealed = after.trim_start();
    if revealed.is_empty() {
        return String::new();
    }
    let indent = &line[..line.len() - line.trim_start().len()];
    format!("{indent}{revealed}")
}

/// Normalize one cell for distribution.
///
/// Clears `outputs` and `execution_count` wherever present (regardless of
/// cell type), and rewrites the source of code cells line by line. Absence
/// of `outputs` or `execution_count` is not an error; a cell without a
/// `cell_type`, or a code cell without `source`, aborts the run with a
/// Schema error carrying the cell index.
///
/// Idempotent once no markers remain in the source.
///
/// # Errors
///
/// Returns [`CleanError::Schema`] when a required field is missing.
pub fn clean_cell(cell: &mut Cell, index: usize, marker: &str) -> Result<()> {
    if let Some(outputs) = cell.outputs.as_mut() {
        outputs.clear();
    }
    if let Some(count) = cell.execution_count.as_mut() {
        *count = None;
    }

    let cell_type = cell.cell_type.as_deref().ok_or(CleanError::Schema {
        index,
        field: "cell_type",
    })?;
    if cell_type == "code" {
        let source = cell.source.as_mut().ok_or(CleanError::Schema {
            index,
            field: "source",
        })?;
        rewrite_source(source, marker);
    }
    Ok(())
}

/// Rewrite every line of a source, one-to-one, preserving the encoding form.
fn rewrite_source(source: &mut CellSource, marker: &str) {
    match source {
        CellSource::Lines(lines) => {
            for line in lines.iter_mut() {
                *line = rewrite_line(line, marker);
            }
        }
        CellSource::Text(text) => {
            *text = text
                .split_inclusive('\n')
                .map(|line| rewrite_line(line, marker))
                .collect();
        }
    }
}

/// Clean every cell of a notebook in place, in order.
///
/// All-or-nothing: the first Schema error aborts the run, since a
/// half-cleaned distributable could leak solution code.
///
/// # Errors
///
/// Returns [`CleanError::Schema`] for the first malformed cell.
pub fn clean_notebook(notebook: &mut Notebook, marker: &str) -> Result<()> {
    for (index, cell) in notebook.cells.iter_mut().enumerate() {
        clean_cell(cell, index, marker)?;
    }
    Ok(())
}

/// Clean a notebook given as JSON text, returning the cleaned JSON text.
///
/// # Errors
///
/// Returns [`CleanError::Parse`] for malformed JSON and
/// [`CleanError::Schema`] for a malformed cell.
pub fn clean_str(content: &str, marker: &str) -> Result<String> {
    let mut notebook = Notebook::from_json(content)?;
    clean_notebook(&mut notebook, marker)?;
    notebook.to_json()
}

/// Clean the notebook at `input` and write the result to `output`.
///
/// The full serialized result is buffered in memory before the destination
/// is opened, so a failing run never leaves a truncated output file.
///
/// # Errors
///
/// Returns [`CleanError::NotFound`] if the input cannot be read,
/// [`CleanError::Parse`] / [`CleanError::Schema`] for malformed content, and
/// [`CleanError::Write`] if the destination cannot be written.
pub fn clean_file(input: &Path, output: &Path, marker: &str) -> Result<CleanReport> {
    let content = fs::read_to_string(input).map_err(|source| CleanError::NotFound {
        path: input.to_path_buf(),
        source,
    })?;

    let mut notebook = Notebook::from_json(&content)?;
    clean_notebook(&mut notebook, marker)?;
    let serialized = notebook.to_json()?;

    fs::write(output, &serialized).map_err(|source| CleanError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(CleanReport {
        cells: notebook.cells.len(),
        bytes: serialized.len(),
    })
}
