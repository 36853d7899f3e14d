//! # nbstrip-core
//!
//! Library for stripping solution content from Jupyter notebooks to produce
//! distributable "challenge" versions. Cleaning a notebook:
//! - clears cell outputs and execution counters,
//! - rewrites marked code lines so only the public version after the marker
//!   survives (a bare marker deletes the line),
//! - leaves everything else, including unknown fields, untouched.
//!
//! ## Example
//!
//! ```no_run
//! use nbstrip_core::{clean_file, DEFAULT_MARKER};
//!
//! let report = clean_file(
//!     "solution.ipynb".as_ref(),
//!     "challenge.ipynb".as_ref(),
//!     DEFAULT_MARKER,
//! )?;
//! println!("cleaned {} cells", report.cells);
//! # Ok::<(), nbstrip_core::CleanError>(())
//! ```

/// Cleaning transform and file pipeline
pub mod clean;
/// Error types for cleaning operations
pub mod error;
/// Notebook document model
pub mod notebook;

pub use clean::{
    clean_cell, clean_file, clean_notebook, clean_str, rewrite_line, CleanReport, DEFAULT_MARKER,
};
pub use error::{CleanError, Result};
pub use notebook::{Cell, CellSource, Notebook};
