//! Output artifact generation for line analyses.
//!
//! Two independent consumers of the same field records:
//!
//! - **Report**: a row-per-field CSV written via the `csv` crate, with
//!   header-once-then-append semantics.
//! - **Summary**: a narrative text file with one formatted message per
//!   field and a blank separator after each line's records.

mod common;
mod report;
mod summary;

pub use common::{ensure_output_dir, remove_if_exists};
pub use report::append_report;
pub use summary::append_summary;
