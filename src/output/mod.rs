//! Output formatting for test results.
//!
//! Everything here renders to in-memory values; writing them to disk or
//! drawing charts is left to the caller.

mod json;
mod plot;
mod terminal;
mod text;

pub use json::{to_json, to_json_pretty};
pub use plot::{box_summary, histogram, identity_line, BoxSummary, Histogram};
pub use terminal::{format_batch, format_outcome, format_report};
pub use text::{format_text, write_text};
