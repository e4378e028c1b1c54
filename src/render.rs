//! Renderers turning catalogue records and CSV rows into Markdown and HTML.
//!
//! Every renderer is a pure function returning the output as a list of
//! lines (without trailing newlines). Blank lines are empty strings.

mod document;
pub use document::render_requirements_document;

mod nfr;
pub use nfr::{render_nfr_table, NFR_TABLE_HEADER};

/// Test report tables rendered from CSV rows.
pub mod test_report;
pub use test_report::{render_requirement_test_table, render_test_case_table};

mod use_case;
pub use use_case::{render_use_case_details, render_use_case_links, render_use_cases, Mode};

/// Errors reported by the renderers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The requested use case rendering mode is not supported.
    #[error("use case mode must be 'links' or 'text', got '{0}'")]
    UnsupportedMode(String),
}
