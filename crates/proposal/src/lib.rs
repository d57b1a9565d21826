//! Proposal - offshore asset allocation proposal documents
//!
//! This crate provides:
//! - The proposal input record (client, premium, scenarios, promotions)
//! - Record parsing from JSON
//! - The projection of a record into display-ready strings
//! - Document rendering as HTML (screen / print) or XeLaTeX source
//! - Simplified and traditional script variants of all document text
//!
//! # Example
//!
//! ```
//! use proposal::{OutputFormat, Proposal, ProposalRenderer, Script};
//!
//! let proposal = Proposal::default();
//! let html = ProposalRenderer::new(&proposal)
//!     .with_script(Script::Traditional)
//!     .render(OutputFormat::Html)?;
//! assert!(html.contains("116%"));
//! # Ok::<(), proposal::ProposalError>(())
//! ```

mod escape;
mod html;
mod latex;
pub mod locale;
mod model;
pub mod parser;
pub mod projection;
mod renderer;
pub mod sections;

pub use escape::{escape_html, escape_latex};
pub use html::{HtmlRenderer, REPORT_ELEMENT_ID};
pub use latex::LatexRenderer;
pub use model::*;
pub use parser::parse_proposal;
pub use projection::{
    build_prepay_deadline_note, build_prepay_label, build_rebate_label, project, IsolationRow,
    LiquidityRow, Projection,
};
pub use renderer::{DocumentRenderer, OutputFormat, ProposalRenderer, RenderContext};
pub use sections::Section;

// Re-export the formatting primitives the projection is built from
pub use cjk_text::{
    compute_return_rate, format_money, format_short_date, sanitize_filename_component, Script,
};

use thiserror::Error;

/// Errors that can occur while loading or rendering a proposal
#[derive(Debug, Error)]
pub enum ProposalError {
    #[error("Failed to parse proposal: {0}")]
    ParseError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Text error: {0}")]
    TextError(#[from] cjk_text::TextError),
}

/// Result type for proposal operations
pub type Result<T> = std::result::Result<T, ProposalError>;
