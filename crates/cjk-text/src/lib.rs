//! CJK Text - Chinese script-aware text formatting
//!
//! This crate provides:
//! - Script selection (simplified / traditional)
//! - Money formatting with thousand separators
//! - Percentage and return-rate formatting (divide-by-zero safe)
//! - Short "month-day" date labels (月 / 日)
//! - Filename sanitization that keeps CJK ideographs
//!
//! # Example
//!
//! ```
//! use cjk_text::{compute_return_rate, format_money, format_short_date, Script};
//!
//! assert_eq!(format_money(1234567.0), "1,234,567");
//! assert_eq!(compute_return_rate(580000.0, 500000.0), "116%");
//! assert_eq!(format_short_date("2025-03-31", Script::Simplified), "3月31日");
//! ```

mod filename;
mod formatter;
mod script;

pub use filename::sanitize_filename_component;
pub use formatter::{
    compute_return_rate, format_money, format_percent, format_short_date, parse_date,
    ZERO_PERCENT,
};
pub use script::Script;

use thiserror::Error;

/// Errors that can occur during text processing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown script: {0}")]
    UnknownScript(String),
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;
