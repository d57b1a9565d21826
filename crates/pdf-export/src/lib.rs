//! PDF Export - turn a rendered proposal into a downloadable PDF
//!
//! This crate provides functionality for:
//! - Export options in the html2pdf option-object shape
//! - Deriving the export filename from the client name
//! - Driving a pluggable HTML-to-PDF rasterizer
//! - Guarding against overlapping exports
//! - Stamping document info (title, author, subject) into the output
//!
//! # Example
//!
//! ```ignore
//! use pdf_export::{CommandRasterizer, ExportRequest, ExportTrigger, LogNotifier};
//!
//! let rasterizer = CommandRasterizer::detect();
//! let request = ExportRequest::new("陈总 (Mr. Chen)", html);
//! let path = ExportTrigger::new().export(
//!     rasterizer.as_ref().map(|r| r as _),
//!     &request,
//!     "out".as_ref(),
//!     &LogNotifier,
//! )?;
//! ```

#[cfg(feature = "command")]
mod command;
mod filename;
mod metadata;
mod notify;
mod options;
mod rasterizer;
mod trigger;

#[cfg(feature = "command")]
pub use command::{find_in_path, CommandRasterizer};
pub use filename::{export_filename, FILENAME_SUFFIX};
pub use metadata::{stamp_document_info, DocumentInfo};
pub use notify::{LogNotifier, Notice, Notifier};
pub use options::{
    CanvasOptions, ExportOptions, ImageOptions, ImageType, JsPdfOptions, Margin, Orientation,
    PaperSize, Unit,
};
pub use rasterizer::Rasterizer;
pub use trigger::{ExportGuard, ExportRequest, ExportTrigger};

use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generator is not available")]
    CapabilityUnavailable,

    #[error("An export is already in progress")]
    AlreadyRunning,

    #[error("Failed to generate PDF: {0}")]
    RasterizeFailed(String),

    #[error("Invalid PDF output: {0}")]
    InvalidOutput(String),

    #[error("Invalid export options: {0}")]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
