//! Export trigger
//!
//! Owns the in-flight flag. The flag is advisory: it tells callers (a
//! button, a CLI) that an export is running and rejects a second
//! [`ExportTrigger::begin`] until the first guard is dropped.

use crate::{
    export_filename, stamp_document_info, DocumentInfo, ExportError, ExportOptions, Notice,
    Notifier, Rasterizer, Result,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One export: the report region and how to write it
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub client_name: String,
    /// Complete HTML document of the report region
    pub html: String,
    pub options: ExportOptions,
    /// Written into the PDF after rasterizing; `None` skips stamping
    pub info: Option<DocumentInfo>,
}

impl ExportRequest {
    /// Request with default options and info derived from the client name
    pub fn new(client_name: impl Into<String>, html: impl Into<String>) -> Self {
        let client_name = client_name.into();
        Self {
            options: ExportOptions::with_filename(export_filename(&client_name)),
            info: Some(DocumentInfo::for_client(&client_name)),
            html: html.into(),
            client_name,
        }
    }

    /// Replace the options; the filename is always derived from the client
    pub fn with_options(mut self, mut options: ExportOptions) -> Self {
        options.filename = export_filename(&self.client_name);
        self.options = options;
        self
    }

    /// Leave the rasterizer's document info untouched
    pub fn without_metadata(mut self) -> Self {
        self.info = None;
        self
    }
}

/// Clears the in-flight flag when dropped
#[derive(Debug)]
pub struct ExportGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Starts exports and tracks whether one is running
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ExportTrigger {
    in_flight: Arc<AtomicBool>,
}

impl ExportTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export is running
    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Mark an export as running until the guard is dropped
    pub fn begin(&self) -> Result<ExportGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::AlreadyRunning)?;

        Ok(ExportGuard {
            flag: Arc::clone(&self.in_flight),
        })
    }

    /// Export `request` into `out_dir` with `capability`
    ///
    /// Every outcome except [`ExportError::AlreadyRunning`] is also reported
    /// through `notifier`. The PDF is written to a temporary file in
    /// `out_dir` and renamed over the target only once it is complete, so a
    /// failed attempt leaves no file and never touches an earlier export.
    /// Failures are not retried.
    pub fn export(
        &self,
        capability: Option<&dyn Rasterizer>,
        request: &ExportRequest,
        out_dir: &Path,
        notifier: &dyn Notifier,
    ) -> Result<PathBuf> {
        let _guard = self.begin().inspect_err(|_| {
            tracing::warn!("export requested while another is running");
        })?;

        let Some(rasterizer) = capability.filter(|r| r.is_available()) else {
            tracing::warn!("no PDF rasterizer available");
            notifier.notify(&Notice::GeneratorMissing);
            return Err(ExportError::CapabilityUnavailable);
        };

        let output = out_dir.join(&request.options.filename);
        tracing::info!(
            rasterizer = rasterizer.name(),
            path = %output.display(),
            "generating PDF"
        );

        if let Err(err) = write_pdf(rasterizer, request, out_dir, &output) {
            tracing::error!(
                rasterizer = rasterizer.name(),
                error = %err,
                "PDF generation failed"
            );
            notifier.notify(&Notice::GenerationFailed);
            return Err(err);
        }

        notifier.notify(&Notice::Saved {
            path: output.clone(),
        });
        Ok(output)
    }
}

/// Rasterize into a staging file, stamp document info, then move it to `output`
///
/// The staging file is deleted on drop, so every early return discards it.
fn write_pdf(
    rasterizer: &dyn Rasterizer,
    request: &ExportRequest,
    out_dir: &Path,
    output: &Path,
) -> Result<()> {
    let staged = tempfile::Builder::new()
        .prefix(".proposal-")
        .suffix(".pdf")
        .tempfile_in(out_dir)?;

    rasterizer
        .rasterize(&request.html, &request.options, staged.path())
        .map_err(|err| match err {
            ExportError::RasterizeFailed(_) => err,
            other => ExportError::RasterizeFailed(other.to_string()),
        })?;

    if std::fs::metadata(staged.path())?.len() == 0 {
        return Err(ExportError::RasterizeFailed(format!(
            "{} produced no output",
            rasterizer.name()
        )));
    }

    if let Some(info) = &request.info {
        let pages = stamp_document_info(staged.path(), info)?;
        tracing::info!(pages, "PDF written");
    }

    staged.persist(output).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_flag() {
        let trigger = ExportTrigger::new();
        assert!(!trigger.is_exporting());

        let guard = trigger.begin().unwrap();
        assert!(trigger.is_exporting());
        assert!(matches!(trigger.begin(), Err(ExportError::AlreadyRunning)));

        drop(guard);
        assert!(!trigger.is_exporting());
        assert!(trigger.begin().is_ok());
    }

    #[test]
    fn test_clones_share_flag() {
        let trigger = ExportTrigger::new();
        let shared = trigger.clone();
        let _guard = trigger.begin().unwrap();
        assert!(shared.is_exporting());
    }

    #[test]
    fn test_request_filename_follows_client() {
        let mut options = ExportOptions::with_filename("ignored.pdf");
        options.image.quality = 0.5;
        let request = ExportRequest::new("Wang Li", "<html></html>").with_options(options);
        assert_eq!(
            request.options.filename,
            "Wang_Li_Offshore_Asset_Allocation.pdf"
        );
        assert_eq!(request.options.image.quality, 0.5);
        assert!(request.without_metadata().info.is_none());
    }
}
