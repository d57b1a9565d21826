//! Rasterizer capability

use crate::{ExportOptions, Result};
use std::path::Path;

/// Something that can turn the report region into a PDF file
///
/// `region` is the complete HTML document of the report. Implementations
/// write the PDF to `output` and must not leave a file behind on failure;
/// the export trigger removes one if they do.
pub trait Rasterizer {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Whether the capability can be used right now
    fn is_available(&self) -> bool {
        true
    }

    /// Rasterize `region` into a PDF at `output`
    fn rasterize(&self, region: &str, options: &ExportOptions, output: &Path) -> Result<()>;
}
