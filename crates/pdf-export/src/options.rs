//! Export options
//!
//! Mirrors the option object handed to html2pdf in the browser, so the same
//! JSON configures the browser export and the command-line export.

use crate::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page margin, uniform or `[top, left, bottom, right]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Margin {
    Uniform(f64),
    Sides([f64; 4]),
}

impl Margin {
    /// Margins as `[top, left, bottom, right]`
    pub fn sides(&self) -> [f64; 4] {
        match *self {
            Margin::Uniform(m) => [m; 4],
            Margin::Sides(sides) => sides,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Margin::Uniform(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Jpeg,
    Png,
    Webp,
}

/// Raster image encoding of each captured page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub kind: ImageType,
    /// Encoder quality in `0.0..=1.0`
    pub quality: f64,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            kind: ImageType::Jpeg,
            quality: 0.98,
        }
    }
}

/// Capture settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasOptions {
    /// Device pixel ratio of the capture
    pub scale: f64,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub letter_rendering: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            use_cors: true,
            letter_rendering: true,
        }
    }
}

/// Length unit of margins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Mm,
    Cm,
    In,
    Pt,
}

impl Unit {
    /// Millimetres per unit
    pub fn to_mm(self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::Cm => 10.0,
            Unit::In => 25.4,
            Unit::Pt => 25.4 / 72.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// Portrait width and height in millimetres
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Output document settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsPdfOptions {
    pub unit: Unit,
    pub format: PaperSize,
    pub orientation: Orientation,
}

/// Complete export configuration
///
/// Every field falls back to its default, so a partial JSON object only
/// overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub margin: Margin,
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub jspdf: JsPdfOptions,
}

impl ExportOptions {
    /// Default options with `filename` set
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Parse options from JSON, then validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| ExportError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values no rasterizer can honour
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.image.quality) {
            return Err(ExportError::InvalidOptions(format!(
                "image quality {} is outside 0..1",
                self.image.quality
            )));
        }
        if !(self.html2canvas.scale.is_finite() && self.html2canvas.scale > 0.0) {
            return Err(ExportError::InvalidOptions(format!(
                "capture scale {} must be positive",
                self.html2canvas.scale
            )));
        }
        if self.margin.sides().iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ExportError::InvalidOptions(
                "margins must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Page width and height in millimetres after orientation
    pub fn page_dimensions_mm(&self) -> (f64, f64) {
        let (w, h) = self.jspdf.format.dimensions_mm();
        match self.jspdf.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}
