//! External HTML-to-PDF program
//!
//! Flags follow wkhtmltopdf. The report HTML is written to a temporary file
//! that lives until the program exits.

use crate::{ExportError, ExportOptions, ImageType, Rasterizer, Result};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// CSS pixels per inch assumed by the renderer at scale 1
const BASE_DPI: f64 = 96.0;

/// Rasterizer backed by an external program
#[derive(Debug, Clone)]
pub struct CommandRasterizer {
    program: PathBuf,
}

impl CommandRasterizer {
    /// Program looked up on `PATH` by [`CommandRasterizer::detect`]
    pub const DEFAULT_PROGRAM: &'static str = "wkhtmltopdf";

    /// Use `program`, either a bare name resolved on `PATH` or a path
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the default program on `PATH`
    pub fn detect() -> Option<Self> {
        find_in_path(Self::DEFAULT_PROGRAM).map(Self::new)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for one conversion
    ///
    /// Page size and margins are passed in millimetres whatever unit the
    /// options use.
    pub fn arguments(options: &ExportOptions, input: &Path, output: &Path) -> Vec<OsString> {
        let unit = options.jspdf.unit;
        let (width, height) = options.page_dimensions_mm();
        let [top, left, bottom, right] = options.margin.sides();
        let quality = match options.image.kind {
            // lossless pages, so no JPEG recompression
            ImageType::Png => 100.0,
            ImageType::Jpeg | ImageType::Webp => {
                (options.image.quality * 100.0).round().clamp(0.0, 100.0)
            }
        };
        let dpi = (BASE_DPI * options.html2canvas.scale).round();

        let mut args: Vec<OsString> = vec![
            "--quiet".into(),
            "--encoding".into(),
            "utf-8".into(),
            "--page-width".into(),
            millimetres(width).into(),
            "--page-height".into(),
            millimetres(height).into(),
        ];
        for (flag, value) in [
            ("--margin-top", top),
            ("--margin-left", left),
            ("--margin-bottom", bottom),
            ("--margin-right", right),
        ] {
            args.push(flag.into());
            args.push(millimetres(value * unit.to_mm()).into());
        }
        args.push("--image-quality".into());
        args.push(format!("{quality}").into());
        args.push("--dpi".into());
        args.push(format!("{dpi}").into());
        if options.html2canvas.use_cors {
            args.push("--enable-local-file-access".into());
        }
        args.push(input.as_os_str().to_owned());
        args.push(output.as_os_str().to_owned());
        args
    }

    fn resolve(&self) -> Option<PathBuf> {
        if self.program.components().count() > 1 {
            return self.program.is_file().then(|| self.program.clone());
        }
        find_in_path(&self.program)
    }
}

impl Rasterizer for CommandRasterizer {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(Self::DEFAULT_PROGRAM)
    }

    fn is_available(&self) -> bool {
        self.resolve().is_some()
    }

    fn rasterize(&self, region: &str, options: &ExportOptions, output: &Path) -> Result<()> {
        let program = self.resolve().ok_or(ExportError::CapabilityUnavailable)?;

        let mut input = tempfile::Builder::new()
            .prefix("proposal-")
            .suffix(".html")
            .tempfile()?;
        input.write_all(region.as_bytes())?;
        input.flush()?;

        let args = Self::arguments(options, input.path(), output);
        tracing::debug!(program = %program.display(), ?args, "running rasterizer");

        let result = Command::new(&program).args(&args).output().map_err(|e| {
            ExportError::RasterizeFailed(format!("cannot run {}: {}", program.display(), e))
        })?;

        if !result.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            for line in stderr.lines() {
                tracing::debug!(program = self.name(), "{}", line);
            }
        }

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::RasterizeFailed(format!(
                "{} exited with {}: {}",
                self.name(),
                result.status,
                stderr.trim()
            )));
        }

        let written = std::fs::metadata(output).map(|m| m.len()).unwrap_or(0);
        if written == 0 {
            return Err(ExportError::RasterizeFailed(format!(
                "{} produced no output",
                self.name()
            )));
        }

        Ok(())
    }
}

/// Length in millimetres as a flag value, to two decimals
fn millimetres(value: f64) -> String {
    format!("{}mm", (value * 100.0).round() / 100.0)
}

/// Locate an executable by name on `PATH`
pub fn find_in_path(program: impl AsRef<Path>) -> Option<PathBuf> {
    let program = program.as_ref();
    let paths = std::env::var_os("PATH")?;

    std::env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = candidate.with_extension("exe");
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}
