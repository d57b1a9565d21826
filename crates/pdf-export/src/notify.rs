//! User-facing export notices

use std::fmt;
use std::path::PathBuf;

/// Outcome of an export attempt the user should hear about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No rasterizer could be used
    GeneratorMissing,
    /// The rasterizer ran and failed
    GenerationFailed,
    /// The PDF was written
    Saved { path: PathBuf },
}

impl Notice {
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Saved { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::GeneratorMissing => {
                f.write_str("PDF generator library not loaded correctly. Please refresh.")
            }
            Notice::GenerationFailed => f.write_str("Failed to generate PDF. Please try again."),
            Notice::Saved { path } => write!(f, "PDF saved to {}", path.display()),
        }
    }
}

/// Delivers notices to the user
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<F: Fn(&Notice)> Notifier for F {
    fn notify(&self, notice: &Notice) {
        self(notice)
    }
}

/// Reports notices through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_error() {
            tracing::warn!("{}", notice);
        } else {
            tracing::info!("{}", notice);
        }
    }
}
