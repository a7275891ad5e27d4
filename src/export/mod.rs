// src/export/mod.rs

mod fs_utils;
pub mod ics;
pub mod logic;
pub mod preview;

pub use ics::{IcsOptions, render_ics};
pub use logic::{ExportLogic, ExportTargets};
pub use preview::{ConversionBundle, PreviewEvent, PreviewMode, render_preview};

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
