// src/export/logic.rs

use crate::config::Config;
use crate::core::Schedule;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_file};
use crate::export::ics::{IcsOptions, render_ics};
use crate::export::notify_export_success;
use crate::export::preview::{ConversionBundle, PreviewMode, render_preview};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Where to write each output of a conversion.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub ics: PathBuf,
    pub preview: Option<PathBuf>,
    pub bundle: Option<PathBuf>,
    pub mode: PreviewMode,
    pub force: bool,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    pub fn ics_options(cfg: &Config) -> IcsOptions {
        IcsOptions {
            uid_domain: cfg.uid_domain.clone(),
            product: cfg.calendar_name.clone(),
        }
    }

    /// Write the ICS file and, when requested, the preview and bundle JSON.
    ///
    /// All targets are checked before anything is written.
    pub fn export(
        schedule: &Schedule,
        cfg: &Config,
        targets: &ExportTargets,
        stamp: NaiveDateTime,
    ) -> AppResult<()> {
        let paths: Vec<&Path> = std::iter::once(targets.ics.as_path())
            .chain(targets.preview.as_deref())
            .chain(targets.bundle.as_deref())
            .collect();
        for p in &paths {
            ensure_writable(p, targets.force)?;
        }

        let ics = render_ics(&schedule.events, stamp, &Self::ics_options(cfg));
        write_file(&targets.ics, &ics)?;
        notify_export_success("ICS", &targets.ics);

        if targets.preview.is_none() && targets.bundle.is_none() {
            return Ok(());
        }

        let events = render_preview(&schedule.events, targets.mode);

        if let Some(path) = &targets.preview {
            write_file(path, &serde_json::to_string_pretty(&events)?)?;
            notify_export_success("Preview JSON", path);
        }

        if let Some(path) = &targets.bundle {
            let bundle = ConversionBundle {
                ok: true,
                filename: file_name_of(&targets.ics),
                ics,
                events,
            };
            write_file(path, &serde_json::to_string_pretty(&bundle)?)?;
            notify_export_success("Bundle JSON", path);
        }

        Ok(())
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "schedule.ics".to_string())
}
