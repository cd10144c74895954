// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::entries_to_export;
use crate::export::xlsx::export_xlsx;
use crate::models::entry::Entry;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point used by the session.
pub struct ExportLogic;

impl ExportLogic {
    /// Write a snapshot of `entries` to `path`.
    ///
    /// Returns `Ok(false)` when there is nothing to export, in which case no
    /// file is touched. `confirm` is asked before overwriting unless `force`.
    pub fn export(
        entries: &[Entry],
        format: ExportFormat,
        path: &Path,
        force: bool,
        confirm: &mut dyn FnMut(&str) -> AppResult<bool>,
    ) -> AppResult<bool> {
        if entries.is_empty() {
            warning("No entries to export.");
            return Ok(false);
        }

        ensure_writable(path, force, confirm)?;

        let rows = entries_to_export(entries);

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(true)
    }
}
