// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{EntryExport, MINUTES_COL, entry_to_row, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const SHEET_NAME: &str = "Entries";

/// Build the workbook in memory and return the file bytes (the download buffer).
pub fn to_xlsx_buffer(entries: &[EntryExport]) -> AppResult<Vec<u8>> {
    let mut workbook = build_workbook(entries)?;
    workbook.save_to_buffer().map_err(to_export_error)
}

/// XLSX export con header colorato, righe a bande e larghezza colonne automatica.
pub(crate) fn export_xlsx(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let buffer = to_xlsx_buffer(entries)?;
    fs::write(path, buffer).map_err(|e| write_error(path, e))?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn build_workbook(entries: &[EntryExport]) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x3A7D44))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xE8F5E9);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows, in store order
    // ---------------------------
    for (row_index, entry) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let text_fmt = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let num_fmt = text_fmt.clone().set_align(FormatAlign::Right);

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            if col == MINUTES_COL {
                worksheet
                    .write_with_format(row, col as u16, entry.screen_free_minutes as f64, &num_fmt)
                    .map_err(to_export_error)?;
            } else {
                worksheet
                    .write_with_format(row, col as u16, value.as_str(), &text_fmt)
                    .map_err(to_export_error)?;
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(workbook)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

/// Failure to write the export file; reported like any other export error.
pub(crate) fn write_error<E: std::fmt::Display>(path: &Path, e: E) -> AppError {
    AppError::Export(format!("cannot write '{}': {e}", path.display()))
}
