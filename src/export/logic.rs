use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::{write_bookings_csv, write_events_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::models::booking::Booking;
use crate::models::event::Event;
use crate::ui::messages::warning;
use std::path::Path;

/// What gets written.
pub enum ExportTarget<'a> {
    Events(&'a [Event]),
    Bookings(&'a [Booking]),
}

impl ExportTarget<'_> {
    fn len(&self) -> usize {
        match self {
            ExportTarget::Events(e) => e.len(),
            ExportTarget::Bookings(b) => b.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn label(&self) -> &'static str {
        match self {
            ExportTarget::Events(_) => "Events",
            ExportTarget::Bookings(_) => "Bookings",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Returns the number of rows written (0 when there was nothing to
    /// export and no file was created).
    pub fn export(
        target: ExportTarget<'_>,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if path.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {}",
                path.display()
            )));
        }

        if target.is_empty() {
            warning(format!("No {} to export.", target.label().to_lowercase()));
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match (&target, format) {
            (ExportTarget::Events(events), ExportFormat::Csv) => write_events_csv(path, events)?,
            (ExportTarget::Events(events), ExportFormat::Json) => write_json(path, *events)?,
            (ExportTarget::Bookings(bookings), ExportFormat::Csv) => {
                write_bookings_csv(path, bookings)?
            }
            (ExportTarget::Bookings(bookings), ExportFormat::Json) => write_json(path, *bookings)?,
        }

        notify_export_success(target.label(), target.len(), path);
        Ok(target.len())
    }
}
