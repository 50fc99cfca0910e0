//! Export of the derived day summaries to CSV, JSON, and Excel.
//!
//! The export pipeline reuses the exact grouping/aggregation/holiday path
//! the dashboard renders from, so the file on disk always matches what the
//! terminal showed. Summaries arrive pre-derived; this module only handles
//! formats and files.
//!
//! ## Supported Formats
//!
//! - **CSV**: plain table for spreadsheets and scripts
//! - **JSON**: pretty-printed array of the summary objects
//! - **Excel**: one worksheet with a formatted header row
//!
//! An empty summary list produces a valid but bodyless document: headers
//! only for CSV/Excel, `[]` for JSON.

use crate::libs::messages::Message;
use crate::libs::summary::DaySummary;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers shared by the CSV and Excel writers.
const HEADERS: [&str; 6] = ["Date", "Sign In", "Sign Out", "Duration", "Status", "Holiday"];

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for the given format.
    ///
    /// Without an explicit output path a timestamped default is generated,
    /// e.g. `rollcall_export_20250825_143022.csv`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("rollcall_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// The resolved output destination.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the summaries in the configured format and confirms the
    /// output location.
    pub fn export(&self, summaries: &[DaySummary]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(summaries)?,
            ExportFormat::Json => self.export_json(summaries)?,
            ExportFormat::Excel => self.export_excel(summaries)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, summaries: &[DaySummary]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;

        for summary in summaries {
            wtr.write_record(&[
                summary.date.clone(),
                Self::presence(summary.sign_in).to_string(),
                Self::presence(summary.sign_out).to_string(),
                summary.duration.clone(),
                summary.status.to_string(),
                Self::holiday_cell(summary),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, summaries: &[DaySummary]) -> Result<()> {
        let json = serde_json::to_string_pretty(summaries)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, summaries: &[DaySummary]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, summary) in summaries.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &summary.date)?;
            worksheet.write_string(row, 1, Self::presence(summary.sign_in))?;
            worksheet.write_string(row, 2, Self::presence(summary.sign_out))?;
            worksheet.write_string(row, 3, &summary.duration)?;
            worksheet.write_string(row, 4, summary.status.as_str())?;
            worksheet.write_string(row, 5, &Self::holiday_cell(summary))?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn presence(present: bool) -> &'static str {
        if present {
            "yes"
        } else {
            "-"
        }
    }

    /// Holiday column value: the skip label when the message carried one,
    /// the bare marker `yes` when it did not, empty for normal days.
    fn holiday_cell(summary: &DaySummary) -> String {
        match &summary.holiday {
            Some(holiday) => holiday.label.clone().unwrap_or_else(|| "yes".to_string()),
            None => String::new(),
        }
    }
}
