//! CSV report writer
//!
//! Rows are laid out as an all-Utf8 Arrow `RecordBatch` and handed to the
//! Arrow CSV writer, which quotes fields containing delimiters, quotes or
//! newlines.

use super::builder::ReportRow;
use crate::error::{Result, ResultExt};
use crate::types::REPORT_HEADERS;
use arrow::array::{ArrayRef, StringArray};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Report schema: one non-null Utf8 column per header
fn report_schema() -> Schema {
    Schema::new(
        REPORT_HEADERS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, false))
            .collect::<Vec<_>>(),
    )
}

/// Convert rows to a RecordBatch
pub fn rows_to_batch(rows: &[ReportRow]) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = (0..REPORT_HEADERS.len())
        .map(|col| {
            let values: StringArray = rows.iter().map(|row| Some(row.fields()[col])).collect();
            Arc::new(values) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(report_schema()), columns)?;
    Ok(batch)
}

/// Write header plus rows to `sink`, returning it
pub fn write_csv<W: Write>(rows: &[ReportRow], sink: W) -> Result<W> {
    let batch = rows_to_batch(rows)?;
    let mut writer = WriterBuilder::new().with_header(true).build(sink);
    writer.write(&batch)?;
    Ok(writer.into_inner())
}

/// Write the report to `path`, replacing any existing file
pub fn write_report(rows: &[ReportRow], path: &Path) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut file = write_csv(rows, file)?;
    file.flush()?;
    Ok(rows.len())
}
