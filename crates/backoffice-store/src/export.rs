//! CSV export.
//!
//! Output is UTF-8 and comma-delimited with a header row taken from the
//! record's column list. A field containing a comma, a double quote or a
//! line break is quoted, with embedded quotes doubled.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use backoffice_model::{Domain, Record};
use chrono::{DateTime, Utc};

use crate::error::Result;

/// Write `records` as CSV, returning the number of data rows.
pub fn write_csv<'a, T, I, W>(records: I, writer: W) -> Result<usize>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    csv.write_record(T::COLUMNS)?;
    let mut rows = 0;
    for record in records {
        csv.write_record(record.csv_row())?;
        rows += 1;
    }
    csv.flush()?;
    Ok(rows)
}

/// Write `records` to a new file at `path`.
pub fn export_to_path<'a, T, I>(records: I, path: &Path) -> Result<usize>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = BufWriter::new(File::create(path)?);
    let rows = write_csv(records, file)?;
    tracing::info!(path = %path.display(), rows, "exported CSV");
    Ok(rows)
}

/// Default file name, e.g. `blog_posts-2024-01-05.csv`.
pub fn file_name(domain: Domain, now: DateTime<Utc>) -> String {
    format!("{}-{}.csv", domain.as_str(), now.format("%Y-%m-%d"))
}
