//! Reading CSV input and writing rendered output.
//!
//! Rendered documents are lists of lines; they are written with a trailing
//! newline after every line.

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::Path,
};

/// Errors that can occur while reading CSV rows.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("failed to open {path}: {source}")]
    Io {
        /// The file being read.
        path: String,
        /// The underlying error.
        source: io::Error,
    },

    /// The input is not valid CSV.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read every record of a headerless CSV document as a row of fields.
///
/// Fields are separated by `,` and may be quoted with `"`. Quoted fields may
/// span several lines. Rows may have differing numbers of fields. Blank
/// lines are skipped by the reader and never produce an empty row, so they
/// do not appear as `|  |` rows in a rendered table.
///
/// # Errors
///
/// Returns an error if the input is not valid CSV or cannot be read.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .from_reader(reader);

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| Ok(record?.iter().map(String::from).collect()))
        .collect::<Result<Vec<_>, LoadError>>()?;

    tracing::debug!(rows = rows.len(), "read CSV rows");
    Ok(rows)
}

/// Read every record of a headerless CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid CSV.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_rows(file)
}

/// Write lines to a sink, terminating each with a newline.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Write lines to a file, replacing any existing content.
///
/// Parent directories are created automatically if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn save_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines)
}
