//! Spreadsheet importer for event tracks.
//!
//! Every sheet of a workbook becomes one [`EventsList`] named after the
//! sheet. Row 0 is a header and is skipped. Each following row holds, by
//! position:
//!
//! | column | content                                  |
//! |--------|------------------------------------------|
//! | 0      | start, `YYYY-MM-DD HH:MM:SS`             |
//! | 1      | end, same format                         |
//! | 2      | event name                               |
//! | 3      | color name, empty or missing means black |
//!
//! Import is all-or-nothing: the first invalid cell aborts the whole import.

use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::NaiveDateTime;
use thiserror::Error;

use gantt_core::{ColorTable, Event, EventsList, TIME_FORMAT, TimestampError, parse_timestamp};

pub const START: usize = 0;
pub const END: usize = 1;
pub const NAME: usize = 2;
pub const COLOR: usize = 3;

/// Number of positional columns read from each row.
const COLUMNS: usize = 4;

/// Import errors.
///
/// Row and cell indices are 0-based sheet coordinates; the header is row 0.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The workbook could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    /// A sheet of the workbook could not be read.
    #[error("failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    /// A start or end cell does not match [`TIME_FORMAT`].
    #[error(
        "invalid value at sheet '{sheet}', row '{row}' and cell '{cell}', got '{value}': {source}"
    )]
    TimestampParse {
        sheet: String,
        row: usize,
        cell: usize,
        value: String,
        #[source]
        source: TimestampError,
    },
    /// A color cell names a color missing from the color table.
    #[error(
        "invalid value at sheet '{sheet}', row '{row}' and cell '{cell}', got '{value}': color not handled"
    )]
    UnrecognizedColor {
        sheet: String,
        row: usize,
        cell: usize,
        value: String,
    },
}

/// Imports every sheet of the workbook at `path`.
///
/// The format is detected from the file extension (`xlsx`, `xlsm`, `xls`,
/// `ods`, ...).
pub fn import_workbook(path: &Path, colors: &ColorTable) -> Result<Vec<EventsList>, ImportError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tracks = Vec::new();
    for sheet in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|source| ImportError::Sheet {
                sheet: sheet.clone(),
                source,
            })?;
        let rows = sheet_rows(&range);
        let track = import_sheet(&sheet, rows, colors)?;
        tracing::debug!(sheet = %track.name, events = track.len(), "imported sheet");
        tracks.push(track);
    }

    tracing::info!(
        path = %path.display(),
        tracks = tracks.len(),
        events = tracks.iter().map(EventsList::len).sum::<usize>(),
        "imported workbook"
    );
    Ok(tracks)
}

/// Builds one track from rows of cell text, starting at sheet row 0.
pub fn import_sheet<I, R>(
    sheet: &str,
    rows: I,
    colors: &ColorTable,
) -> Result<EventsList, ImportError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut track = EventsList::new(sheet);
    for (row, cells) in rows.into_iter().enumerate().skip(1) {
        if let Some(event) = parse_row(sheet, row, cells.as_ref(), colors)? {
            track.add_event(event);
        }
    }
    Ok(track)
}

/// Parses one data row; `Ok(None)` for a row without any content.
pub fn parse_row(
    sheet: &str,
    row: usize,
    cells: &[String],
    colors: &ColorTable,
) -> Result<Option<Event>, ImportError> {
    let cell = |idx: usize| cells.get(idx).map_or("", String::as_str);

    if (0..COLUMNS).all(|idx| cell(idx).is_empty()) {
        tracing::debug!(sheet, row, "skipping blank row");
        return Ok(None);
    }

    let timestamp = |idx: usize| {
        let value = cell(idx);
        parse_timestamp(value).map_err(|source| ImportError::TimestampParse {
            sheet: sheet.to_string(),
            row,
            cell: idx,
            value: value.to_string(),
            source,
        })
    };

    let start = timestamp(START)?;
    let end = timestamp(END)?;
    let color = colors
        .resolve(cell(COLOR))
        .map_err(|err| ImportError::UnrecognizedColor {
            sheet: sheet.to_string(),
            row,
            cell: COLOR,
            value: err.token,
        })?;

    Ok(Some(Event::new(start, end, cell(NAME), color)))
}

/// Text of the first four columns of every row, from sheet row 0.
///
/// Cells are addressed by absolute position so a sheet whose used area does
/// not start at `A1` keeps its column meaning.
fn sheet_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((last_row, _)) = range.end() else {
        return Vec::new();
    };
    (0..=last_row)
        .map(|row| {
            (0..COLUMNS)
                .map(|col| {
                    u32::try_from(col)
                        .ok()
                        .and_then(|col| range.get_value((row, col)))
                        .map_or_else(String::new, cell_text)
                })
                .collect()
        })
        .collect()
}

/// Display text of a cell; native and ISO 8601 date-times use [`TIME_FORMAT`].
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) | Data::DurationIso(text) => text.clone(),
        Data::DateTimeIso(text) => text.parse::<NaiveDateTime>().map_or_else(
            |_| text.clone(),
            |dt| dt.format(TIME_FORMAT).to_string(),
        ),
        Data::DateTime(datetime) => datetime.as_datetime().map_or_else(
            || cell.to_string(),
            |dt| dt.format(TIME_FORMAT).to_string(),
        ),
        other => other.to_string(),
    }
}
