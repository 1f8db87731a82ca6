use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use aircraft_model::Row;

use crate::encoding::TextEncoding;
use crate::error::{IngestError, Result};

/// Read every record of a headerless CSV file as raw string rows.
///
/// The whole file is decoded with `encoding` first. No header row is
/// skipped and records may have differing field counts. Blank lines come
/// back as rows with no fields.
pub fn read_rows(path: &Path, encoding: TextEncoding) -> Result<Vec<Row>> {
    let bytes = fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let text = encoding.decode(&bytes, path)?;
    let text = text.as_bytes();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut blank = 0;
    let mut consumed = 0;
    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let end = if more {
            usize::try_from(reader.position().byte())
                .map_or(text.len(), |end| end.min(text.len()))
        } else {
            text.len()
        };

        // The csv reader skips empty lines; recover them from the bytes it
        // consumed ahead of this record.
        let after_cr = consumed > 0 && text[consumed - 1] == b'\r';
        let skipped = leading_line_breaks(&text[consumed..end], after_cr);
        rows.extend(std::iter::repeat_with(Row::new).take(skipped));
        blank += skipped;

        if !more {
            break;
        }
        rows.push(record.iter().map(str::to_string).collect());
        consumed = end;
    }

    debug!(
        path = %path.display(),
        encoding = encoding.name(),
        rows = rows.len(),
        blank,
        "read csv rows"
    );
    Ok(rows)
}

/// Count line breaks at the start of `span`, with CRLF as one break.
///
/// `after_cr` is set when the previous record ended on `\r`, so a leading
/// `\n` completes that terminator instead of opening an empty line.
fn leading_line_breaks(span: &[u8], after_cr: bool) -> usize {
    let mut count = 0;
    let mut pending_lf = after_cr;
    for &byte in span.iter().take_while(|byte| matches!(byte, b'\r' | b'\n')) {
        match byte {
            b'\n' if pending_lf => pending_lf = false,
            b'\r' => {
                count += 1;
                pending_lf = true;
            }
            _ => count += 1,
        }
    }
    count
}
