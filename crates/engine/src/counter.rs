// crates/engine/src/counter.rs
use crate::error::{EngineError, Result};
use crate::stats::LineCount;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count `\n` bytes from a reader, chunk by chunk.
///
/// A trailing record without a terminator is not counted, so the total over
/// several files equals the count of their concatenation.
pub fn count_reader<R: BufRead>(reader: &mut R) -> std::io::Result<LineCount> {
    let mut lines = 0;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        lines += bytecount::count(buf, b'\n');
        let len = buf.len();
        reader.consume(len);
    }
    Ok(LineCount::new(lines))
}

/// # Errors
/// Returns [`EngineError::UnreadableFile`] if the file cannot be opened or read.
pub fn try_line_count(path: &Path) -> Result<LineCount> {
    let file = File::open(path).map_err(|e| EngineError::UnreadableFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    count_reader(&mut reader).map_err(|e| EngineError::UnreadableFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Line count of a file, or zero with a warning when it cannot be read.
pub fn line_count(path: &Path) -> LineCount {
    match try_line_count(path) {
        Ok(lines) => lines,
        Err(e) => {
            log::warn!("{e}");
            LineCount::zero()
        }
    }
}
