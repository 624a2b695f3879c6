use crate::pipeline::errors::{ReadError, TokenError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A token that could not be turned into an `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    pub token: String,
    /// 1-based line number.
    pub line: usize,
    pub reason: TokenError,
}

/// Everything one read produced, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberBatch {
    pub numbers: Vec<i32>,
    pub skipped: Vec<SkippedToken>,
}

/// Source of numbers for a pipeline run.
pub trait NumberReader {
    fn read(&self, path: &Path) -> Result<NumberBatch, ReadError>;
}

/// Reads whitespace separated integers from a text file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReader;

impl NumberReader for FileReader {
    fn read(&self, path: &Path) -> Result<NumberBatch, ReadError> {
        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        read_numbers(BufReader::new(file), path)
    }
}

/// Tokenizes every line of `input`, warning about and skipping tokens that
/// are not in-range `i32` values.
///
/// Lines are decoded lossily so a stray non-UTF-8 byte only spoils the
/// token it belongs to.
pub fn read_numbers<R: BufRead>(mut input: R, path: &Path) -> Result<NumberBatch, ReadError> {
    let mut batch = NumberBatch::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let n = input.read_until(b'\n', &mut buf).map_err(|source| ReadError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        for token in line.split_whitespace() {
            match token.parse::<i32>() {
                Ok(value) => batch.numbers.push(value),
                Err(err) => {
                    let reason = TokenError::from(&err);
                    warn!(token, line = line_no, "{reason} in file, skipping");
                    batch.skipped.push(SkippedToken {
                        token: token.to_string(),
                        line: line_no,
                        reason,
                    });
                }
            }
        }
    }

    Ok(batch)
}
