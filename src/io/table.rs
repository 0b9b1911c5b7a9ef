// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read whitespace-delimited numeric tables.
//!
//! Every calibration file shipped with `panama` is a plain-text table: one row
//! per line, columns separated by any amount of whitespace. Lines starting with
//! '#' are comments and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::prelude::*;
use thiserror::Error;

/// Read a numeric table with exactly `num_cols` columns from `path`. The
/// returned array has one row per data line.
pub(crate) fn read_table(path: &Path, num_cols: usize) -> Result<Array2<f64>, ReadTableError> {
    let file = File::open(path).map_err(|e| ReadTableError::Open {
        file: path.display().to_string(),
        err: e,
    })?;
    read_table_from(BufReader::new(file), num_cols).map_err(|e| e.with_file(path))
}

pub(crate) fn read_table_from<T: BufRead>(
    reader: T,
    num_cols: usize,
) -> Result<Array2<f64>, ReadTableError> {
    let mut values: Vec<f64> = Vec::with_capacity(num_cols * 1024);
    let mut num_rows = 0;
    for (i_line, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut count = 0;
        for float_str in line.split_whitespace() {
            count += 1;
            if count > num_cols {
                continue;
            }
            let float = float_str
                .parse::<f64>()
                .map_err(|_| ReadTableError::ParseFloat {
                    file: None,
                    text: float_str.to_string(),
                    line_num: i_line + 1,
                })?;
            values.push(float);
        }
        if count != num_cols {
            return Err(ReadTableError::BadColumnCount {
                file: None,
                expected: num_cols,
                count,
                line_num: i_line + 1,
            });
        }
        num_rows += 1;
    }

    if num_rows == 0 {
        return Err(ReadTableError::Empty { file: None });
    }

    into_table(values, num_rows, num_cols)
}

/// Arrange row-major `values` into a `num_rows` by `num_cols` table.
fn into_table(
    values: Vec<f64>,
    num_rows: usize,
    num_cols: usize,
) -> Result<Array2<f64>, ReadTableError> {
    Ok(Array2::from_shape_vec((num_rows, num_cols), values)?)
}

#[derive(Error, Debug)]
pub enum ReadTableError {
    #[error("Couldn't open '{file}': {err}")]
    Open { file: String, err: std::io::Error },

    #[error("{}line {line_num}: couldn't parse '{text}' as a float", file_prefix(.file))]
    ParseFloat {
        file: Option<String>,
        text: String,
        line_num: usize,
    },

    #[error("{}line {line_num}: expected {expected} columns, found {count}", file_prefix(.file))]
    BadColumnCount {
        file: Option<String>,
        expected: usize,
        count: usize,
        line_num: usize,
    },

    #[error("{}no data rows were found", file_prefix(.file))]
    Empty { file: Option<String> },

    #[error("Couldn't arrange the table's values into rows: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl ReadTableError {
    /// Attach the name of the file being read to this error.
    pub(crate) fn with_file(self, path: &Path) -> Self {
        let name = Some(path.display().to_string());
        match self {
            ReadTableError::ParseFloat {
                text, line_num, ..
            } => ReadTableError::ParseFloat {
                file: name,
                text,
                line_num,
            },
            ReadTableError::BadColumnCount {
                expected,
                count,
                line_num,
                ..
            } => ReadTableError::BadColumnCount {
                file: name,
                expected,
                count,
                line_num,
            },
            ReadTableError::Empty { .. } => ReadTableError::Empty { file: name },
            e => e,
        }
    }
}

fn file_prefix(file: &Option<String>) -> String {
    match file {
        Some(f) => format!("{f}: "),
        None => String::new(),
    }
}
