// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuffTimelineError {
    #[error("{time} is before the ANITA-4 flight (which starts at {start})")]
    BeforeFlight { time: i64, start: i64 },

    #[error("{time} is after the ANITA-4 flight (which ends at {end})")]
    AfterFlight { time: i64, end: i64 },

    #[error("Couldn't open TUFF timeline '{file}': {err}")]
    Open { file: String, err: std::io::Error },

    #[error("TUFF timeline line {line_num}: expected 'config unix_time', got '{text}'")]
    BadLine { text: String, line_num: usize },

    #[error("TUFF timeline line {line_num}: '{config}' is not a TUFF configuration")]
    BadConfig { config: String, line_num: usize },

    #[error("TUFF timeline line {line_num}: couldn't parse '{text}' as a unix time")]
    BadTime { text: String, line_num: usize },

    #[error("TUFF timeline line {line_num}: times must not decrease")]
    OutOfOrder { line_num: usize },

    #[error("The TUFF timeline has no entries")]
    Empty,

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
