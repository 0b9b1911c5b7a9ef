// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The TUFF notch-filter configuration in use at any time during the ANITA-4
//! flight.
//!
//! The timeline file has one row per configuration change:
//!
//! ```text
//! # config unix_time
//! 260_0_0 1480707643
//! 260_375_0 1480720000
//! ```
//!
//! A configuration string lists the notch frequencies in MHz separated by
//! underscores; a 0 means that notch was disabled.

mod error;

pub use error::TuffTimelineError;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::trace;
use regex::Regex;
use vec1::Vec1;

lazy_static::lazy_static! {
    static ref CONFIG_REGEX: Regex = Regex::new(r"^\d+_\d+_\d+$").unwrap();
}

/// The name of the timeline file inside a flight's response directory.
pub const TUFF_TIMELINE_FILE: &str = "tuff_by_time.dat";

/// A configuration and the time it became active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuffChange {
    pub config: String,
    pub unix_time: i64,
}

/// Every TUFF configuration change, in time order.
#[derive(Debug, Clone)]
pub struct TuffTimeline {
    changes: Vec1<TuffChange>,
}

impl TuffTimeline {
    pub fn read(path: &Path) -> Result<TuffTimeline, TuffTimelineError> {
        trace!("Reading TUFF timeline from {}", path.display());
        let file = File::open(path).map_err(|err| TuffTimelineError::Open {
            file: path.display().to_string(),
            err,
        })?;
        Self::read_from(BufReader::new(file))
    }

    pub(crate) fn read_from<T: BufRead>(reader: T) -> Result<TuffTimeline, TuffTimelineError> {
        let mut changes: Vec<TuffChange> = vec![];
        for (i_line, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_num = i_line + 1;

            let mut fields = line.split_whitespace();
            let (config, time) = match (fields.next(), fields.next(), fields.next()) {
                (Some(config), Some(time), None) => (config, time),
                _ => {
                    return Err(TuffTimelineError::BadLine {
                        text: line.to_string(),
                        line_num,
                    })
                }
            };
            if !CONFIG_REGEX.is_match(config) {
                return Err(TuffTimelineError::BadConfig {
                    config: config.to_string(),
                    line_num,
                });
            }
            let unix_time = time
                .parse::<i64>()
                .map_err(|_| TuffTimelineError::BadTime {
                    text: time.to_string(),
                    line_num,
                })?;
            if let Some(last) = changes.last() {
                if unix_time < last.unix_time {
                    return Err(TuffTimelineError::OutOfOrder { line_num });
                }
            }

            changes.push(TuffChange {
                config: config.to_string(),
                unix_time,
            });
        }

        let changes = Vec1::try_from_vec(changes).map_err(|_| TuffTimelineError::Empty)?;
        Ok(TuffTimeline { changes })
    }

    pub fn changes(&self) -> &[TuffChange] {
        self.changes.as_slice()
    }

    /// The first time covered by the timeline.
    pub fn start(&self) -> i64 {
        self.changes.first().unix_time
    }

    /// The last time covered by the timeline.
    pub fn end(&self) -> i64 {
        self.changes.last().unix_time
    }

    /// Get the configuration active at `unix_time`, i.e. the configuration
    /// of the last change strictly before it. A change takes effect just
    /// after its timestamp; at the start of the flight the first config is
    /// active. The last row only marks the end of the flight.
    pub fn config_at(&self, unix_time: i64) -> Result<&str, TuffTimelineError> {
        if unix_time < self.start() {
            return Err(TuffTimelineError::BeforeFlight {
                time: unix_time,
                start: self.start(),
            });
        }
        if unix_time > self.end() {
            return Err(TuffTimelineError::AfterFlight {
                time: unix_time,
                end: self.end(),
            });
        }

        let num_started = self
            .changes
            .partition_point(|change| change.unix_time < unix_time);
        Ok(&self.changes[num_started.saturating_sub(1)].config)
    }
}
