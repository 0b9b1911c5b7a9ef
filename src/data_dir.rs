// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The layout of the on-disk data tree.
//!
//! ```text
//! {root}/responses/anita{flight}/{digitizer,trigger}/...
//! {root}/responses/anita{3,4}/seavey_beamwidth.dat
//! {root}/responses/anita4/tuff_by_time.dat
//! {root}/calibration/anita{1,3,4}/...
//! ```

use std::path::{Path, PathBuf};

use crate::{responses::ResponseKind, tuff::TUFF_TIMELINE_FILE};

/// The data directory used when one isn't specified.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new<P: Into<PathBuf>>(root: P) -> DataDir {
        DataDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root of every impulse response (and the antenna beamwidths).
    pub fn responses(&self) -> PathBuf {
        self.root.join("responses")
    }

    pub fn calibration(&self) -> PathBuf {
        self.root.join("calibration")
    }

    /// The directory containing one flight's responses of one kind, e.g.
    /// `data/responses/anita4/digitizer`.
    pub fn response_kind_dir(&self, kind: ResponseKind, flight: u8) -> PathBuf {
        self.responses()
            .join(format!("anita{flight}"))
            .join(kind.to_string())
    }

    pub fn tuff_timeline(&self) -> PathBuf {
        self.responses().join("anita4").join(TUFF_TIMELINE_FILE)
    }
}

impl Default for DataDir {
    fn default() -> Self {
        DataDir::new(DEFAULT_DATA_DIR)
    }
}
