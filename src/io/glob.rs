// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Functions to glob files.

use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use thiserror::Error;

/// Given a directory and a file-name glob pattern inside it, get all of the
/// matches from the filesystem. Any glob metacharacters in `dir` are escaped,
/// so only `file_pattern` is treated as a pattern. Matches are sorted.
pub(crate) fn get_all_matches_from_glob(
    dir: &Path,
    file_pattern: &str,
) -> Result<Vec<PathBuf>, GlobError> {
    let dir = dir.to_str().ok_or_else(|| GlobError::NonUtf8Dir {
        dir: dir.display().to_string(),
    })?;
    let g = format!("{}/{file_pattern}", Pattern::escape(dir));

    let mut entries = vec![];
    for entry in glob(&g)? {
        match entry {
            Ok(e) => entries.push(e),
            Err(e) => return Err(GlobError::GlobCrate(e)),
        }
    }
    entries.sort();
    Ok(entries)
}

#[derive(Error, Debug)]
/// Error type associated with glob helper functions.
pub enum GlobError {
    #[error("Cannot glob inside '{dir}'; it isn't valid UTF-8")]
    NonUtf8Dir { dir: String },

    #[error(transparent)]
    GlobCrate(#[from] glob::GlobError),

    #[error(transparent)]
    PatternError(#[from] glob::PatternError),
}
