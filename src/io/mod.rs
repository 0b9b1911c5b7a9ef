// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for reading the flat files that calibration data lives in.

mod glob;
mod table;

pub(crate) use glob::get_all_matches_from_glob;
pub use glob::GlobError;
pub(crate) use table::read_table;
pub use table::ReadTableError;
