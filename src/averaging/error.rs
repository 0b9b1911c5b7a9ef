// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::PolSelection;
use crate::{align::AlignError, io::GlobError, waveform::WaveformError};

#[derive(Error, Debug)]
pub enum AverageError {
    #[error("Cannot average zero waveforms")]
    NoCandidates,

    #[error("Candidate {index} has {got} samples, but the reference has {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("Candidate {index} has a sample period of {got} ns, but the reference's is {expected} ns")]
    SamplePeriodMismatch {
        index: usize,
        expected: f64,
        got: f64,
    },

    #[error("A two-pass average needs at least 2 waveforms, but got {got}")]
    TooFewWaveforms { got: usize },

    #[error("Seed index {seed} is out of range for a group of {len} waveforms")]
    SeedOutOfRange { seed: usize, len: usize },

    #[error(transparent)]
    Align(#[from] AlignError),

    #[error(transparent)]
    Waveform(#[from] WaveformError),
}

#[derive(Error, Debug)]
pub enum ChannelGroupError {
    #[error("No {} response files were found for config {config} in {dir}", .pol.description())]
    NoFiles {
        config: String,
        pol: PolSelection,
        dir: String,
    },

    #[error("Every {} response file for config {config} is excluded", .pol.description())]
    AllExcluded { config: String, pol: PolSelection },

    #[error(transparent)]
    Glob(#[from] GlobError),
}
