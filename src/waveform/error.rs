// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::io::ReadTableError;

#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("A waveform needs as many times as amplitudes, but got {times} times and {amplitudes} amplitudes")]
    LengthMismatch { times: usize, amplitudes: usize },

    #[error("A waveform must have at least one sample")]
    Empty,

    #[error(transparent)]
    ReadTable(#[from] ReadTableError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
