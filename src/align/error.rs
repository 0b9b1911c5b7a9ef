// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("Cannot align a candidate of {candidate} samples to a reference of {reference} samples")]
    LengthMismatch { reference: usize, candidate: usize },

    #[error("Cannot align empty waveforms")]
    Empty,

    #[error("An upsample factor of {factor} is too large for waveforms of {num_samples} samples")]
    FactorTooLarge { factor: usize, num_samples: usize },
}
