// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::io::ReadTableError;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Only the average AMPA response is available, not '{channel}'")]
    UnsupportedAmpaChannel { channel: String },

    #[error("Antenna gains are only available for ANITA-1, 2, 3 and 4, not flight {flight}")]
    InvalidAntennaFlight { flight: u8 },

    #[error("Antenna beamwidths are only available for ANITA-3 and 4, not flight {flight}")]
    InvalidBeamwidthFlight { flight: u8 },

    #[error("'{config}' is not a simulated TUFF configuration.\nValid configurations are: {valid}")]
    InvalidTuffConfig { config: String, valid: String },

    #[error("'{name}' has {values} values but its coordinate has {coord}")]
    CoordinateLength {
        name: String,
        values: usize,
        coord: usize,
    },

    #[error("'{name}' is not on the same coordinate as the rest of its dataset")]
    CoordinateMismatch { name: String },

    #[error(transparent)]
    ReadTable(#[from] ReadTableError),
}
