// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::RESPONSE_KINDS;
use crate::{payload::PayloadError, waveform::WaveformError};

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Unrecognised response kind '{value}'.\nSupported kinds are: {}", *RESPONSE_KINDS)]
    InvalidKind { value: String },

    #[error("Channel '{channel}' does not exist on ANITA-{flight}")]
    InvalidChannel { channel: String, flight: u8 },

    #[error("'{config}' is not a TUFF configuration of ANITA-{flight}.\nValid configurations are: {valid}")]
    InvalidConfig {
        config: String,
        flight: u8,
        valid: String,
    },

    #[error("Couldn't load response '{file}': {err}")]
    Load { file: String, err: WaveformError },

    #[error(transparent)]
    Payload(#[from] PayloadError),
}
