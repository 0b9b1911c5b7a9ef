// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all panama-related errors. This should be the *only* error
//! enum that is publicly visible from the binary's point of view.

use thiserror::Error;

use super::{make_averages::MakeAveragesArgsError, response::ResponseArgsError};
use crate::{
    averaging::ChannelGroupError,
    params::MakeAveragesError,
    payload::PayloadError,
    responses::ResponseError,
    tuff::TuffTimelineError,
};

/// The *only* publicly visible error from the `panama` binary. Each error
/// message carries a hint about where to look, unless it's "generic".
#[derive(Error, Debug)]
pub enum PanamaError {
    /// An error related to make-averages.
    #[error("{0}\n\nAverages are made from '<digitizer-dir>/notches_<config>/<channel>.imp' files.")]
    MakeAverages(String),

    /// An error related to finding or reading impulse responses.
    #[error("{0}\n\nResponses are read from '<data-dir>/responses/anita<flight>/<kind>/'.")]
    Response(String),

    /// An error related to payload metadata (flights, channels, configs).
    #[error("{0}")]
    Payload(String),

    /// An error related to the TUFF timeline.
    #[error("{0}\n\nThe timeline is read from '<data-dir>/responses/anita4/tuff_by_time.dat'.")]
    Tuff(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are toml or json files whose keys match the long CLI argument names (with underscores).")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<MakeAveragesArgsError> for PanamaError {
    fn from(e: MakeAveragesArgsError) -> Self {
        Self::MakeAverages(e.to_string())
    }
}

impl From<MakeAveragesError> for PanamaError {
    fn from(e: MakeAveragesError) -> Self {
        let s = e.to_string();
        match e {
            MakeAveragesError::ChannelGroup(e) => Self::from(e),
            MakeAveragesError::Load { .. }
            | MakeAveragesError::Average { .. }
            | MakeAveragesError::Write { .. } => Self::MakeAverages(s),
            MakeAveragesError::CreateDir { .. } => Self::Generic(s),
        }
    }
}

impl From<ChannelGroupError> for PanamaError {
    fn from(e: ChannelGroupError) -> Self {
        let s = e.to_string();
        match e {
            ChannelGroupError::NoFiles { .. } | ChannelGroupError::AllExcluded { .. } => {
                Self::MakeAverages(s)
            }
            ChannelGroupError::Glob(_) => Self::Generic(s),
        }
    }
}

impl From<ResponseArgsError> for PanamaError {
    fn from(e: ResponseArgsError) -> Self {
        match e {
            ResponseArgsError::Response(e) => Self::from(e),
            ResponseArgsError::Write { .. } => Self::Generic(e.to_string()),
        }
    }
}

impl From<ResponseError> for PanamaError {
    fn from(e: ResponseError) -> Self {
        let s = e.to_string();
        match e {
            ResponseError::Payload(e) => Self::from(e),
            ResponseError::InvalidKind { .. }
            | ResponseError::InvalidChannel { .. }
            | ResponseError::InvalidConfig { .. } => Self::Payload(s),
            ResponseError::Load { .. } => Self::Response(s),
        }
    }
}

impl From<PayloadError> for PanamaError {
    fn from(e: PayloadError) -> Self {
        Self::Payload(e.to_string())
    }
}

impl From<TuffTimelineError> for PanamaError {
    fn from(e: TuffTimelineError) -> Self {
        Self::Tuff(e.to_string())
    }
}

impl From<std::io::Error> for PanamaError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
