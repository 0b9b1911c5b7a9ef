// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Retrieval of measured impulse responses.
//!
//! Responses live under a root directory (usually `data/responses`) laid out
//! as
//!
//! ```text
//! anita{flight}/{kind}/notches_{config}/{channel}.imp
//! anita{flight}/{kind}/averages/notches_{config}.imp
//! ```
//!
//! where the second form is the channel-averaged response. Responses are
//! sampled at 10 GSa/s and stored as effective heights, ready to use. Every
//! response a [`ResponseLibrary`] loads is memoized; the files are never
//! expected to change.

mod cache;
mod error;
mod set;

pub use cache::{BoundedCache, ResponseCache, UnboundedCache};
pub use error::ResponseError;
pub use set::ResponseSet;

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, trace};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    constants::{AVERAGE_CHANNEL, RESPONSE_EXTENSION},
    payload::payload_for_flight,
    waveform::Waveform,
};

lazy_static::lazy_static! {
    // Useful for help texts.
    pub(crate) static ref RESPONSE_KINDS: String = ResponseKind::iter().join(", ");
}

/// The stage of the signal chain a response was measured through.
#[derive(Debug, Display, Clone, Copy, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    #[strum(serialize = "digitizer")]
    Digitizer,

    #[strum(serialize = "trigger")]
    Trigger,
}

impl ResponseKind {
    pub fn parse(value: &str) -> Result<ResponseKind, ResponseError> {
        Self::from_str(&value.to_lowercase()).map_err(|_| ResponseError::InvalidKind {
            value: value.to_string(),
        })
    }
}

/// Identifies a single stored response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResponseKey {
    pub kind: ResponseKind,

    /// A channel identifier, or "average".
    pub channel: String,

    pub config: String,
    pub flight: u8,
}

/// Loads and memoizes impulse responses from a response directory.
pub struct ResponseLibrary {
    root: PathBuf,
    cache: Box<dyn ResponseCache>,
}

impl ResponseLibrary {
    /// A library that keeps every response it has loaded.
    pub fn new<P: Into<PathBuf>>(root: P) -> ResponseLibrary {
        Self::with_cache(root, UnboundedCache::default())
    }

    pub fn with_cache<P: Into<PathBuf>, C: ResponseCache + 'static>(
        root: P,
        cache: C,
    ) -> ResponseLibrary {
        ResponseLibrary {
            root: root.into(),
            cache: Box::new(cache),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The number of responses currently memoized.
    pub fn num_cached(&self) -> usize {
        self.cache.len()
    }

    /// Where the response for these parameters is stored. Nothing is
    /// validated.
    pub fn response_path(
        &self,
        kind: ResponseKind,
        channel: &str,
        config: &str,
        flight: u8,
    ) -> PathBuf {
        let dir = self.root.join(format!("anita{flight}")).join(kind.to_string());
        if channel == AVERAGE_CHANNEL {
            dir.join("averages")
                .join(format!("notches_{config}.{RESPONSE_EXTENSION}"))
        } else {
            dir.join(format!("notches_{config}"))
                .join(format!("{channel}.{RESPONSE_EXTENSION}"))
        }
    }

    /// Get a response. `channel` may be "average" for the channel-averaged
    /// response. The flight, channel and config are checked against the
    /// flight's payload before anything is read.
    pub fn get_response(
        &mut self,
        kind: ResponseKind,
        channel: &str,
        config: &str,
        flight: u8,
    ) -> Result<Arc<Waveform>, ResponseError> {
        let payload = payload_for_flight(flight)?;
        if channel != AVERAGE_CHANNEL && !payload.has_channel(channel) {
            return Err(ResponseError::InvalidChannel {
                channel: channel.to_string(),
                flight,
            });
        }
        if !payload.has_config(config) {
            return Err(ResponseError::InvalidConfig {
                config: config.to_string(),
                flight,
                valid: payload.configs().join(", "),
            });
        }

        let key = ResponseKey {
            kind,
            channel: channel.to_string(),
            config: config.to_string(),
            flight,
        };
        if let Some(response) = self.cache.get(&key) {
            trace!("Using memoized {kind} response for {channel} ({config})");
            return Ok(response);
        }

        let path = self.response_path(kind, channel, config, flight);
        debug!("Loading {kind} response from {}", path.display());
        let response = Waveform::read(&path).map_err(|err| ResponseError::Load {
            file: path.display().to_string(),
            err,
        })?;
        let response = Arc::new(response);
        self.cache.insert(key, Arc::clone(&response));
        Ok(response)
    }

    /// Get the trigger-path impulse response.
    pub fn get_trigger_response(
        &mut self,
        channel: &str,
        config: &str,
        flight: u8,
    ) -> Result<Arc<Waveform>, ResponseError> {
        self.get_response(ResponseKind::Trigger, channel, config, flight)
    }

    /// Get the digitizer-path impulse response.
    pub fn get_digitizer_response(
        &mut self,
        channel: &str,
        config: &str,
        flight: u8,
    ) -> Result<Arc<Waveform>, ResponseError> {
        self.get_response(ResponseKind::Digitizer, channel, config, flight)
    }

    /// Get the response of every channel in every config. If any one of them
    /// fails to load, nothing is returned.
    pub fn get_all_responses<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        kind: ResponseKind,
        channels: &[S],
        configs: &[T],
        flight: u8,
    ) -> Result<ResponseSet, ResponseError> {
        let mut responses = IndexMap::with_capacity(channels.len());
        for channel in channels {
            let channel = channel.as_ref();
            let mut by_config = IndexMap::with_capacity(configs.len());
            for config in configs {
                let config = config.as_ref();
                let response = self.get_response(kind, channel, config, flight)?;
                by_config.insert(config.to_string(), response);
            }
            responses.insert(channel.to_string(), by_config);
        }
        Ok(ResponseSet::new(kind, flight, responses))
    }
}
