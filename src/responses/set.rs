// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use indexmap::IndexMap;

use super::ResponseKind;
use crate::waveform::Waveform;

/// Responses for many channels and configs, indexed by channel and then by
/// config. Both levels keep the order they were requested in.
#[derive(Debug, Clone)]
pub struct ResponseSet {
    pub kind: ResponseKind,
    pub flight: u8,
    responses: IndexMap<String, IndexMap<String, Arc<Waveform>>>,
}

impl ResponseSet {
    pub(super) fn new(
        kind: ResponseKind,
        flight: u8,
        responses: IndexMap<String, IndexMap<String, Arc<Waveform>>>,
    ) -> ResponseSet {
        ResponseSet {
            kind,
            flight,
            responses,
        }
    }

    pub fn get(&self, channel: &str, config: &str) -> Option<&Arc<Waveform>> {
        self.responses.get(channel)?.get(config)
    }

    /// All responses of a single channel, by config.
    pub fn channel(&self, channel: &str) -> Option<&IndexMap<String, Arc<Waveform>>> {
        self.responses.get(channel)
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.responses.keys().map(|c| c.as_str())
    }

    /// Every channel has the same configs.
    pub fn configs(&self) -> impl Iterator<Item = &str> {
        self.responses
            .values()
            .next()
            .into_iter()
            .flat_map(|by_config| by_config.keys().map(|c| c.as_str()))
    }

    /// The total number of responses.
    pub fn len(&self) -> usize {
        self.responses.values().map(|by_config| by_config.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
