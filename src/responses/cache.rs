// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Memoization of loaded responses.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use indexmap::IndexMap;

use super::ResponseKey;
use crate::waveform::Waveform;

/// Storage for responses that have already been loaded. Entries are never
/// invalidated, but an implementation may evict them.
pub trait ResponseCache: Send {
    fn get(&self, key: &ResponseKey) -> Option<Arc<Waveform>>;

    fn insert(&mut self, key: ResponseKey, response: Arc<Waveform>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps everything.
#[derive(Debug, Default)]
pub struct UnboundedCache {
    entries: HashMap<ResponseKey, Arc<Waveform>>,
}

impl ResponseCache for UnboundedCache {
    fn get(&self, key: &ResponseKey) -> Option<Arc<Waveform>> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: ResponseKey, response: Arc<Waveform>) {
        self.entries.insert(key, response);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Holds at most `capacity` responses; when full, the oldest insertion is
/// evicted first.
#[derive(Debug)]
pub struct BoundedCache {
    capacity: NonZeroUsize,
    entries: IndexMap<ResponseKey, Arc<Waveform>>,
}

impl BoundedCache {
    pub fn new(capacity: NonZeroUsize) -> BoundedCache {
        BoundedCache {
            capacity,
            entries: IndexMap::with_capacity(capacity.get()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
}

impl ResponseCache for BoundedCache {
    fn get(&self, key: &ResponseKey) -> Option<Arc<Waveform>> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: ResponseKey, response: Arc<Waveform>) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity.get() {
            if let Some(oldest) = self.entries.keys().next().cloned() {
                self.entries.shift_remove(&oldest);
            }
        }
        self.entries.insert(key, response);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
