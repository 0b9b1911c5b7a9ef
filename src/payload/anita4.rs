// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use itertools::iproduct;
use strum::IntoEnumIterator;

use super::{PayloadDescriptor, Polarisation, Ring};

/// The fourth flight of ANITA.
#[derive(Debug, Clone)]
pub struct Anita4 {
    channels: Vec<String>,
    sectors: Vec<u8>,
}

impl Anita4 {
    pub const FLIGHT: u8 = 4;

    pub const NUM_SECTORS: u8 = 16;

    /// TUFF notch settings \[MHz\]; a 0 means that notch was off.
    pub const CONFIGS: [&'static str; 6] = [
        "260_0_0",
        "260_0_460",
        "260_365_0",
        "260_375_0",
        "260_385_0",
        "260_375_460",
    ];

    pub fn new() -> Anita4 {
        let sectors: Vec<u8> = (1..=Self::NUM_SECTORS).collect();
        // Ordered by sector, then polarisation, then ring.
        let channels = iproduct!(sectors.iter(), Polarisation::iter(), Ring::iter())
            .map(|(phi, pol, ring)| format!("{phi:02}{ring}{pol}"))
            .collect();
        Anita4 { channels, sectors }
    }
}

impl Default for Anita4 {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadDescriptor for Anita4 {
    fn flight(&self) -> u8 {
        Self::FLIGHT
    }

    fn channels(&self) -> &[String] {
        &self.channels
    }

    fn configs(&self) -> &[&'static str] {
        &Self::CONFIGS
    }

    fn sectors(&self) -> &[u8] {
        &self.sectors
    }
}
