// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Descriptions of ANITA/PUEO payloads: which channels, TUFF configurations
//! and phi sectors exist on each flight.

mod anita4;
mod error;

pub use anita4::Anita4;
pub use error::PayloadError;

use strum_macros::{Display, EnumIter, EnumString};

use crate::responses::{ResponseError, ResponseKind, ResponseLibrary, ResponseSet};

lazy_static::lazy_static! {
    static ref ANITA4: Anita4 = Anita4::new();

    // Useful for help texts.
    pub(crate) static ref SUPPORTED_FLIGHTS: String = Anita4::FLIGHT.to_string();
}

/// The polarisation of an antenna feed.
#[derive(Debug, Display, Clone, Copy, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum Polarisation {
    /// Horizontal.
    #[strum(serialize = "H")]
    H,

    /// Vertical.
    #[strum(serialize = "V")]
    V,
}

/// The antenna ring (top, middle or bottom) that a channel belongs to.
#[derive(Debug, Display, Clone, Copy, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum Ring {
    #[strum(serialize = "T")]
    Top,

    #[strum(serialize = "M")]
    Middle,

    #[strum(serialize = "B")]
    Bottom,
}

/// Everything that distinguishes one flight's payload from another's.
///
/// Implementors only describe the payload; the provided methods load the
/// flight's impulse responses through a [`ResponseLibrary`], which memoizes
/// them.
pub trait PayloadDescriptor: Sync {
    /// The flight number.
    fn flight(&self) -> u8;

    /// Every channel identifier, e.g. "01TH".
    fn channels(&self) -> &[String];

    /// Every TUFF configuration the responses were measured with.
    fn configs(&self) -> &[&'static str];

    /// The phi sectors, numbered from 1.
    fn sectors(&self) -> &[u8];

    fn has_channel(&self, channel: &str) -> bool {
        self.channels().iter().any(|c| c == channel)
    }

    fn has_config(&self, config: &str) -> bool {
        self.configs().contains(&config)
    }

    /// Load the digitizer response of every channel in every configuration.
    fn digitizer_responses(
        &self,
        library: &mut ResponseLibrary,
    ) -> Result<ResponseSet, ResponseError> {
        library.get_all_responses(
            ResponseKind::Digitizer,
            self.channels(),
            self.configs(),
            self.flight(),
        )
    }

    /// Load the trigger response of every channel in every configuration.
    fn trigger_responses(&self, library: &mut ResponseLibrary) -> Result<ResponseSet, ResponseError> {
        library.get_all_responses(
            ResponseKind::Trigger,
            self.channels(),
            self.configs(),
            self.flight(),
        )
    }
}

/// Get the payload flown on `flight`.
pub fn payload_for_flight(flight: u8) -> Result<&'static dyn PayloadDescriptor, PayloadError> {
    match flight {
        Anita4::FLIGHT => Ok(&*ANITA4),
        _ => Err(PayloadError::InvalidFlight { flight }),
    }
}
