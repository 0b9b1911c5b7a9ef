// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Calibration-data access and impulse-response averaging for the ANITA/PUEO
balloon payloads.

The library loads pre-measured calibration curves and impulse responses from a
data directory ([`CalibrationLibrary`], [`ResponseLibrary`]), describes each
flight's payload ([`PayloadDescriptor`]), and builds channel-averaged impulse
responses by aligning and averaging many recorded waveforms
([`averaging::two_pass_average`]).
 */

pub mod align;
pub mod averaging;
pub mod calibration;
mod cli;
pub mod constants;
pub mod data_dir;
pub mod io;
pub(crate) mod params;
pub mod payload;
pub mod responses;
pub mod tuff;
pub mod waveform;

use crossbeam_utils::atomic::AtomicCell;

// Re-exports.
pub use align::{Aligner, XcorrAligner};
pub use calibration::{CalibrationLibrary, DataArray, Dataset};
pub use cli::{Panama, PanamaError};
pub use data_dir::DataDir;
pub use payload::{payload_for_flight, Anita4, PayloadDescriptor};
pub use responses::{ResponseKind, ResponseLibrary};
pub use tuff::TuffTimeline;
pub use waveform::Waveform;

/// Are progress bars being drawn? This should only ever be enabled by CLI
/// code.
static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
