// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Uniformly-sampled time-domain waveforms, and the two-column text format
//! they are stored in.
//!
//! A waveform file looks like this:
//!
//! ```text
//! # Time (ns) | Amplitude (V/ns)
//! # time_ns amplitude
//! 0.00 0.00012345
//! 0.10 -0.00023456
//! ...
//! ```

mod error;
#[cfg(test)]
mod tests;

pub use error::WaveformError;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::trace;
use ndarray::prelude::*;

use crate::{
    constants::{AMPLITUDE_DECIMALS, TIME_DECIMALS, WAVEFORM_HEADER},
    io::read_table,
};

/// An ordered sequence of (time, amplitude) samples.
///
/// There is always at least one sample, and `times` and `amplitudes` always
/// have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// Sample times \[ns\].
    times: Array1<f64>,

    /// Sample amplitudes. Impulse responses are stored as effective heights,
    /// so the units depend on the file.
    amplitudes: Array1<f64>,
}

impl Waveform {
    pub fn new(times: Array1<f64>, amplitudes: Array1<f64>) -> Result<Waveform, WaveformError> {
        if times.len() != amplitudes.len() {
            return Err(WaveformError::LengthMismatch {
                times: times.len(),
                amplitudes: amplitudes.len(),
            });
        }
        if times.is_empty() {
            return Err(WaveformError::Empty);
        }
        Ok(Waveform { times, amplitudes })
    }

    /// Make a new waveform on this waveform's time grid. `amplitudes` must
    /// have the same length as this waveform.
    pub fn with_amplitudes(&self, amplitudes: Array1<f64>) -> Result<Waveform, WaveformError> {
        Waveform::new(self.times.clone(), amplitudes)
    }

    pub fn times(&self) -> ArrayView1<f64> {
        self.times.view()
    }

    pub fn amplitudes(&self) -> ArrayView1<f64> {
        self.amplitudes.view()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; a waveform has at least one sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The time between the first two samples \[ns\]. `None` if there's only
    /// one sample.
    pub fn sample_period(&self) -> Option<f64> {
        if self.len() > 1 {
            Some(self.times[1] - self.times[0])
        } else {
            None
        }
    }

    /// Read a waveform from a two-column text file.
    pub fn read(path: &Path) -> Result<Waveform, WaveformError> {
        trace!("Reading waveform from {}", path.display());
        let table = read_table(path, 2)?;
        let times = table.column(0).to_owned();
        let amplitudes = table.column(1).to_owned();
        Waveform::new(times, amplitudes)
    }

    /// Write this waveform as a two-column text file, preceded by the fixed
    /// units header. Times are written with 2 decimal places and amplitudes
    /// with 8.
    pub fn write(&self, path: &Path) -> Result<(), WaveformError> {
        trace!("Writing waveform to {}", path.display());
        let mut f = BufWriter::new(File::create(path)?);
        self.write_to(&mut f)?;
        f.flush()?;
        Ok(())
    }

    pub(crate) fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        for line in WAVEFORM_HEADER {
            writeln!(w, "# {line}")?;
        }
        for (t, a) in self.times.iter().zip(self.amplitudes.iter()) {
            writeln!(w, "{t:.TIME_DECIMALS$} {a:.AMPLITUDE_DECIMALS$}")?;
        }
        Ok(())
    }
}

impl AsRef<Waveform> for Waveform {
    fn as_ref(&self) -> &Waveform {
        self
    }
}
