// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Averaging of impulse responses.
//!
//! Each channel's recorded impulse response has a slightly different delay,
//! so naive averaging smears the pulse. Instead, every waveform is aligned to
//! a reference before being averaged. The reference itself is built in two
//! passes: a bootstrap average using one member of the group as the
//! reference, then a final average of the whole group against the bootstrap.

mod error;
mod group;

pub use error::{AverageError, ChannelGroupError};
pub use group::{averaged_file_name, ChannelGroup, PolSelection};

use log::{debug, trace};
use ndarray::prelude::*;
use rayon::prelude::*;

use crate::{align::Aligner, waveform::Waveform};

/// Relative tolerance when comparing sample periods.
const SAMPLE_PERIOD_TOLERANCE: f64 = 1e-6;

/// Align each of the `candidates` to `reference` and average them. The result
/// is on the reference's time grid.
///
/// Every candidate must have the same number of samples and sample period as
/// the reference, and there must be at least one candidate.
pub fn average<A, W>(
    reference: &Waveform,
    candidates: &[W],
    aligner: &A,
) -> Result<Waveform, AverageError>
where
    A: Aligner + ?Sized,
    W: AsRef<Waveform> + Sync,
{
    if candidates.is_empty() {
        return Err(AverageError::NoCandidates);
    }
    let ref_period = reference.sample_period();
    for (i, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        if candidate.len() != reference.len() {
            return Err(AverageError::LengthMismatch {
                index: i,
                expected: reference.len(),
                got: candidate.len(),
            });
        }
        if let (Some(expected), Some(got)) = (ref_period, candidate.sample_period()) {
            if (expected - got).abs() > SAMPLE_PERIOD_TOLERANCE * expected.abs() {
                return Err(AverageError::SamplePeriodMismatch {
                    index: i,
                    expected,
                    got,
                });
            }
        }
    }
    trace!(
        "Averaging {} candidates of {} samples",
        candidates.len(),
        reference.len()
    );

    // Alignment is independent per candidate, but the sum is done in order so
    // that the result doesn't depend on thread scheduling.
    let aligned = candidates
        .par_iter()
        .map(|candidate| {
            aligner.align(reference.amplitudes(), candidate.as_ref().amplitudes())
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut sum = Array1::zeros(reference.len());
    for a in &aligned {
        sum += a;
    }
    sum /= candidates.len() as f64;

    Ok(reference.with_amplitudes(sum)?)
}

/// Average a whole group of waveforms in two passes. First, the waveform at
/// `seed` is the reference for averaging every other waveform; then the
/// resulting bootstrap average is the reference for averaging the whole group
/// (including the seed).
pub fn two_pass_average<A, W>(
    group: &[W],
    seed: usize,
    aligner: &A,
) -> Result<Waveform, AverageError>
where
    A: Aligner + ?Sized,
    W: AsRef<Waveform> + Sync,
{
    if group.len() < 2 {
        return Err(AverageError::TooFewWaveforms { got: group.len() });
    }
    let reference: &Waveform = group
        .get(seed)
        .ok_or(AverageError::SeedOutOfRange {
            seed,
            len: group.len(),
        })?
        .as_ref();

    let others: Vec<&Waveform> = group
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != seed)
        .map(|(_, w)| w.as_ref())
        .collect();
    debug!(
        "Bootstrapping a reference from {} waveforms (seed {seed})",
        others.len()
    );
    let bootstrap = average(reference, others.as_slice(), aligner)?;

    let all: Vec<&Waveform> = group.iter().map(|w| w.as_ref()).collect();
    debug!("Re-averaging all {} waveforms against the bootstrap", all.len());
    average(&bootstrap, all.as_slice(), aligner)
}
