// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Time-alignment of waveforms by cross-correlation.
//!
//! The [`XcorrAligner`] finds the delay that maximises the cross-correlation
//! between a reference and a candidate to a precision of `1 / factor`
//! samples, then shifts the candidate by that delay onto the reference's
//! sample grid. Everything happens in the frequency domain:
//!
//! 1. Both signals are zero-padded to twice their length (so that correlation
//!    and shifting are linear, not circular) and Fourier transformed.
//! 2. The cross-power spectrum is zero-padded by `factor` and inverse
//!    transformed, giving the cross-correlation band-limited-interpolated onto
//!    a grid `factor` times finer than the input.
//! 3. The candidate's spectrum is multiplied by a linear phase ramp for the
//!    (possibly fractional) delay at the correlation peak.

mod error;

pub use error::AlignError;

use std::f64::consts::{PI, TAU};
use std::num::NonZeroUsize;

use log::trace;
use ndarray::prelude::*;
use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::constants::{DEFAULT_UPSAMPLE_FACTOR, MAX_UPSAMPLE_FACTOR};

/// Something that can align a candidate waveform to a reference waveform.
///
/// Implementors must return an array with the same length as `reference`,
/// representing `candidate` shifted onto the reference's sample grid.
pub trait Aligner: Sync {
    fn align(
        &self,
        reference: ArrayView1<f64>,
        candidate: ArrayView1<f64>,
    ) -> Result<Array1<f64>, AlignError>;
}

/// Aligns waveforms with an oversampled FFT cross-correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XcorrAligner {
    factor: NonZeroUsize,
}

impl Default for XcorrAligner {
    fn default() -> Self {
        // DEFAULT_UPSAMPLE_FACTOR is non-zero.
        Self::new(NonZeroUsize::new(DEFAULT_UPSAMPLE_FACTOR).unwrap_or(NonZeroUsize::MIN))
    }
}

impl XcorrAligner {
    /// Create a new aligner. Delays are found to a precision of `1 / factor`
    /// samples. Aligning fails if `factor` exceeds [`MAX_UPSAMPLE_FACTOR`].
    pub fn new(factor: NonZeroUsize) -> XcorrAligner {
        XcorrAligner { factor }
    }

    pub fn factor(&self) -> usize {
        self.factor.get()
    }

    /// Get the delay \[samples\] that `candidate` must be shifted by to best
    /// match `reference`. A positive delay means the candidate is early.
    pub fn find_delay(
        &self,
        reference: ArrayView1<f64>,
        candidate: ArrayView1<f64>,
    ) -> Result<f64, AlignError> {
        let n = check_lengths(reference, candidate)?;
        let mut planner = FftPlanner::new();
        self.find_delay_inner(&mut planner, reference, candidate, n)
    }

    fn find_delay_inner(
        &self,
        planner: &mut FftPlanner<f64>,
        reference: ArrayView1<f64>,
        candidate: ArrayView1<f64>,
        n: usize,
    ) -> Result<f64, AlignError> {
        let factor = self.factor.get();
        let too_large = || AlignError::FactorTooLarge {
            factor,
            num_samples: n,
        };
        if factor > MAX_UPSAMPLE_FACTOR {
            return Err(too_large());
        }
        let padded_len = n.checked_mul(2).ok_or_else(too_large)?;
        let upsampled_len = padded_len.checked_mul(factor).ok_or_else(too_large)?;

        let ref_spectrum = spectrum(planner, reference, padded_len);
        let cand_spectrum = spectrum(planner, candidate, padded_len);
        let cross_power: Vec<Complex64> = ref_spectrum
            .iter()
            .zip(cand_spectrum.iter())
            .map(|(r, c)| r * c.conj())
            .collect();

        let mut xcorr = zero_pad_spectrum(&cross_power, upsampled_len);
        planner.plan_fft_inverse(upsampled_len).process(&mut xcorr);

        // Use the first maximum if there are several.
        let (i_peak, _) = xcorr.iter().enumerate().fold(
            (0, f64::NEG_INFINITY),
            |(i_best, best), (i, c)| {
                if c.re > best {
                    (i, c.re)
                } else {
                    (i_best, best)
                }
            },
        );
        // Indices past the midpoint are negative lags.
        let lag = if i_peak > upsampled_len / 2 {
            i_peak as f64 - upsampled_len as f64
        } else {
            i_peak as f64
        };
        Ok(lag / factor as f64)
    }
}

impl Aligner for XcorrAligner {
    fn align(
        &self,
        reference: ArrayView1<f64>,
        candidate: ArrayView1<f64>,
    ) -> Result<Array1<f64>, AlignError> {
        let n = check_lengths(reference, candidate)?;
        let mut planner = FftPlanner::new();
        let delay = self.find_delay_inner(&mut planner, reference, candidate, n)?;
        trace!("Aligning candidate with a delay of {delay} samples");
        Ok(delay_signal(&mut planner, candidate, delay))
    }
}

fn check_lengths(
    reference: ArrayView1<f64>,
    candidate: ArrayView1<f64>,
) -> Result<usize, AlignError> {
    if reference.len() != candidate.len() {
        return Err(AlignError::LengthMismatch {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }
    if reference.is_empty() {
        return Err(AlignError::Empty);
    }
    Ok(reference.len())
}

/// Zero-pad a real signal to `len` and get its (unnormalised) spectrum.
fn spectrum(
    planner: &mut FftPlanner<f64>,
    signal: ArrayView1<f64>,
    len: usize,
) -> Vec<Complex64> {
    let mut buffer = vec![Complex64::default(); len];
    for (b, &s) in buffer.iter_mut().zip(signal.iter()) {
        b.re = s;
    }
    planner.plan_fft_forward(len).process(&mut buffer);
    buffer
}

/// Insert zeros into the middle (the highest frequencies) of a spectrum so
/// that its inverse transform is the band-limited interpolation of the
/// original signal. An even-length spectrum's Nyquist bin is split between the
/// positive and negative halves to keep the result real.
fn zero_pad_spectrum(spectrum: &[Complex64], new_len: usize) -> Vec<Complex64> {
    let n = spectrum.len();
    if new_len == n {
        return spectrum.to_vec();
    }

    let mut padded = vec![Complex64::default(); new_len];
    let half = n / 2;
    if n % 2 == 0 {
        padded[..half].copy_from_slice(&spectrum[..half]);
        padded[half] = spectrum[half] / 2.0;
        padded[new_len - half] = spectrum[half] / 2.0;
        padded[new_len - half + 1..].copy_from_slice(&spectrum[half + 1..]);
    } else {
        padded[..=half].copy_from_slice(&spectrum[..=half]);
        padded[new_len - half..].copy_from_slice(&spectrum[half + 1..]);
    }
    padded
}

/// Delay a real signal by `delay` samples (which need not be an integer).
/// Samples shifted in from outside the signal are zero.
fn delay_signal(
    planner: &mut FftPlanner<f64>,
    signal: ArrayView1<f64>,
    delay: f64,
) -> Array1<f64> {
    let n = signal.len();
    let padded_len = 2 * n;
    let mut buffer = spectrum(planner, signal, padded_len);
    let nyquist = padded_len / 2;
    for (i_bin, c) in buffer.iter_mut().enumerate() {
        if i_bin == nyquist {
            // The Nyquist bin can't carry a phase and stay real.
            *c *= (PI * delay).cos();
            continue;
        }
        let freq = if i_bin < nyquist {
            i_bin as f64
        } else {
            i_bin as f64 - padded_len as f64
        };
        *c *= Complex64::from_polar(1.0, -TAU * freq * delay / padded_len as f64);
    }
    planner.plan_fft_inverse(padded_len).process(&mut buffer);

    let norm = padded_len as f64;
    buffer[..n].iter().map(|c| c.re / norm).collect()
}
