// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All impulse responses handled by `panama` are expected to be sampled at
[`SAMPLE_RATE_GSPS`]; nothing resamples them on the way in.
 */

/// The sample rate of every stored impulse response \[GSa/s\].
pub const SAMPLE_RATE_GSPS: f64 = 10.0;

/// The time between consecutive impulse-response samples \[ns\].
pub const SAMPLE_PERIOD_NS: f64 = 1.0 / SAMPLE_RATE_GSPS;

/// The cross-correlation oversampling factor used when aligning waveforms.
pub const DEFAULT_UPSAMPLE_FACTOR: usize = 10;

/// The largest accepted cross-correlation oversampling factor. At 10 GSa/s
/// this finds delays to 0.1 ps, far below any recorded jitter.
pub const MAX_UPSAMPLE_FACTOR: usize = 1000;

/// Index into a channel group of the waveform seeding the bootstrap average.
pub const DEFAULT_SEED_INDEX: usize = 0;

/// The flight used when one isn't specified.
pub const DEFAULT_FLIGHT: u8 = 4;

/// Channels that are never folded into an averaged impulse response. 13BH has
/// a known-bad digitizer response.
pub const DEFAULT_EXCLUDED_CHANNELS: &[&str] = &["13BH"];

/// The extension of impulse-response files.
pub const RESPONSE_EXTENSION: &str = "imp";

/// The name given to the channel-averaged response.
pub const AVERAGE_CHANNEL: &str = "average";

/// Decimal places used for times when writing waveforms.
pub const TIME_DECIMALS: usize = 2;

/// Decimal places used for amplitudes when writing waveforms.
pub const AMPLITUDE_DECIMALS: usize = 8;

/// The header written at the top of every waveform file. Each line gets a
/// leading "# ".
pub const WAVEFORM_HEADER: [&str; 2] = ["Time (ns) | Amplitude (V/ns)", "time_ns amplitude"];
