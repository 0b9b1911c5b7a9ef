// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use indoc::indoc;
use ndarray::prelude::*;

use super::*;

fn make_pulse(num_samples: usize) -> Waveform {
    let times = Array1::range(0.0, num_samples as f64, 1.0) * 0.1;
    let amplitudes = times.mapv(|t: f64| 0.0123456789 * (-(t - 5.0).powi(2)).exp() - 0.0001);
    Waveform::new(times, amplitudes).unwrap()
}

#[test]
fn mismatched_lengths_are_rejected() {
    let result = Waveform::new(Array1::zeros(4), Array1::zeros(3));
    assert!(matches!(
        result,
        Err(WaveformError::LengthMismatch {
            times: 4,
            amplitudes: 3
        })
    ));
}

#[test]
fn empty_waveforms_are_rejected() {
    let result = Waveform::new(Array1::zeros(0), Array1::zeros(0));
    assert!(matches!(result, Err(WaveformError::Empty)));
}

#[test]
fn sample_period() {
    let w = make_pulse(100);
    assert_abs_diff_eq!(w.sample_period().unwrap(), 0.1, epsilon = 1e-12);

    let single = Waveform::new(array![1.0], array![2.0]).unwrap();
    assert!(single.sample_period().is_none());
}

#[test]
fn read_waveform_with_header() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("01TH.imp");
    std::fs::write(
        &path,
        indoc! {"
            # Time (ns) | Amplitude (V/ns)
            0.00 0.00000000
            0.10 0.50000000
            0.20 -0.25000000
        "},
    )
    .unwrap();

    let w = Waveform::read(&path).unwrap();
    assert_eq!(w.len(), 3);
    assert_abs_diff_eq!(w.times(), array![0.0, 0.1, 0.2].view());
    assert_abs_diff_eq!(w.amplitudes(), array![0.0, 0.5, -0.25].view());
}

#[test]
fn written_files_start_with_the_units_header() {
    let w = make_pulse(3);
    let mut buf = vec![];
    w.write_to(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("# Time (ns) | Amplitude (V/ns)"));
    assert_eq!(lines.next(), Some("# time_ns amplitude"));
    assert_eq!(lines.next(), Some("0.00 -0.00010000"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn write_then_read_keeps_stated_precision() {
    let w = make_pulse(128);
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("average.imp");
    w.write(&path).unwrap();

    let from_disk = Waveform::read(&path).unwrap();
    assert_eq!(from_disk.len(), w.len());
    assert_abs_diff_eq!(from_disk.times(), w.times(), epsilon = 1e-2);
    assert_abs_diff_eq!(from_disk.amplitudes(), w.amplitudes(), epsilon = 1e-8);
}
