// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod make_averages;
mod response;
mod tuff_config;

use std::path::Path;
use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};
use ndarray::prelude::*;

use panama::Waveform;

fn panama() -> Command {
    Command::cargo_bin("panama").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// A Gaussian pulse sampled at 10 GSa/s.
fn pulse(num_samples: usize, centre: f64, scale: f64) -> Waveform {
    let times = Array1::range(0.0, num_samples as f64, 1.0) * 0.1;
    let amps = Array1::from_shape_fn(num_samples, |i| {
        let x = (i as f64 - centre) / 3.0;
        scale * (-0.5 * x * x).exp()
    });
    Waveform::new(times, amps).unwrap()
}

/// Write a pulse to `{dir}/{relative}`, creating directories as needed.
fn write_pulse(dir: &Path, relative: &str, centre: f64, scale: f64) {
    let path = dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    pulse(128, centre, scale).write(&path).unwrap();
}
