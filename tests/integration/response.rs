// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use crate::{get_cmd_output, panama, pulse, write_pulse};
use panama::Waveform;

fn data_dir() -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_pulse(
        tmp_dir.path(),
        "responses/anita4/digitizer/notches_260_375_0/01TH.imp",
        40.0,
        2.0,
    );
    write_pulse(
        tmp_dir.path(),
        "responses/anita4/trigger/averages/notches_260_0_0.imp",
        50.0,
        1.5,
    );
    tmp_dir
}

#[test]
fn response_is_summarised_and_written() {
    let tmp_dir = data_dir();
    let output = tmp_dir.path().join("out.imp");

    let cmd = panama()
        .args([
            "response",
            "digitizer",
            "01TH",
            "260_375_0",
            "--data-dir",
            &tmp_dir.path().display().to_string(),
            "--output",
            &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Samples: 128"), "{stdout}");
    assert!(stdout.contains("Peak: 2.00000000 at 4.00 ns"), "{stdout}");

    let written = Waveform::read(&output).unwrap();
    assert_abs_diff_eq!(
        written.amplitudes(),
        pulse(128, 40.0, 2.0).amplitudes(),
        epsilon = 1e-8
    );
}

#[test]
fn channel_averaged_response() {
    let tmp_dir = data_dir();
    let cmd = panama()
        .args([
            "response",
            "trigger",
            "average",
            "260_0_0",
            "--data-dir",
            &tmp_dir.path().display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("channel-averaged trigger response"), "{stdout}");
}

#[test]
fn invalid_requests_fail() {
    let tmp_dir = data_dir();
    let data_dir = tmp_dir.path().display().to_string();

    for (args, expected) in [
        (["signal", "01TH", "260_375_0"], "Unrecognised response kind"),
        (["digitizer", "17TH", "260_375_0"], "does not exist on ANITA-4"),
        (["digitizer", "01TH", "250_0_0"], "is not a TUFF configuration"),
        (["digitizer", "02TH", "260_375_0"], "Couldn't load response"),
    ] {
        let cmd = panama()
            .arg("response")
            .args(args)
            .args(["--data-dir", &data_dir])
            .ok();
        assert!(cmd.is_err(), "{args:?} should fail");
        let (_, stderr) = get_cmd_output(cmd);
        assert!(stderr.contains(expected), "{stderr}");
    }
}

#[test]
fn unsupported_flight_fails() {
    let tmp_dir = data_dir();
    let cmd = panama()
        .args([
            "response",
            "digitizer",
            "01TH",
            "260_375_0",
            "--flight",
            "3",
            "--data-dir",
            &tmp_dir.path().display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
}

#[test]
fn dry_run_reads_nothing() {
    // Nothing exists in this directory.
    let tmp_dir = tempfile::tempdir().unwrap();
    let cmd = panama()
        .args([
            "response",
            "digitizer",
            "01TH",
            "260_375_0",
            "--dry-run",
            "--data-dir",
            &tmp_dir.path().display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Would read"), "{stdout}");
}
