// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use approx::assert_abs_diff_eq;

use crate::{get_cmd_output, panama, pulse, write_pulse};
use panama::Waveform;

fn digitizer_dir(dir: &Path, configs: &[&str]) {
    for config in configs {
        for (channel, centre) in [
            ("01TH", 60.0),
            ("02MH", 61.2),
            ("13BH", 30.0),
            ("01TV", 59.4),
            ("02MV", 60.0),
        ] {
            let scale = if channel == "13BH" { 10.0 } else { 1.0 };
            write_pulse(
                dir,
                &format!("notches_{config}/{channel}.imp"),
                centre,
                scale,
            );
        }
    }
}

#[test]
fn make_averages_writes_every_group() {
    let tmp_dir = tempfile::tempdir().unwrap();
    digitizer_dir(tmp_dir.path(), &["260_0_0", "260_375_0"]);

    let cmd = panama()
        .args([
            "make-averages",
            "--no-progress-bars",
            "--digitizer-dir",
            &tmp_dir.path().display().to_string(),
            "--configs",
            "260_0_0",
            "260_375_0",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));

    let averages = tmp_dir.path().join("averages");
    for config in ["260_0_0", "260_375_0"] {
        for suffix in ["_H", "_V", ""] {
            let file = averages.join(format!("notches_{config}{suffix}.imp"));
            assert!(file.exists(), "{} is missing", file.display());
        }

        // 13BH is loud; it's excluded by default, so the H average should
        // look like every other H pulse (aligned to 01TH, the seed).
        let h = Waveform::read(&averages.join(format!("notches_{config}_H.imp"))).unwrap();
        assert_abs_diff_eq!(
            h.amplitudes(),
            pulse(128, 60.0, 1.0).amplitudes(),
            epsilon = 1e-6
        );
    }

    let contents = std::fs::read_to_string(averages.join("notches_260_0_0.imp")).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("# Time (ns) | Amplitude (V/ns)"));
    assert_eq!(lines.next(), Some("# time_ns amplitude"));
    let first = lines.next().unwrap();
    let mut fields = first.split_whitespace();
    assert_eq!(fields.next(), Some("0.00"));
    // 8 decimal places.
    assert_eq!(fields.next().unwrap().split('.').nth(1).unwrap().len(), 8);
}

#[test]
fn make_averages_from_an_arguments_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let digitizer = tmp_dir.path().join("digitizer");
    digitizer_dir(&digitizer, &["260_385_0"]);
    let arg_file = tmp_dir.path().join("args.toml");
    std::fs::write(
        &arg_file,
        format!(
            "digitizer_dir = \"{}\"\nconfigs = [\"260_385_0\"]\nupsample_factor = 5\n",
            digitizer.display()
        ),
    )
    .unwrap();
    let saved = tmp_dir.path().join("saved.toml");

    let cmd = panama()
        .args([
            "make-averages",
            &arg_file.display().to_string(),
            "--no-progress-bars",
            "--seed",
            "1",
            "--save-toml",
            &saved.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    assert!(digitizer.join("averages/notches_260_385_0.imp").exists());

    let saved = std::fs::read_to_string(saved).unwrap();
    assert!(saved.contains("upsample_factor = 5"));
    assert!(saved.contains("seed = 1"));
}

#[test]
fn make_averages_dry_run_writes_nothing() {
    let tmp_dir = tempfile::tempdir().unwrap();
    digitizer_dir(tmp_dir.path(), &["260_0_0"]);

    let cmd = panama()
        .args([
            "make-averages",
            "--dry-run",
            "--digitizer-dir",
            &tmp_dir.path().display().to_string(),
            "--configs",
            "260_0_0",
        ])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!tmp_dir.path().join("averages").exists());
}

#[test]
fn make_averages_fails_on_a_missing_group() {
    let tmp_dir = tempfile::tempdir().unwrap();
    digitizer_dir(tmp_dir.path(), &["260_0_0"]);

    let cmd = panama()
        .args([
            "make-averages",
            "--no-progress-bars",
            "--digitizer-dir",
            &tmp_dir.path().display().to_string(),
            "--configs",
            "260_0_0",
            "260_0_460",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("260_0_460"), "{stderr}");
    assert!(!tmp_dir.path().join("averages").exists());
}
