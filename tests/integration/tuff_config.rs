// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indoc::indoc;

use crate::{get_cmd_output, panama};

fn data_dir() -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dir = tmp_dir.path().join("responses/anita4");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("tuff_by_time.dat"),
        indoc! {"
            # config unix_time
            260_0_0 1480707643
            260_375_0 1480710000
            260_385_0 1481000000
        "},
    )
    .unwrap();
    tmp_dir
}

fn tuff_config(data_dir: &tempfile::TempDir, time: &str) -> (bool, String, String) {
    let cmd = panama()
        .args([
            "tuff-config",
            time,
            "--data-dir",
            &data_dir.path().display().to_string(),
        ])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    (ok, stdout, stderr)
}

#[test]
fn config_during_the_flight() {
    let tmp_dir = data_dir();

    let (ok, stdout, _) = tuff_config(&tmp_dir, "1480709000");
    assert!(ok);
    assert!(stdout.contains("TUFF config at 1480709000: 260_0_0"), "{stdout}");

    // A change takes effect just after its timestamp.
    let (ok, stdout, _) = tuff_config(&tmp_dir, "1480710000");
    assert!(ok);
    assert!(stdout.contains(": 260_0_0"), "{stdout}");

    let (ok, stdout, _) = tuff_config(&tmp_dir, "1480710001");
    assert!(ok);
    assert!(stdout.contains(": 260_375_0"), "{stdout}");
}

#[test]
fn times_outside_the_flight_fail() {
    let tmp_dir = data_dir();

    let (ok, _, stderr) = tuff_config(&tmp_dir, "1000");
    assert!(!ok);
    assert!(stderr.contains("before the ANITA-4 flight"), "{stderr}");

    let (ok, _, stderr) = tuff_config(&tmp_dir, "1481000001");
    assert!(!ok);
    assert!(stderr.contains("after the ANITA-4 flight"), "{stderr}");

    let (ok, _, stderr) = tuff_config(&tmp_dir, "-5");
    assert!(!ok);
    assert!(stderr.contains("before"), "{stderr}");
}

#[test]
fn missing_timeline_fails() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let (ok, _, stderr) = tuff_config(&tmp_dir, "1480709000");
    assert!(!ok);
    assert!(stderr.contains("tuff_by_time.dat"), "{stderr}");
}
