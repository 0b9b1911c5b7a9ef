// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use approx::assert_abs_diff_eq;
use indoc::indoc;
use ndarray::array;
use tempfile::TempDir;

use super::*;
use crate::io::ReadTableError;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn data_tree() -> (TempDir, CalibrationLibrary) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let root = tmp_dir.path();
    write(
        root,
        "calibration/anita4/average_ampa.dat",
        indoc! {"
            # freq S21 NF
            200 30.5 80.0
            400 31.0 75.5
            600 30.0 78.0
        "},
    );
    write(
        root,
        "calibration/anita1/seavey_gain.dat",
        indoc! {"
            200 8.0 -20.0 8.5 -21.0
            500 10.0 -18.0 10.5 -19.0
        "},
    );
    write(
        root,
        "calibration/anita3/hpol_seavey_gain.dat",
        "200 9.0\n500 11.0\n",
    );
    write(
        root,
        "calibration/anita3/vpol_seavey_gain.dat",
        "200 9.5\n500 11.5\n",
    );
    write(
        root,
        "calibration/anita3/seavey_datasheet_gain.dat",
        "200 10.0 10.1\n500 12.0 12.1\n",
    );
    write(
        root,
        "responses/anita4/seavey_beamwidth.dat",
        "200 30.0 35.0\n500 20.0 25.0\n",
    );
    write(
        root,
        "calibration/anita4/tuff/260_375_0.dat",
        "200 -0.5\n375 -20.0\n600 -0.4\n",
    );
    let library = CalibrationLibrary::new(DataDir::new(root));
    (tmp_dir, library)
}

#[test]
fn average_ampa_is_labeled() {
    let (_tmp, library) = data_tree();
    let ampa = library.ampa_response("average").unwrap();
    assert_eq!(ampa.names().collect::<Vec<_>>(), ["S21", "NF"]);
    assert_eq!(ampa.coord().name, "freqs");
    assert_eq!(ampa.coord().units, "MHz");
    assert_abs_diff_eq!(ampa.coord().values, array![200.0, 400.0, 600.0]);

    let s21 = ampa.get("S21").unwrap();
    assert_eq!(s21.units, "dB");
    assert_abs_diff_eq!(s21.values(), array![30.5, 31.0, 30.0]);
    let nf = ampa.get("NF").unwrap();
    assert_eq!(nf.units, "K");
    assert_eq!(nf.iter().nth(1), Some((400.0, 75.5)));
}

#[test]
fn only_the_average_ampa_is_supported() {
    let (_tmp, library) = data_tree();
    let result = library.ampa_response("01TH");
    assert!(matches!(
        result,
        Err(CalibrationError::UnsupportedAmpaChannel { .. })
    ));
}

#[test]
fn antenna_response_depends_on_flight() {
    let (_tmp, library) = data_tree();

    for flight in [1, 2] {
        let gain = library.antenna_response(flight).unwrap();
        assert_eq!(gain.names().collect::<Vec<_>>(), ["H", "HV", "V", "VH"]);
        assert_abs_diff_eq!(gain.get("VH").unwrap().values()[1], -19.0);
        assert_eq!(gain.get("H").unwrap().units, "dBi");
    }
    for flight in [3, 4] {
        let gain = library.antenna_response(flight).unwrap();
        assert_eq!(gain.names().collect::<Vec<_>>(), ["H", "V"]);
        assert_abs_diff_eq!(gain.get("V").unwrap().values()[0], 9.5);
    }
    for flight in [0, 5] {
        assert!(matches!(
            library.antenna_response(flight),
            Err(CalibrationError::InvalidAntennaFlight { .. })
        ));
    }
}

#[test]
fn anita3_gains_must_share_frequencies() {
    let (tmp, library) = data_tree();
    write(
        tmp.path(),
        "calibration/anita3/vpol_seavey_gain.dat",
        "250 9.5\n500 11.5\n",
    );
    assert!(matches!(
        library.anita3_antenna_response(),
        Err(CalibrationError::CoordinateMismatch { .. })
    ));
}

#[test]
fn datasheet_arrays_are_named() {
    let (_tmp, library) = data_tree();
    let gain = library.anita3_datasheet_antenna_response().unwrap();
    assert_eq!(gain.get("H").unwrap().attrs["name"], "H");
    assert_eq!(gain.get("V").unwrap().attrs["name"], "V");
    assert_abs_diff_eq!(gain.get("V").unwrap().values()[1], 12.1);
}

#[test]
fn beamwidth_for_supported_flights() {
    let (_tmp, library) = data_tree();
    let beamwidth = library.beamwidth(4).unwrap();
    let h = beamwidth.get("H").unwrap();
    assert_eq!(h.units, "deg");
    assert_eq!(h.long_name, "Horizontal HWHM");
    assert_abs_diff_eq!(beamwidth.get("V").unwrap().values()[0], 35.0);

    // Flight 3 is supported, but there's no file for it here.
    assert!(matches!(
        library.beamwidth(3),
        Err(CalibrationError::ReadTable(ReadTableError::Open { .. }))
    ));
    assert!(matches!(
        library.beamwidth(2),
        Err(CalibrationError::InvalidBeamwidthFlight { flight: 2 })
    ));
}

#[test]
fn tuff_response_carries_its_config() {
    let (_tmp, library) = data_tree();
    let s21 = library.tuff_response("260_375_0").unwrap();
    assert_eq!(s21.name, "S21");
    assert_eq!(s21.units, "dB");
    assert_eq!(s21.attrs["config"], "260_375_0");
    assert_eq!(s21.len(), 3);
    assert_abs_diff_eq!(s21.values()[1], -20.0);

    match library.tuff_response("0_0_0") {
        Err(CalibrationError::InvalidTuffConfig { valid, .. }) => {
            assert!(valid.starts_with("260_0_0, 260_375_0"))
        }
        _ => panic!("expected an invalid config error"),
    }
}

#[test]
fn data_array_length_must_match_coordinate() {
    let freqs = Coordinate::frequency(array![1.0, 2.0]);
    let result = DataArray::new("gain", array![1.0, 2.0, 3.0], freqs);
    assert!(matches!(
        result,
        Err(CalibrationError::CoordinateLength {
            values: 3,
            coord: 2,
            ..
        })
    ));
}
