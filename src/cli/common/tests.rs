// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

use super::*;
use crate::PanamaError;

#[derive(Debug, Deserialize, PartialEq)]
struct Example {
    name: Option<String>,
    count: Option<usize>,
}

fn unpack(arg_file: PathBuf) -> Result<Example, PanamaError> {
    Ok(unpack_arg_file!(arg_file))
}

#[test]
fn arg_file_types() {
    assert_eq!(*ARG_FILE_TYPES_COMMA_SEPARATED, "toml, json");
    assert!(ARG_FILE_HELP.ends_with("toml, json"));
}

#[test]
fn unpack_toml_and_json() {
    let tmp_dir = tempfile::tempdir().unwrap();

    let toml_file = tmp_dir.path().join("args.toml");
    std::fs::write(&toml_file, "name = \"averages\"\ncount = 3\n").unwrap();
    assert_eq!(
        unpack(toml_file).unwrap(),
        Example {
            name: Some("averages".to_string()),
            count: Some(3),
        }
    );

    let json_file = tmp_dir.path().join("args.JSON");
    std::fs::write(&json_file, r#"{"count": 5}"#).unwrap();
    assert_eq!(
        unpack(json_file).unwrap(),
        Example {
            name: None,
            count: Some(5),
        }
    );
}

#[test]
fn unpack_bad_files() {
    let tmp_dir = tempfile::tempdir().unwrap();

    let yaml_file = tmp_dir.path().join("args.yaml");
    std::fs::write(&yaml_file, "count: 5\n").unwrap();
    assert!(matches!(unpack(yaml_file), Err(PanamaError::ArgFile(_))));

    let bad_toml = tmp_dir.path().join("args.toml");
    std::fs::write(&bad_toml, "count = = 5\n").unwrap();
    assert!(matches!(unpack(bad_toml), Err(PanamaError::ArgFile(_))));

    let missing = tmp_dir.path().join("missing.toml");
    assert!(matches!(unpack(missing), Err(PanamaError::Generic(_))));
}
