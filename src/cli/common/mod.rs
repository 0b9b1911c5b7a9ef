// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Things shared by `panama` subcommands: arguments files, help texts and
//! printers.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    constants::{DEFAULT_FLIGHT, DEFAULT_UPSAMPLE_FACTOR, MAX_UPSAMPLE_FACTOR},
    data_dir::DEFAULT_DATA_DIR,
    payload::SUPPORTED_FLIGHTS,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref DATA_DIR_HELP: String =
        format!("The directory containing the 'responses' and 'calibration' directories. Default: {DEFAULT_DATA_DIR}");

    pub(super) static ref FLIGHT_HELP: String =
        format!("The ANITA flight. Supported flights: {}. Default: {DEFAULT_FLIGHT}", *SUPPORTED_FLIGHTS);

    pub(super) static ref UPSAMPLE_FACTOR_HELP: String =
        format!("Waveforms are aligned to within 1/N of a sample. At most {MAX_UPSAMPLE_FACTOR}. Default: {DEFAULT_UPSAMPLE_FACTOR}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// Deserialise the arguments in `$arg_file`, a toml or json file, into
/// whatever type the caller expects. Returns early from the calling function
/// with a [`PanamaError::ArgFile`](crate::PanamaError::ArgFile) if the file
/// can't be read or understood.
macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());
        let read_contents = || -> Result<String, PanamaError> {
            let mut contents = String::new();
            File::open(&$arg_file)?.read_to_string(&mut contents)?;
            Ok(contents)
        };

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                match toml::from_str(&read_contents()?) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(PanamaError::ArgFile(format!(
                            "Couldn't decode toml structure from {}:\n{err}",
                            $arg_file.display()
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                match serde_json::from_str(&read_contents()?) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(PanamaError::ArgFile(format!(
                            "Couldn't decode json structure from {}:\n{err}",
                            $arg_file.display()
                        )))
                    }
                }
            }
            None => {
                return Err(PanamaError::ArgFile(format!(
                    "Argument file '{}' doesn't have a recognised file extension! Valid extensions are: {}",
                    $arg_file.display(),
                    *ARG_FILE_TYPES_COMMA_SEPARATED
                )))
            }
        }
    });
}

// Declared after `unpack_arg_file` so the tests can use it.
#[cfg(test)]
mod tests;
