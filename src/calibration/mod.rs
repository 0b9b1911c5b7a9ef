// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Measured and simulated calibration curves of ANITA hardware.
//!
//! Every curve is a function of frequency \[MHz\] and is returned as a
//! labeled [`DataArray`] (or a [`Dataset`] of them).

mod error;
mod labeled;
#[cfg(test)]
mod tests;

pub use error::CalibrationError;
pub use labeled::{Coordinate, DataArray, Dataset};

use std::path::{Path, PathBuf};

use log::debug;
use ndarray::prelude::*;

use crate::{constants::AVERAGE_CHANNEL, data_dir::DataDir, io::read_table};

/// The TUFF configurations with a simulated S21 response.
pub const TUFF_SIMULATED_CONFIGS: [&str; 6] = [
    "260_0_0",
    "260_375_0",
    "260_385_0",
    "260_365_0",
    "260_0_460",
    "260_375_460",
];

/// Loads calibration curves from a data directory.
#[derive(Debug, Clone)]
pub struct CalibrationLibrary {
    data_dir: DataDir,
}

impl CalibrationLibrary {
    pub fn new(data_dir: DataDir) -> CalibrationLibrary {
        CalibrationLibrary { data_dir }
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.data_dir
    }

    fn calibration_file(&self, flight_dir: &str, name: &str) -> PathBuf {
        self.data_dir.calibration().join(flight_dir).join(name)
    }

    /// The measured S21 and noise figure of an ANITA-4 AMPA. Only the average
    /// over all AMPAs is available.
    pub fn ampa_response(&self, channel: &str) -> Result<Dataset, CalibrationError> {
        if channel == AVERAGE_CHANNEL {
            self.average_ampa_response()
        } else {
            Err(CalibrationError::UnsupportedAmpaChannel {
                channel: channel.to_string(),
            })
        }
    }

    /// The average measured S21 \[dB\] and noise figure \[K\] of the ANITA-4
    /// AMPAs.
    pub fn average_ampa_response(&self) -> Result<Dataset, CalibrationError> {
        let table = load(&self.calibration_file("anita4", "average_ampa.dat"), 3)?;
        let freqs = Coordinate::frequency(table.column(0).to_owned());
        dataset(
            freqs,
            &table,
            &[
                Column::new(1, "S21", "dB", "S21"),
                Column::new(2, "NF", "K", "NF"),
            ],
        )
    }

    /// The measured gain of the horn antennas flown on `flight`.
    pub fn antenna_response(&self, flight: u8) -> Result<Dataset, CalibrationError> {
        match flight {
            1 | 2 => self.anita1_antenna_response(),
            3 | 4 => self.anita3_antenna_response(),
            _ => Err(CalibrationError::InvalidAntennaFlight { flight }),
        }
    }

    /// The measured gain \[dBi\] of an ANITA-1 horn, including the
    /// cross-polarisation gains "HV" and "VH".
    pub fn anita1_antenna_response(&self) -> Result<Dataset, CalibrationError> {
        let table = load(&self.calibration_file("anita1", "seavey_gain.dat"), 5)?;
        let freqs = Coordinate::frequency(table.column(0).to_owned());
        dataset(
            freqs,
            &table,
            &[
                Column::new(1, "H", "dBi", "HPol → HPol"),
                Column::new(2, "HV", "dBi", "HPol → VPol"),
                Column::new(3, "V", "dBi", "VPol → VPol"),
                Column::new(4, "VH", "dBi", "VPol → HPol"),
            ],
        )
    }

    /// The measured gain \[dBi\] of an ANITA-3 horn. These measurements
    /// disagree with the manufacturer's datasheet by nearly a factor of 2.
    ///
    /// The H and V gains are stored in separate files, which must share
    /// their frequencies.
    pub fn anita3_antenna_response(&self) -> Result<Dataset, CalibrationError> {
        let h = load(&self.calibration_file("anita3", "hpol_seavey_gain.dat"), 2)?;
        let v = load(&self.calibration_file("anita3", "vpol_seavey_gain.dat"), 2)?;
        let freqs = Coordinate::frequency(h.column(0).to_owned());

        let mut response = Dataset::new(freqs.clone());
        response.insert(
            DataArray::new("H", h.column(1).to_owned(), freqs.clone())?
                .with_units("dBi")
                .with_long_name("HPol → HPol"),
        )?;
        // The V file must be on the same frequencies as the H file.
        let v_freqs = Coordinate::frequency(v.column(0).to_owned());
        response.insert(
            DataArray::new("V", v.column(1).to_owned(), v_freqs)?
                .with_units("dBi")
                .with_long_name("VPol → VPol"),
        )?;
        Ok(response)
    }

    /// The gain \[dBi\] of an ANITA-3/4 horn according to its datasheet.
    pub fn anita3_datasheet_antenna_response(&self) -> Result<Dataset, CalibrationError> {
        let table = load(
            &self.calibration_file("anita3", "seavey_datasheet_gain.dat"),
            3,
        )?;
        let freqs = Coordinate::frequency(table.column(0).to_owned());
        let columns = [
            Column::new(1, "H", "dBi", "HPol → HPol"),
            Column::new(2, "V", "dBi", "VPol → VPol"),
        ];
        let mut response = Dataset::new(freqs.clone());
        for column in columns {
            response.insert(column.to_array(&table, &freqs)?.with_attr("name", column.name))?;
        }
        Ok(response)
    }

    /// The beamwidth (half width at half maximum) \[deg\] of the horn antennas
    /// in the horizontal and vertical planes.
    pub fn beamwidth(&self, flight: u8) -> Result<Dataset, CalibrationError> {
        if !matches!(flight, 3 | 4) {
            return Err(CalibrationError::InvalidBeamwidthFlight { flight });
        }
        let file = self
            .data_dir
            .responses()
            .join(format!("anita{flight}"))
            .join("seavey_beamwidth.dat");
        let table = load(&file, 3)?;
        let freqs = Coordinate::frequency(table.column(0).to_owned());
        dataset(
            freqs,
            &table,
            &[
                Column::new(1, "H", "deg", "Horizontal HWHM"),
                Column::new(2, "V", "deg", "Vertical HWHM"),
            ],
        )
    }

    /// The simulated S21 \[dB\] of an ANITA-4 TUFF in the configuration
    /// `config`.
    pub fn tuff_response(&self, config: &str) -> Result<DataArray, CalibrationError> {
        if !TUFF_SIMULATED_CONFIGS.contains(&config) {
            return Err(CalibrationError::InvalidTuffConfig {
                config: config.to_string(),
                valid: TUFF_SIMULATED_CONFIGS.join(", "),
            });
        }
        let file = self
            .data_dir
            .calibration()
            .join("anita4")
            .join("tuff")
            .join(format!("{config}.dat"));
        let table = load(&file, 2)?;
        let freqs = Coordinate::frequency(table.column(0).to_owned());
        Ok(Column::new(1, "S21", "dB", "S21")
            .to_array(&table, &freqs)?
            .with_attr("config", config))
    }
}

fn load(file: &Path, num_cols: usize) -> Result<Array2<f64>, CalibrationError> {
    debug!("Loading calibration data from {}", file.display());
    Ok(read_table(file, num_cols)?)
}

/// Where a [`DataArray`] comes from in a table, and how it's labeled.
#[derive(Clone, Copy)]
struct Column {
    index: usize,
    name: &'static str,
    units: &'static str,
    long_name: &'static str,
}

impl Column {
    fn new(
        index: usize,
        name: &'static str,
        units: &'static str,
        long_name: &'static str,
    ) -> Column {
        Column {
            index,
            name,
            units,
            long_name,
        }
    }

    fn to_array(
        self,
        table: &Array2<f64>,
        coord: &Coordinate,
    ) -> Result<DataArray, CalibrationError> {
        Ok(
            DataArray::new(self.name, table.column(self.index).to_owned(), coord.clone())?
                .with_units(self.units)
                .with_long_name(self.long_name),
        )
    }
}

fn dataset(
    coord: Coordinate,
    table: &Array2<f64>,
    columns: &[Column],
) -> Result<Dataset, CalibrationError> {
    let mut dataset = Dataset::new(coord.clone());
    for column in columns {
        dataset.insert(column.to_array(table, &coord)?)?;
    }
    Ok(dataset)
}
