// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Labeled 1D arrays.

use indexmap::IndexMap;
use ndarray::prelude::*;

use super::CalibrationError;

/// The independent variable of a [`DataArray`].
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub name: String,
    pub units: String,
    pub long_name: String,
    pub values: Array1<f64>,
}

impl Coordinate {
    /// A frequency axis \[MHz\].
    pub fn frequency(values: Array1<f64>) -> Coordinate {
        Coordinate {
            name: "freqs".to_string(),
            units: "MHz".to_string(),
            long_name: "Frequency".to_string(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Values over a single coordinate, with units and a description.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    pub name: String,
    values: Array1<f64>,
    coord: Coordinate,
    pub units: String,
    pub long_name: String,

    /// Anything else worth knowing about the values.
    pub attrs: IndexMap<String, String>,
}

impl DataArray {
    /// `values` must be as long as `coord`.
    pub fn new(
        name: &str,
        values: Array1<f64>,
        coord: Coordinate,
    ) -> Result<DataArray, CalibrationError> {
        if values.len() != coord.len() {
            return Err(CalibrationError::CoordinateLength {
                name: name.to_string(),
                values: values.len(),
                coord: coord.len(),
            });
        }
        Ok(DataArray {
            name: name.to_string(),
            values,
            coord,
            units: String::new(),
            long_name: String::new(),
            attrs: IndexMap::new(),
        })
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    pub fn with_long_name(mut self, long_name: &str) -> Self {
        self.long_name = long_name.to_string();
        self
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn values(&self) -> ArrayView1<f64> {
        self.values.view()
    }

    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (coordinate, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.coord
            .values
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// Named [`DataArray`]s sharing a coordinate. Arrays keep their insertion
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    coord: Coordinate,
    arrays: IndexMap<String, DataArray>,
}

impl Dataset {
    pub fn new(coord: Coordinate) -> Dataset {
        Dataset {
            coord,
            arrays: IndexMap::new(),
        }
    }

    /// Add an array. Its coordinate must be the same as this dataset's, and
    /// an array with the same name is replaced.
    pub fn insert(&mut self, array: DataArray) -> Result<(), CalibrationError> {
        if array.coord != self.coord {
            return Err(CalibrationError::CoordinateMismatch { name: array.name });
        }
        self.arrays.insert(array.name.clone(), array);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.arrays.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(|n| n.as_str())
    }

    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}
