// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Groups of impulse-response files that get averaged together.

use std::path::{Path, PathBuf};

use log::debug;
use strum_macros::{Display, EnumIter, EnumString};
use vec1::Vec1;

use super::ChannelGroupError;
use crate::{
    constants::RESPONSE_EXTENSION, io::get_all_matches_from_glob, payload::Polarisation,
    waveform::Waveform, waveform::WaveformError,
};

/// Which polarisations a channel group contains.
#[derive(Debug, Display, Clone, Copy, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum PolSelection {
    #[strum(serialize = "H")]
    H,

    #[strum(serialize = "V")]
    V,

    /// Every channel, regardless of polarisation.
    #[strum(serialize = "both")]
    Both,
}

impl PolSelection {
    /// How this selection reads in a sentence, e.g. "no V-pol response
    /// files".
    pub fn description(self) -> &'static str {
        match self {
            PolSelection::H => "H-pol",
            PolSelection::V => "V-pol",
            PolSelection::Both => "H- or V-pol",
        }
    }

    /// The glob character matching the polarisation letter at the end of a
    /// channel identifier.
    fn glob_char(self) -> char {
        match self {
            PolSelection::H => 'H',
            PolSelection::V => 'V',
            PolSelection::Both => '?',
        }
    }
}

impl From<Polarisation> for PolSelection {
    fn from(pol: Polarisation) -> Self {
        match pol {
            Polarisation::H => PolSelection::H,
            Polarisation::V => PolSelection::V,
        }
    }
}

/// The name of the file that the average of a channel group is written to.
pub fn averaged_file_name(config: &str, pol: PolSelection) -> String {
    match pol {
        PolSelection::Both => format!("notches_{config}.{RESPONSE_EXTENSION}"),
        PolSelection::H | PolSelection::V => {
            format!("notches_{config}_{pol}.{RESPONSE_EXTENSION}")
        }
    }
}

/// The response files of every channel sharing a TUFF configuration and
/// polarisation.
#[derive(Debug, Clone)]
pub struct ChannelGroup {
    pub config: String,
    pub pol: PolSelection,

    /// Sorted by file name. Excluded channels never appear here.
    files: Vec1<PathBuf>,
}

impl ChannelGroup {
    /// Find the response files for `config` and `pol` in `response_dir` (e.g.
    /// the "digitizer" directory of a flight). Files live in
    /// `{response_dir}/notches_{config}/` and are named after their channel
    /// identifier, e.g. `01TH.imp`. Any file whose channel identifier contains
    /// one of `exclusions` is left out.
    ///
    /// It is an error for there to be no files, or for every file to be
    /// excluded.
    pub fn collect<S: AsRef<str>>(
        response_dir: &Path,
        config: &str,
        pol: PolSelection,
        exclusions: &[S],
    ) -> Result<ChannelGroup, ChannelGroupError> {
        let dir = response_dir.join(format!("notches_{config}"));
        let pattern = format!("???{}.{RESPONSE_EXTENSION}", pol.glob_char());
        let matches = get_all_matches_from_glob(&dir, &pattern)?;
        if matches.is_empty() {
            return Err(ChannelGroupError::NoFiles {
                config: config.to_string(),
                pol,
                dir: dir.display().to_string(),
            });
        }

        let files: Vec<PathBuf> = matches
            .into_iter()
            .filter(|file| {
                let channel = file
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default();
                match exclusions.iter().find(|e| channel.contains(e.as_ref())) {
                    Some(e) => {
                        debug!("Excluding {} (matches '{}')", file.display(), e.as_ref());
                        false
                    }
                    None => true,
                }
            })
            .collect();
        let files = Vec1::try_from_vec(files).map_err(|_| ChannelGroupError::AllExcluded {
            config: config.to_string(),
            pol,
        })?;

        Ok(ChannelGroup {
            config: config.to_string(),
            pol,
            files,
        })
    }

    pub fn files(&self) -> &[PathBuf] {
        self.files.as_slice()
    }

    /// Read every waveform in this group, in file order.
    pub fn load(&self) -> Result<Vec<Waveform>, WaveformError> {
        self.files.iter().map(|f| Waveform::read(f)).collect()
    }

    /// The name of the file this group's average is written to.
    pub fn averaged_file_name(&self) -> String {
        averaged_file_name(&self.config, self.pol)
    }
}
