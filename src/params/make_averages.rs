// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};
use vec1::Vec1;

use crate::{
    align::XcorrAligner,
    averaging::{two_pass_average, AverageError, ChannelGroup, ChannelGroupError, PolSelection},
    waveform::WaveformError,
    PROGRESS_BARS,
};

/// Every channel group of a config is averaged three times: once per
/// polarisation, and once with both.
pub(crate) const POL_SELECTIONS: [PolSelection; 3] =
    [PolSelection::H, PolSelection::V, PolSelection::Both];

pub(crate) struct MakeAveragesParams {
    /// The directory containing a `notches_{config}` directory per config.
    /// Averages are written to its `averages` subdirectory.
    pub(crate) digitizer_dir: PathBuf,

    pub(crate) configs: Vec1<String>,

    /// Channels containing any of these are left out of every average.
    pub(crate) exclusions: Vec<String>,

    pub(crate) aligner: XcorrAligner,

    /// Index into each (sorted) channel group of the bootstrap reference.
    pub(crate) seed: usize,
}

impl MakeAveragesParams {
    pub(crate) fn output_dir(&self) -> PathBuf {
        self.digitizer_dir.join("averages")
    }

    /// Find every channel group. Any missing group is an error.
    pub(crate) fn collect_groups(&self) -> Result<Vec<ChannelGroup>, MakeAveragesError> {
        let mut groups = Vec::with_capacity(self.configs.len() * POL_SELECTIONS.len());
        for config in &self.configs {
            for pol in POL_SELECTIONS {
                let group = ChannelGroup::collect(
                    &self.digitizer_dir,
                    config,
                    pol,
                    self.exclusions.as_slice(),
                )?;
                debug!(
                    "Config {config} ({}): {} response files",
                    pol.description(),
                    group.files().len()
                );
                groups.push(group);
            }
        }
        Ok(groups)
    }

    /// Average every channel group and write the results. Returns the files
    /// that were written.
    pub(crate) fn run(&self) -> Result<Vec<PathBuf>, MakeAveragesError> {
        // Find everything up front so nothing is written if a group is
        // missing.
        let groups = self.collect_groups()?;

        let output_dir = self.output_dir();
        std::fs::create_dir_all(&output_dir).map_err(|err| MakeAveragesError::CreateDir {
            dir: output_dir.display().to_string(),
            err,
        })?;

        let pb = ProgressBar::with_draw_target(
            Some(groups.len() as _),
            if PROGRESS_BARS.load() {
                ProgressDrawTarget::stdout()
            } else {
                ProgressDrawTarget::hidden()
            },
        )
        .with_style(
            ProgressStyle::default_bar()
                .template("{msg:18}: [{wide_bar:.blue}] {pos:2}/{len:2} groups ({elapsed_precise}<{eta_precise})")
                .unwrap()
                .progress_chars("=> "),
        )
        .with_position(0)
        .with_message("Averaging");

        let mut written = Vec::with_capacity(groups.len());
        for group in &groups {
            let ChannelGroup { config, pol, .. } = group;
            let waveforms = group.load().map_err(|err| MakeAveragesError::Load {
                config: config.clone(),
                pol: *pol,
                err,
            })?;
            let average = two_pass_average(&waveforms, self.seed, &self.aligner).map_err(
                |err| MakeAveragesError::Average {
                    config: config.clone(),
                    pol: *pol,
                    err,
                },
            )?;

            let file = output_dir.join(group.averaged_file_name());
            average
                .write(&file)
                .map_err(|err| MakeAveragesError::Write {
                    file: file.display().to_string(),
                    err,
                })?;
            info!(
                "Averaged {} {} responses for {config} into {}",
                waveforms.len(),
                pol.description(),
                file.display()
            );
            written.push(file);
            pb.inc(1);
        }
        pb.abandon_with_message("Finished averaging");

        Ok(written)
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum MakeAveragesError {
    #[error(transparent)]
    ChannelGroup(#[from] ChannelGroupError),

    #[error("Couldn't load the {} responses for config {config}: {err}", .pol.description())]
    Load {
        config: String,
        pol: PolSelection,
        err: WaveformError,
    },

    #[error("Couldn't average the {} responses for config {config}: {err}", .pol.description())]
    Average {
        config: String,
        pol: PolSelection,
        err: AverageError,
    },

    #[error("Couldn't write '{file}': {err}")]
    Write { file: String, err: WaveformError },

    #[error("Couldn't create directory '{dir}': {err}")]
    CreateDir { dir: String, err: std::io::Error },
}
