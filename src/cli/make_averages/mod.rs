// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use vec1::Vec1;

use super::common::{display_warnings, InfoPrinter, Warn, ARG_FILE_HELP, UPSAMPLE_FACTOR_HELP};
use crate::{
    align::XcorrAligner,
    constants::{
        DEFAULT_EXCLUDED_CHANNELS, DEFAULT_FLIGHT, DEFAULT_SEED_INDEX, DEFAULT_UPSAMPLE_FACTOR,
        MAX_UPSAMPLE_FACTOR,
    },
    data_dir::DataDir,
    params::MakeAveragesParams,
    payload::Anita4,
    responses::ResponseKind,
    PanamaError,
};

lazy_static::lazy_static! {
    static ref DIGITIZER_DIR_HELP: String =
        format!("The directory containing a 'notches_<config>' directory of response files per TUFF config. Averages are written to its 'averages' directory. Default: {}",
                DataDir::default().response_kind_dir(ResponseKind::Digitizer, DEFAULT_FLIGHT).display());

    static ref CONFIGS_HELP: String =
        format!("The TUFF configs to average. Default: {}", Anita4::CONFIGS.join(" "));

    static ref EXCLUDE_HELP: String =
        format!("Response files whose channel contains any of these are never averaged. Default: {}", DEFAULT_EXCLUDED_CHANNELS.join(" "));
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct MakeAveragesArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(short, long, help = DIGITIZER_DIR_HELP.as_str(), parse(from_os_str))]
    pub(super) digitizer_dir: Option<PathBuf>,

    #[clap(short, long, multiple_values(true), help = CONFIGS_HELP.as_str())]
    pub(super) configs: Option<Vec<String>>,

    #[clap(short, long, multiple_values(true), help = EXCLUDE_HELP.as_str())]
    pub(super) exclude: Option<Vec<String>>,

    #[clap(short, long, help = UPSAMPLE_FACTOR_HELP.as_str())]
    pub(super) upsample_factor: Option<usize>,

    /// The index (into each group's files, sorted by name) of the response
    /// used as the reference for the bootstrap average.
    #[clap(long)]
    pub(super) seed: Option<usize>,
}

impl MakeAveragesArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    pub(super) fn merge(self) -> Result<MakeAveragesArgs, PanamaError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let MakeAveragesArgs {
                args_file: _,
                digitizer_dir,
                configs,
                exclude,
                upsample_factor,
                seed,
            } = unpack_arg_file!(arg_file);

            Ok(MakeAveragesArgs {
                args_file: None,
                digitizer_dir: cli_args.digitizer_dir.or(digitizer_dir),
                configs: cli_args.configs.or(configs),
                exclude: cli_args.exclude.or(exclude),
                upsample_factor: cli_args.upsample_factor.or(upsample_factor),
                seed: cli_args.seed.or(seed),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<MakeAveragesParams, PanamaError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            digitizer_dir,
            configs,
            exclude,
            upsample_factor,
            seed,
        } = self;

        let digitizer_dir = digitizer_dir.unwrap_or_else(|| {
            DataDir::default().response_kind_dir(ResponseKind::Digitizer, DEFAULT_FLIGHT)
        });
        if !digitizer_dir.is_dir() {
            return Err(MakeAveragesArgsError::NoDigitizerDir(digitizer_dir).into());
        }

        let configs = configs
            .unwrap_or_else(|| Anita4::CONFIGS.iter().map(|c| c.to_string()).collect());
        let configs =
            Vec1::try_from_vec(configs).map_err(|_| MakeAveragesArgsError::NoConfigs)?;
        let unknown = configs
            .iter()
            .filter(|c| !Anita4::CONFIGS.contains(&c.as_str()))
            .join(", ");
        if !unknown.is_empty() {
            format!("These configs aren't ANITA-4 TUFF configs: {unknown}").warn();
        }

        let exclusions = exclude.unwrap_or_else(|| {
            DEFAULT_EXCLUDED_CHANNELS
                .iter()
                .map(|c| c.to_string())
                .collect()
        });
        if exclusions.is_empty() {
            "No channels are excluded from the averages".warn();
        }

        let factor = NonZeroUsize::new(upsample_factor.unwrap_or(DEFAULT_UPSAMPLE_FACTOR))
            .ok_or(MakeAveragesArgsError::UpsampleFactorZero)?;
        if factor.get() > MAX_UPSAMPLE_FACTOR {
            return Err(MakeAveragesArgsError::UpsampleFactorTooLarge(factor.get()).into());
        }
        if factor.get() == 1 {
            "The upsample factor is 1; delays will only be found to the nearest sample".warn();
        }
        let seed = seed.unwrap_or(DEFAULT_SEED_INDEX);

        let mut printer = InfoPrinter::new("Averaging impulse responses".into());
        printer.push_line(format!("From: {}", digitizer_dir.display()).into());
        printer.push_line(format!("Configs: {}", configs.iter().join(", ")).into());
        if !exclusions.is_empty() {
            printer.push_line(format!("Excluding: {}", exclusions.iter().join(", ")).into());
        }
        printer.push_block(vec![
            format!("Upsample factor: {factor}").into(),
            format!("Bootstrap seed index: {seed}").into(),
        ]);
        printer.display();
        display_warnings();

        Ok(MakeAveragesParams {
            digitizer_dir,
            configs,
            exclusions,
            aligner: XcorrAligner::new(factor),
            seed,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), PanamaError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let written = params.run()?;
        info!(
            "Wrote {} averaged responses to {}",
            written.len(),
            params.output_dir().display()
        );
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum MakeAveragesArgsError {
    #[error("The digitizer directory '{}' doesn't exist", .0.display())]
    NoDigitizerDir(PathBuf),

    #[error("No TUFF configs were specified")]
    NoConfigs,

    #[error("The upsample factor cannot be 0")]
    UpsampleFactorZero,

    #[error("The upsample factor ({0}) cannot be larger than {MAX_UPSAMPLE_FACTOR}")]
    UpsampleFactorTooLarge(usize),
}
