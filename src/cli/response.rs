// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use super::common::{InfoPrinter, DATA_DIR_HELP, FLIGHT_HELP};
use crate::{
    constants::{AVERAGE_CHANNEL, DEFAULT_FLIGHT},
    data_dir::{DataDir, DEFAULT_DATA_DIR},
    responses::{ResponseError, ResponseKind, ResponseLibrary, RESPONSE_KINDS},
    waveform::WaveformError,
    PanamaError,
};

lazy_static::lazy_static! {
    static ref KIND_HELP: String =
        format!("The kind of response. Supported kinds: {}", *RESPONSE_KINDS);
}

#[derive(Parser, Debug, Clone)]
pub(super) struct ResponseArgs {
    #[clap(name = "KIND", help = KIND_HELP.as_str())]
    kind: String,

    /// The channel, e.g. 01TH, or "average" for the channel-averaged
    /// response.
    #[clap(name = "CHANNEL")]
    channel: String,

    /// The TUFF config, e.g. 260_375_0.
    #[clap(name = "CONFIG")]
    config: String,

    #[clap(short, long, help = FLIGHT_HELP.as_str())]
    flight: Option<u8>,

    #[clap(long, help = DATA_DIR_HELP.as_str(), parse(from_os_str))]
    data_dir: Option<PathBuf>,

    /// Write the response to this file, in the same format it's stored in.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl ResponseArgs {
    pub(super) fn run(self, dry_run: bool) -> Result<(), PanamaError> {
        debug!("{:#?}", self);
        let Self {
            kind,
            channel,
            config,
            flight,
            data_dir,
            output,
        } = self;

        let kind = ResponseKind::parse(&kind).map_err(ResponseArgsError::from)?;
        let flight = flight.unwrap_or(DEFAULT_FLIGHT);
        let data_dir = DataDir::new(data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)));

        let mut library = ResponseLibrary::new(data_dir.responses());
        let path = library.response_path(kind, &channel, &config, flight);
        if dry_run {
            info!("Would read {}", path.display());
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let response = library
            .get_response(kind, &channel, &config, flight)
            .map_err(ResponseArgsError::from)?;

        let title = if channel == AVERAGE_CHANNEL {
            format!("ANITA-{flight} channel-averaged {kind} response")
        } else {
            format!("ANITA-{flight} {kind} response")
        };
        let mut printer = InfoPrinter::new(title.into());
        printer.push_block(vec![
            format!("Channel: {channel}").into(),
            format!("Config: {config}").into(),
            format!("File: {}", path.display()).into(),
        ]);
        let times = response.times();
        let amps = response.amplitudes();
        let (i_peak, peak) = amps
            .iter()
            .enumerate()
            .fold((0, 0.0_f64), |(i_best, best), (i, &a)| {
                if a.abs() > best.abs() {
                    (i, a)
                } else {
                    (i_best, best)
                }
            });
        printer.push_block(vec![
            format!("Samples: {}", response.len()).into(),
            format!(
                "Time span: {:.2} to {:.2} ns",
                times[0],
                times[response.len() - 1]
            )
            .into(),
            format!("Peak: {peak:.8} at {:.2} ns", times[i_peak]).into(),
        ]);
        printer.display();

        if let Some(output) = output {
            response
                .write(&output)
                .map_err(|err| ResponseArgsError::Write {
                    file: output.display().to_string(),
                    err,
                })?;
            info!("Wrote {}", output.display());
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum ResponseArgsError {
    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("Couldn't write '{file}': {err}")]
    Write { file: String, err: WaveformError },
}
