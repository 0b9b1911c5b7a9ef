// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use super::common::DATA_DIR_HELP;
use crate::{
    data_dir::{DataDir, DEFAULT_DATA_DIR},
    tuff::TuffTimeline,
    PanamaError,
};

#[derive(Parser, Debug, Clone)]
pub(super) struct TuffConfigArgs {
    /// The unix time of the event in question.
    #[clap(name = "UNIX_TIME", allow_hyphen_values = true)]
    unix_time: i64,

    #[clap(long, help = DATA_DIR_HELP.as_str(), parse(from_os_str))]
    data_dir: Option<PathBuf>,
}

impl TuffConfigArgs {
    pub(super) fn run(self) -> Result<(), PanamaError> {
        let data_dir = DataDir::new(
            self.data_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        );
        let timeline = TuffTimeline::read(&data_dir.tuff_timeline())?;
        let config = timeline.config_at(self.unix_time)?;
        info!("TUFF config at {}: {config}", self.unix_time);
        Ok(())
    }
}
