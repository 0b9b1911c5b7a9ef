// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::SUPPORTED_FLIGHTS;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("There is no payload description for flight {flight}.\nSupported flights are: {}", *SUPPORTED_FLIGHTS)]
    InvalidFlight { flight: u8 },
}
