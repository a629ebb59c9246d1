// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod catalog;
mod error;
mod ledger;
mod orchestrator;
mod publication;
mod results;
mod tally_store;

pub use catalog::*;
pub use error::*;
pub use ledger::*;
pub use orchestrator::*;
pub use publication::*;
pub use results::*;
pub use tally_config::MAX_OPTIONS;
pub use tally_store::*;
