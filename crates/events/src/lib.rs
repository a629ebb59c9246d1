// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod event_id;
mod event_log;
mod poll_event;
mod question_id;

pub use event_id::*;
pub use event_log::*;
pub use poll_event::*;
pub use question_id::*;
