// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use tally_events::{EventLog, PollEvent};
use tracing::{error, info};

pub trait EventLogging {
    fn log(&self, logger_name: &str);
}

impl EventLogging for PollEvent {
    fn log(&self, logger_name: &str) {
        info!(
            me = logger_name,
            evt = %self,
            id = %self.get_id(),
            question_id = %self.question_id(),
            "Event appended"
        );
    }
}

/// Event log decorator that logs every event once it is durably appended
#[derive(Debug, Clone)]
pub struct SimpleLogger<L: EventLog> {
    name: String,
    inner: L,
}

impl<L: EventLog> SimpleLogger<L> {
    pub fn attach(name: &str, inner: L) -> Self {
        info!(node = %name, "READY!");
        Self {
            name: name.to_owned(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: EventLog> EventLog for SimpleLogger<L> {
    fn append(&mut self, event: &PollEvent) -> Result<u64> {
        match self.inner.append(event) {
            Ok(seq) => {
                event.log(&self.name);
                Ok(seq)
            }
            Err(e) => {
                error!(me = %self.name, evt = %event, error = %e, "Could not append event");
                Err(e)
            }
        }
    }

    fn read_from(&self, from: u64) -> Box<dyn Iterator<Item = Result<(u64, PollEvent)>>> {
        self.inner.read_from(from)
    }
}
