// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::PollEvent;
use anyhow::Result;

/// Append-only store of poll events. Sequence numbers start at 1.
pub trait EventLog {
    /// Append an event and return its sequence number
    fn append(&mut self, event: &PollEvent) -> Result<u64>;
    /// Read every event with a sequence number greater than or equal to `from`
    fn read_from(&self, from: u64) -> Box<dyn Iterator<Item = Result<(u64, PollEvent)>>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemEventLog {
    log: Vec<PollEvent>,
}

impl InMemEventLog {
    pub fn new() -> Self {
        Self { log: Vec::new() }
    }

    pub fn events(&self) -> &[PollEvent] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

impl EventLog for InMemEventLog {
    fn append(&mut self, event: &PollEvent) -> Result<u64> {
        self.log.push(event.to_owned());
        Ok(self.log.len() as u64)
    }

    fn read_from(&self, from: u64) -> Box<dyn Iterator<Item = Result<(u64, PollEvent)>>> {
        // Convert 1-indexed sequence to 0-indexed array position
        let start_idx = from.saturating_sub(1) as usize;
        let first = start_idx as u64 + 1;

        let events: Vec<_> = self
            .log
            .iter()
            .skip(start_idx)
            .enumerate()
            .map(|(i, event)| Ok((first + i as u64, event.clone())))
            .collect();

        Box::new(events.into_iter())
    }
}
