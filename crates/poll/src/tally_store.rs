// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::MAX_OPTIONS;
use std::collections::BTreeMap;
use tally_coprocessor::Handle;
use tally_events::QuestionId;

/// Encrypted running count per question and option.
///
/// Questions nothing was folded into are not stored and read back as all zero handles. Slots past
/// a question's option count are never written so they stay zero as well.
#[derive(Debug, Default, Clone)]
pub struct TallyStore {
    counters: BTreeMap<QuestionId, [Handle; MAX_OPTIONS]>,
}

impl TallyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self, question_id: QuestionId) -> [Handle; MAX_OPTIONS] {
        self.counters
            .get(&question_id)
            .copied()
            .unwrap_or([Handle::ZERO; MAX_OPTIONS])
    }

    pub fn replace(&mut self, question_id: QuestionId, counters: [Handle; MAX_OPTIONS]) {
        self.counters.insert(question_id, counters);
    }
}
