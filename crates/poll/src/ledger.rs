// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::Address;
use std::collections::BTreeSet;
use tally_events::QuestionId;

/// Which respondents have answered which questions. Entries are only ever inserted.
#[derive(Debug, Default, Clone)]
pub struct AnswerLedger {
    answered: BTreeSet<(Address, QuestionId)>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_answered(&self, respondent: &Address, question_id: QuestionId) -> bool {
        self.answered.contains(&(*respondent, question_id))
    }

    /// Returns false when the pair was already recorded
    pub fn record(&mut self, respondent: Address, question_id: QuestionId) -> bool {
        self.answered.insert((respondent, question_id))
    }

    pub fn len(&self) -> usize {
        self.answered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answered.is_empty()
    }
}
