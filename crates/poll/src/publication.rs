// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeSet;
use tally_events::QuestionId;

/// Questions whose counters were opened for public decryption
#[derive(Debug, Default, Clone)]
pub struct PublicationState {
    public: BTreeSet<QuestionId>,
}

impl PublicationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_public(&self, question_id: QuestionId) -> bool {
        self.public.contains(&question_id)
    }

    /// Returns false when the question was already public
    pub fn publish(&mut self, question_id: QuestionId) -> bool {
        self.public.insert(question_id)
    }
}
