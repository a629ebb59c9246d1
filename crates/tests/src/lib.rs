// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Helpers shared by the integration tests

use alloy_primitives::Address;
use anyhow::Result;
use tally_config::PollConfig;
use tally_coprocessor::MockCoprocessor;
use tally_events::{EventLog, InMemEventLog, QuestionId};
use tally_logger::SimpleLogger;
use tally_poll::{decrypt_counts, PollError, PollOrchestrator, MAX_OPTIONS};

pub type TestPoll = PollOrchestrator<MockCoprocessor, SimpleLogger<InMemEventLog>>;

/// Deterministic respondent address
pub fn respondent(n: u8) -> Address {
    Address::with_last_byte(n)
}

/// Poll over the default catalog backed by the mock coprocessor with a logged event log
pub fn default_poll() -> Result<TestPoll> {
    poll_from_config(&PollConfig::default(), 0)
}

pub fn poll_from_config(config: &PollConfig, seed: u64) -> Result<TestPoll> {
    PollOrchestrator::from_config(
        config,
        MockCoprocessor::with_seed(config.chain_id, seed),
        SimpleLogger::attach("poll", InMemEventLog::new()),
    )
}

/// Encrypt `choice` client side as `who` and submit it
pub fn submit<L: EventLog>(
    poll: &mut PollOrchestrator<MockCoprocessor, L>,
    who: Address,
    question: u8,
    choice: u32,
) -> Result<(), PollError> {
    let question_id = QuestionId::new(question);
    let bound = poll
        .get_option_count(question_id)
        .map(u32::from)
        .unwrap_or(MAX_OPTIONS as u32);
    let contract = poll.poll_address();
    let (input, proof) = poll
        .coprocessor_mut()
        .encrypt_input(contract, who, choice, bound);
    poll.submit_answer(question_id, &input, &proof, who)
}

/// Counts as the poll itself sees them
pub fn tally<L: EventLog>(
    poll: &PollOrchestrator<MockCoprocessor, L>,
    question: u8,
) -> Result<Vec<u32>, PollError> {
    decrypt_counts(
        poll,
        poll.coprocessor(),
        QuestionId::new(question),
        poll.poll_address(),
    )
}
