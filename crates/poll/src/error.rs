// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::Address;
use tally_coprocessor::CoprocessorError;
use tally_events::QuestionId;
use thiserror::Error;

/// Every failure aborts the operation before any state is committed.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Invalid question {0}")]
    InvalidQuestion(QuestionId),

    #[error("{respondent} already answered question {question_id}")]
    AlreadyAnswered {
        respondent: Address,
        question_id: QuestionId,
    },

    #[error("Results of question {0} are already public")]
    ResultsAlreadyPublic(QuestionId),

    #[error("Configured chain {chain_id} does not match coprocessor protocol {protocol_id}")]
    ProtocolMismatch { chain_id: u64, protocol_id: u64 },

    #[error("Coprocessor error: {0}")]
    Protocol(#[from] CoprocessorError),

    #[error("Could not append to event log: {0}")]
    EventLog(anyhow::Error),
}
