// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{PollError, PollOrchestrator};
use alloy_primitives::Address;
use tally_coprocessor::{Coprocessor, Decryptor};
use tally_events::{EventLog, QuestionId};
use tracing::debug;

/// Decrypt the counters of a question as `requester`.
///
/// Only the first `option_count` counters are returned. Zero handles count as 0 and are never sent
/// to the decryptor.
pub fn decrypt_counts<C, L, D>(
    poll: &PollOrchestrator<C, L>,
    decryptor: &D,
    question_id: QuestionId,
    requester: Address,
) -> Result<Vec<u32>, PollError>
where
    C: Coprocessor,
    L: EventLog,
    D: Decryptor + ?Sized,
{
    let option_count = poll.get_option_count(question_id)? as usize;
    let handles = poll.get_encrypted_counts(question_id)?;

    let counts = handles
        .iter()
        .take(option_count)
        .map(|handle| -> Result<u32, PollError> {
            if handle.is_zero() {
                return Ok(0);
            }
            Ok(decryptor.decrypt(handle, requester)?)
        })
        .collect::<Result<Vec<_>, PollError>>()?;

    debug!(%question_id, %requester, "Decrypted counts");
    Ok(counts)
}
