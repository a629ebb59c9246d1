// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{AnswerLedger, PollError, PublicationState, QuestionCatalog, TallyStore, MAX_OPTIONS};
use alloy_primitives::Address;
use anyhow::Result;
use tally_config::PollConfig;
use tally_coprocessor::{
    protocol_id_for_chain, Coprocessor, ExternalInput, Handle, InputProof, ProofContext,
};
use tally_events::{
    AnswerSubmitted, EventLog, InMemEventLog, PollEvent, QuestionId, ResultsMadePublic,
};
use tracing::{debug, info};

/// The confidential tally state machine.
///
/// Mutations take `&mut self` and run to completion: new counter handles are built in a local
/// buffer, the event is appended, and only then are the tally, ledger and publication flag
/// committed. Any error before that point leaves the poll unchanged.
pub struct PollOrchestrator<C: Coprocessor, L: EventLog = InMemEventLog> {
    poll_address: Address,
    catalog: QuestionCatalog,
    ledger: AnswerLedger,
    tallies: TallyStore,
    publication: PublicationState,
    coprocessor: C,
    events: L,
}

impl<C: Coprocessor, L: EventLog> PollOrchestrator<C, L> {
    /// Fails when the coprocessor has no confidential protocol for its chain
    pub fn new(
        poll_address: Address,
        catalog: QuestionCatalog,
        coprocessor: C,
        events: L,
    ) -> Result<Self, PollError> {
        let protocol_id = coprocessor.protocol_id()?;
        info!(
            poll = %poll_address,
            protocol_id,
            questions = catalog.question_count(),
            "Poll ready"
        );
        Ok(Self {
            poll_address,
            catalog,
            ledger: AnswerLedger::new(),
            tallies: TallyStore::new(),
            publication: PublicationState::new(),
            coprocessor,
            events,
        })
    }

    /// Fails when the coprocessor does not serve the protocol of the configured chain
    pub fn from_config(config: &PollConfig, coprocessor: C, events: L) -> Result<Self> {
        let catalog = QuestionCatalog::from_config(config)?;

        let expected = protocol_id_for_chain(config.chain_id).map_err(PollError::from)?;
        let protocol_id = coprocessor.protocol_id().map_err(PollError::from)?;
        if protocol_id != expected {
            return Err(PollError::ProtocolMismatch {
                chain_id: config.chain_id,
                protocol_id,
            }
            .into());
        }

        Ok(Self::new(config.poll_address, catalog, coprocessor, events)?)
    }

    /// Accept one encrypted choice from `respondent` for `question_id`.
    pub fn submit_answer(
        &mut self,
        question_id: QuestionId,
        input: &ExternalInput,
        proof: &InputProof,
        respondent: Address,
    ) -> Result<(), PollError> {
        let option_count = self.catalog.question(question_id)?.option_count();

        if self.ledger.has_answered(&respondent, question_id) {
            return Err(PollError::AlreadyAnswered {
                respondent,
                question_id,
            });
        }

        let ctx = ProofContext {
            contract: self.poll_address,
            sender: respondent,
            bound: option_count as u32,
        };
        let choice = self.coprocessor.verify_and_ingest(input, proof, &ctx)?;
        let counters = self.fold_choice(question_id, &choice, option_count)?;

        let event: PollEvent = AnswerSubmitted {
            respondent,
            question_id,
        }
        .into();
        let seq = self.events.append(&event).map_err(PollError::EventLog)?;

        self.tallies.replace(question_id, counters);
        self.ledger.record(respondent, question_id);

        info!(%respondent, %question_id, seq, "Answer submitted");
        Ok(())
    }

    /// Add the encrypted choice into every counter of the question. Each slot gets the same
    /// sequence of operations whatever the choice.
    fn fold_choice(
        &mut self,
        question_id: QuestionId,
        choice: &Handle,
        option_count: usize,
    ) -> Result<[Handle; MAX_OPTIONS], PollError> {
        let published = self.publication.is_public(question_id);
        let mut counters = self.tallies.counters(question_id);

        let one = self.coprocessor.trivial_encrypt(1)?;
        let zero = self.coprocessor.trivial_encrypt(0)?;

        for (index, slot) in counters.iter_mut().enumerate().take(option_count) {
            let current = if slot.is_zero() { zero } else { *slot };
            let is_selected = self.coprocessor.eq_scalar(choice, index as u32)?;
            let increment = self.coprocessor.select(&is_selected, &one, &zero)?;
            let next = self.coprocessor.add(&current, &increment)?;
            self.coprocessor.allow(&next, self.poll_address)?;
            if published {
                self.coprocessor.grant_public_decrypt(&next)?;
            }
            *slot = next;
        }

        debug!(%question_id, option_count, "Folded answer into counters");
        Ok(counters)
    }

    /// Open the counters of a question for decryption by anyone. `requester` is additionally
    /// allowed on every counter.
    pub fn make_results_public(
        &mut self,
        question_id: QuestionId,
        requester: Address,
    ) -> Result<(), PollError> {
        let option_count = self.catalog.question(question_id)?.option_count();

        if self.publication.is_public(question_id) {
            return Err(PollError::ResultsAlreadyPublic(question_id));
        }

        // zero handles read as 0 without a grant
        let counters = self.tallies.counters(question_id);
        for handle in counters
            .iter()
            .take(option_count)
            .filter(|handle| !handle.is_zero())
        {
            self.coprocessor.grant_public_decrypt(handle)?;
            self.coprocessor.allow(handle, requester)?;
        }

        let event: PollEvent = ResultsMadePublic {
            requester,
            question_id,
        }
        .into();
        let seq = self.events.append(&event).map_err(PollError::EventLog)?;

        self.publication.publish(question_id);

        info!(%requester, %question_id, seq, "Results made public");
        Ok(())
    }

    /// Counter handles of a question padded to [`MAX_OPTIONS`] with zero handles
    pub fn get_encrypted_counts(
        &self,
        question_id: QuestionId,
    ) -> Result<[Handle; MAX_OPTIONS], PollError> {
        self.catalog.question(question_id)?;
        Ok(self.tallies.counters(question_id))
    }

    pub fn get_option_count(&self, question_id: QuestionId) -> Result<u8, PollError> {
        // at most MAX_OPTIONS
        Ok(self.catalog.question(question_id)?.option_count() as u8)
    }

    pub fn get_question_count(&self) -> u8 {
        self.catalog.question_count()
    }

    pub fn has_answered(
        &self,
        respondent: &Address,
        question_id: QuestionId,
    ) -> Result<bool, PollError> {
        self.catalog.question(question_id)?;
        Ok(self.ledger.has_answered(respondent, question_id))
    }

    pub fn is_question_public(&self, question_id: QuestionId) -> Result<bool, PollError> {
        self.catalog.question(question_id)?;
        Ok(self.publication.is_public(question_id))
    }

    pub fn confidential_protocol_id(&self) -> Result<u64, PollError> {
        Ok(self.coprocessor.protocol_id()?)
    }

    pub fn poll_address(&self) -> Address {
        self.poll_address
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn coprocessor(&self) -> &C {
        &self.coprocessor
    }

    pub fn coprocessor_mut(&mut self) -> &mut C {
        &mut self.coprocessor
    }

    pub fn event_log(&self) -> &L {
        &self.events
    }
}
