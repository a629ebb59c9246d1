// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use tally_coprocessor::{CoprocessorError, LOCAL_CHAIN_ID};
use tally_events::{EventLog, PollEvent, QuestionId};
use tally_poll::{decrypt_counts, PollError, MAX_OPTIONS};
use tally_tests::{default_poll, respondent, submit, tally};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_two_respondents_same_choice() -> Result<()> {
    let alice = respondent(1);
    let bob = respondent(2);
    let q1 = QuestionId::new(1);

    let mut poll = default_poll()?;
    assert_eq!(poll.get_question_count(), 5);
    assert_eq!(poll.get_option_count(q1)?, 4);
    assert_eq!(poll.confidential_protocol_id()?, LOCAL_CHAIN_ID);

    submit(&mut poll, alice, 1, 2)?;
    assert_eq!(tally(&poll, 1)?, vec![0, 0, 1, 0]);

    submit(&mut poll, bob, 1, 2)?;
    assert_eq!(tally(&poll, 1)?, vec![0, 0, 2, 0]);

    for choice in 0..4 {
        let Err(PollError::AlreadyAnswered {
            respondent: who,
            question_id,
        }) = submit(&mut poll, alice, 1, choice)
        else {
            bail!("Alice must not be able to answer twice");
        };
        assert_eq!(who, alice);
        assert_eq!(question_id, q1);
    }
    assert_eq!(tally(&poll, 1)?, vec![0, 0, 2, 0]);

    assert!(poll.has_answered(&alice, q1)?);
    assert!(poll.has_answered(&bob, q1)?);
    assert!(!poll.has_answered(&respondent(3), q1)?);

    // event log carries who and which question, never the choice
    let events: Vec<(u64, PollEvent)> = poll.event_log().read_from(1).collect::<Result<_>>()?;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, 1);
    assert_eq!(events[0].1.actor(), alice);
    assert_eq!(events[1].1.actor(), bob);
    assert!(events.iter().all(|(_, e)| e.question_id() == q1));

    assert!(logs_contain("Event appended"));
    assert!(logs_contain("Answer submitted"));
    Ok(())
}

#[test]
fn test_publication_flow() -> Result<()> {
    let alice = respondent(1);
    let bob = respondent(2);
    let carol = respondent(3);
    let q0 = QuestionId::new(0);

    let mut poll = default_poll()?;
    submit(&mut poll, alice, 0, 0)?;
    submit(&mut poll, bob, 0, 2)?;

    // before publication only the poll can decrypt
    assert!(matches!(
        decrypt_counts(&poll, poll.coprocessor(), q0, carol),
        Err(PollError::Protocol(
            CoprocessorError::DecryptionNotAllowed { .. }
        ))
    ));

    poll.make_results_public(q0, carol)?;
    assert!(poll.is_question_public(q0)?);
    assert_eq!(
        decrypt_counts(&poll, poll.coprocessor(), q0, respondent(99))?,
        vec![1, 0, 1]
    );

    assert!(matches!(
        poll.make_results_public(q0, alice),
        Err(PollError::ResultsAlreadyPublic(_))
    ));

    // answering and publishing are independent
    submit(&mut poll, carol, 0, 2)?;
    assert_eq!(
        decrypt_counts(&poll, poll.coprocessor(), q0, respondent(99))?,
        vec![1, 0, 2]
    );
    assert!(!poll.is_question_public(QuestionId::new(1))?);
    assert_eq!(poll.event_log().inner().len(), 4);
    Ok(())
}

#[test]
fn test_out_of_range_question() -> Result<()> {
    let mut poll = default_poll()?;
    let count = poll.get_question_count();
    let q = QuestionId::new(count);

    assert!(matches!(
        submit(&mut poll, respondent(1), count, 0),
        Err(PollError::InvalidQuestion(_))
    ));
    assert!(matches!(
        poll.get_encrypted_counts(q),
        Err(PollError::InvalidQuestion(_))
    ));
    assert!(matches!(
        poll.has_answered(&respondent(1), q),
        Err(PollError::InvalidQuestion(_))
    ));
    assert!(matches!(
        poll.make_results_public(QuestionId::new(u8::MAX), respondent(1)),
        Err(PollError::InvalidQuestion(_))
    ));
    Ok(())
}

#[test]
fn test_fresh_counters_are_zero_handles() -> Result<()> {
    let poll = default_poll()?;
    for question in 0..poll.get_question_count() {
        let handles = poll.get_encrypted_counts(QuestionId::new(question))?;
        assert_eq!(handles.len(), MAX_OPTIONS);
        assert!(handles.iter().all(|h| h.is_zero()));
        let options = poll.get_option_count(QuestionId::new(question))? as usize;
        assert_eq!(tally(&poll, question)?, vec![0; options]);
    }
    Ok(())
}
