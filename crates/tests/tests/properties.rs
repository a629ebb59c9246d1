// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tally_coprocessor::CoprocessorError;
use tally_events::QuestionId;
use tally_poll::PollError;
use tally_tests::{default_poll, respondent, submit, tally};

#[derive(Clone, Debug)]
enum Op {
    Answer { who: u8, question: u8, choice: u32 },
    Publish { who: u8, question: u8 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..6, 0u8..5, 0u32..4).prop_map(|(who, question, choice)| Op::Answer {
            who,
            question,
            choice
        }),
        1 => (0u8..6, 0u8..5).prop_map(|(who, question)| Op::Publish { who, question }),
    ]
}

/// Replay `ops` against a poll and a plain model, checking every outcome
fn run(ops: &[Op]) -> Result<()> {
    let mut poll = default_poll()?;
    let option_counts: Vec<usize> = poll.catalog().iter().map(|q| q.option_count()).collect();

    let mut answered = BTreeSet::new();
    let mut published = BTreeSet::new();
    let mut histogram: HashMap<u8, Vec<u32>> = option_counts
        .iter()
        .enumerate()
        .map(|(q, n)| (q as u8, vec![0; *n]))
        .collect();

    for op in ops {
        match *op {
            Op::Answer {
                who,
                question,
                choice,
            } => {
                let res = submit(&mut poll, respondent(who), question, choice);
                if answered.contains(&(who, question)) {
                    let Err(PollError::AlreadyAnswered { .. }) = res else {
                        bail!("expected AlreadyAnswered, got {res:?}");
                    };
                } else if choice as usize >= option_counts[question as usize] {
                    let Err(PollError::Protocol(CoprocessorError::InvalidProof(_))) = res else {
                        bail!("expected InvalidProof, got {res:?}");
                    };
                } else {
                    res?;
                    answered.insert((who, question));
                    if let Some(counts) = histogram.get_mut(&question) {
                        counts[choice as usize] += 1;
                    }
                }
            }
            Op::Publish { who, question } => {
                let res = poll.make_results_public(QuestionId::new(question), respondent(who));
                if published.insert(question) {
                    res?;
                } else {
                    let Err(PollError::ResultsAlreadyPublic(_)) = res else {
                        bail!("expected ResultsAlreadyPublic, got {res:?}");
                    };
                }
            }
        }
    }

    for (question, expected) in &histogram {
        assert_eq!(&tally(&poll, *question)?, expected);
        let question_id = QuestionId::new(*question);
        assert_eq!(
            poll.is_question_public(question_id)?,
            published.contains(question)
        );
    }
    for who in 0..6 {
        for question in 0..5 {
            assert_eq!(
                poll.has_answered(&respondent(who), QuestionId::new(question))?,
                answered.contains(&(who, question))
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_tally_matches_first_answers(ops in prop::collection::vec(op(), 0..40)) {
        if let Err(e) = run(&ops) {
            return Err(TestCaseError::fail(format!("{e:#}")));
        }
    }
}
