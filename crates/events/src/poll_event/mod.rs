// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod answer_submitted;
mod results_made_public;

pub use answer_submitted::*;
pub use results_made_public::*;

use crate::{EventId, QuestionId};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public fields every poll event is indexed by.
pub trait EventSubject {
    /// The account that triggered the event
    fn actor(&self) -> Address;
    fn question_id(&self) -> QuestionId;
}

impl EventSubject for AnswerSubmitted {
    fn actor(&self) -> Address {
        self.respondent
    }

    fn question_id(&self) -> QuestionId {
        self.question_id
    }
}

impl EventSubject for ResultsMadePublic {
    fn actor(&self) -> Address {
        self.requester
    }

    fn question_id(&self) -> QuestionId {
        self.question_id
    }
}

/// Macro to help define From traits for PollEvent
macro_rules! impl_from_event {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for PollEvent {
                fn from(data: $variant) -> Self {
                    let question = [data.question_id().value()];
                    let id = EventId::from_parts(
                        stringify!($variant),
                        &[data.actor().as_slice(), question.as_slice()],
                    );
                    PollEvent::$variant { id, data }
                }
            }
        )*
    };
}

/// Append-only log entries consumed by indexers and UIs. Neither variant carries the chosen
/// option or any decrypted value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollEvent {
    AnswerSubmitted { id: EventId, data: AnswerSubmitted },
    ResultsMadePublic { id: EventId, data: ResultsMadePublic },
}

impl PollEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            PollEvent::AnswerSubmitted { .. } => "AnswerSubmitted",
            PollEvent::ResultsMadePublic { .. } => "ResultsMadePublic",
        }
    }

    pub fn get_id(&self) -> &EventId {
        match self {
            PollEvent::AnswerSubmitted { id, .. } => id,
            PollEvent::ResultsMadePublic { id, .. } => id,
        }
    }

    pub fn question_id(&self) -> QuestionId {
        match self {
            PollEvent::AnswerSubmitted { data, .. } => data.question_id,
            PollEvent::ResultsMadePublic { data, .. } => data.question_id,
        }
    }

    pub fn actor(&self) -> Address {
        match self {
            PollEvent::AnswerSubmitted { data, .. } => data.actor(),
            PollEvent::ResultsMadePublic { data, .. } => data.actor(),
        }
    }

    pub fn get_data(&self) -> String {
        match self {
            PollEvent::AnswerSubmitted { data, .. } => format!("{}", data),
            PollEvent::ResultsMadePublic { data, .. } => format!("{}", data),
        }
    }
}

impl fmt::Display for PollEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.event_type(), self.get_data())
    }
}

impl_from_event!(AnswerSubmitted, ResultsMadePublic);
