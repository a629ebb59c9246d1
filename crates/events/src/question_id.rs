// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a survey question. Questions live in a small fixed range `[0, Q)` defined by the
/// catalog, so the id is a single byte as it is on chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(u8);

impl QuestionId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Position of the question within catalog-ordered collections
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for QuestionId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<QuestionId> for u8 {
    fn from(value: QuestionId) -> Self {
        value.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
