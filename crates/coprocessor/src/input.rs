// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side encrypted input as submitted by a respondent. It only becomes usable in homomorphic
/// arithmetic once the coprocessor has verified it and returned a [`crate::Handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalInput(B256);

impl ExternalInput {
    pub const fn new(inner: B256) -> Self {
        Self(inner)
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Display for ExternalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque validity proof accompanying an [`ExternalInput`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputProof(Bytes);

impl InputProof {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a proof must be bound to for the coprocessor to accept the input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProofContext {
    /// Address of the poll consuming the input
    pub contract: Address,
    /// Account submitting the input
    pub sender: Address,
    /// Exclusive upper bound the encrypted value is proven to respect
    pub bound: u32,
}
