// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a value held by the coprocessor.
///
/// Handles are immutable: every homomorphic operation yields a new handle. There is deliberately
/// no arithmetic on this type, only the operations of [`crate::Coprocessor`] can combine values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(B256);

impl Handle {
    /// The uninitialized handle. A counter nothing was ever folded into reads back as this value
    /// and stands for a count of zero.
    pub const ZERO: Handle = Handle(B256::ZERO);

    pub const fn new(inner: B256) -> Self {
        Self(inner)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<B256> for Handle {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl From<Handle> for B256 {
    fn from(value: Handle) -> Self {
        value.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
