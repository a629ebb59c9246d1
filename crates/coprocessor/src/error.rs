// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::Handle;
use alloy_primitives::Address;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoprocessorError {
    #[error("Input proof rejected: {0}")]
    InvalidProof(String),

    #[error("Unsupported ciphertext: {0}")]
    UnsupportedCiphertext(String),

    #[error("Unknown handle {0}")]
    UnknownHandle(Handle),

    #[error("Handle {handle} does not hold an {expected}")]
    TypeMismatch {
        handle: Handle,
        expected: &'static str,
    },

    #[error("Cannot operate on an uninitialized handle")]
    UninitializedHandle,

    #[error("{requester} is not allowed to decrypt {handle}")]
    DecryptionNotAllowed { handle: Handle, requester: Address },

    #[error("No confidential protocol is deployed on chain {chain_id}")]
    ProtocolUnsupported { chain_id: u64 },
}
