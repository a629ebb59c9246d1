// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{CoprocessorError, ExternalInput, Handle, InputProof, ProofContext};
use alloy_primitives::Address;

/// Boundary to the encrypted-computation service.
///
/// Every operation is data-independent from the caller's point of view: the caller only ever sees
/// handles, never the values behind them. Results are fresh handles and operands are never
/// mutated.
pub trait Coprocessor {
    /// Identifier of the confidential protocol this coprocessor serves
    fn protocol_id(&self) -> Result<u64, CoprocessorError>;

    /// Verify a client-encrypted input against its proof and bring it into the coprocessor.
    /// The proof must be bound to `ctx` and show the value is below `ctx.bound`.
    fn verify_and_ingest(
        &mut self,
        input: &ExternalInput,
        proof: &InputProof,
        ctx: &ProofContext,
    ) -> Result<Handle, CoprocessorError>;

    /// Encrypt a public constant
    fn trivial_encrypt(&mut self, value: u32) -> Result<Handle, CoprocessorError>;

    /// Encrypted boolean `lhs == rhs`
    fn eq_scalar(&mut self, lhs: &Handle, rhs: u32) -> Result<Handle, CoprocessorError>;

    /// Encrypted wrapping sum of two counters
    fn add(&mut self, lhs: &Handle, rhs: &Handle) -> Result<Handle, CoprocessorError>;

    /// Encrypted `if cond { if_true } else { if_false }`
    fn select(
        &mut self,
        cond: &Handle,
        if_true: &Handle,
        if_false: &Handle,
    ) -> Result<Handle, CoprocessorError>;

    /// Grant `account` the right to use and decrypt `handle`
    fn allow(&mut self, handle: &Handle, account: Address) -> Result<(), CoprocessorError>;

    /// Mark `handle` as decryptable by anyone
    fn grant_public_decrypt(&mut self, handle: &Handle) -> Result<(), CoprocessorError>;
}

/// Off-line decryption service honoring the access rules recorded by a [`Coprocessor`]
pub trait Decryptor {
    fn decrypt(&self, handle: &Handle, requester: Address) -> Result<u32, CoprocessorError>;
}
