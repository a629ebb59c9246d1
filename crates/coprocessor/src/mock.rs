// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    protocol_id_for_chain, Acl, Coprocessor, CoprocessorError, Decryptor, ExternalInput, Handle,
    InputProof, ProofContext,
};
use alloy_primitives::{keccak256, Address, B256};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::HashMap;
use tracing::trace;

const EUINT32: &str = "euint32";
const EBOOL: &str = "ebool";

/// Kind of operation performed. Recorded without operands so that a trace shows what was
/// computed and never what was computed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    VerifyInput,
    TrivialEncrypt,
    EqScalar,
    Add,
    Select,
    Allow,
    GrantPublicDecrypt,
}

impl OpKind {
    fn tag(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plaintext {
    U32(u32),
    Bool(bool),
}

/// Compute the proof a well-behaved client attaches to `input` for `ctx`
pub fn input_proof(input: &ExternalInput, ctx: &ProofContext) -> InputProof {
    let mut preimage = Vec::with_capacity(32 + 20 + 20 + 4);
    preimage.extend_from_slice(input.as_slice());
    preimage.extend_from_slice(ctx.contract.as_slice());
    preimage.extend_from_slice(ctx.sender.as_slice());
    preimage.extend_from_slice(&ctx.bound.to_be_bytes());
    InputProof::new(keccak256(preimage).to_vec())
}

/// In-process coprocessor that keeps plaintexts behind handles.
///
/// It enforces what a real deployment enforces at the boundary: proofs bound to contract and
/// sender, range checks, operand types, and the access list on decryption. Handle values are
/// derived from a seeded rng so runs are reproducible.
#[derive(Debug, Clone)]
pub struct MockCoprocessor {
    chain_id: u64,
    rng: ChaCha20Rng,
    nonce: u64,
    inputs: HashMap<ExternalInput, u32>,
    values: HashMap<Handle, Plaintext>,
    acl: Acl,
    trace: Vec<OpKind>,
}

impl MockCoprocessor {
    pub fn new(chain_id: u64) -> Self {
        Self::with_seed(chain_id, 0)
    }

    pub fn with_seed(chain_id: u64, seed: u64) -> Self {
        Self {
            chain_id,
            rng: ChaCha20Rng::seed_from_u64(seed),
            nonce: 0,
            inputs: HashMap::new(),
            values: HashMap::new(),
            acl: Acl::new(),
            trace: Vec::new(),
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Client side encryption of `value` for `sender` submitting to `contract`, proven below
    /// `bound`. The value is not checked here so tests can produce out of range inputs.
    pub fn encrypt_input(
        &mut self,
        contract: Address,
        sender: Address,
        value: u32,
        bound: u32,
    ) -> (ExternalInput, InputProof) {
        let mut bytes = [0u8; 32];
        self.rng.fill_bytes(&mut bytes);
        let input = ExternalInput::new(B256::from(bytes));
        self.inputs.insert(input, value);
        let proof = input_proof(
            &input,
            &ProofContext {
                contract,
                sender,
                bound,
            },
        );
        (input, proof)
    }

    pub fn acl(&self) -> &Acl {
        &self.acl
    }

    /// Operations performed so far, in order
    pub fn trace(&self) -> &[OpKind] {
        &self.trace
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    fn record(&mut self, op: OpKind) {
        trace!(?op, "coprocessor op");
        self.trace.push(op);
    }

    fn store(&mut self, op: OpKind, value: Plaintext, operands: &[&Handle]) -> Handle {
        self.nonce += 1;
        let mut preimage = Vec::with_capacity(1 + 8 + 32 * operands.len());
        preimage.push(op.tag());
        preimage.extend_from_slice(&self.nonce.to_be_bytes());
        for operand in operands {
            preimage.extend_from_slice(operand.as_slice());
        }
        let handle = Handle::new(keccak256(preimage));
        self.values.insert(handle, value);
        handle
    }

    fn load(&self, handle: &Handle) -> Result<Plaintext, CoprocessorError> {
        if handle.is_zero() {
            return Err(CoprocessorError::UninitializedHandle);
        }
        self.values
            .get(handle)
            .copied()
            .ok_or(CoprocessorError::UnknownHandle(*handle))
    }

    fn load_u32(&self, handle: &Handle) -> Result<u32, CoprocessorError> {
        match self.load(handle)? {
            Plaintext::U32(v) => Ok(v),
            Plaintext::Bool(_) => Err(CoprocessorError::TypeMismatch {
                handle: *handle,
                expected: EUINT32,
            }),
        }
    }

    fn load_bool(&self, handle: &Handle) -> Result<bool, CoprocessorError> {
        match self.load(handle)? {
            Plaintext::Bool(v) => Ok(v),
            Plaintext::U32(_) => Err(CoprocessorError::TypeMismatch {
                handle: *handle,
                expected: EBOOL,
            }),
        }
    }
}

impl Coprocessor for MockCoprocessor {
    fn protocol_id(&self) -> Result<u64, CoprocessorError> {
        protocol_id_for_chain(self.chain_id)
    }

    fn verify_and_ingest(
        &mut self,
        input: &ExternalInput,
        proof: &InputProof,
        ctx: &ProofContext,
    ) -> Result<Handle, CoprocessorError> {
        self.record(OpKind::VerifyInput);

        if input_proof(input, ctx) != *proof {
            return Err(CoprocessorError::InvalidProof(
                "proof is not bound to this input, contract and sender".to_string(),
            ));
        }

        let value = *self.inputs.get(input).ok_or_else(|| {
            CoprocessorError::UnsupportedCiphertext(format!("input {input} was never registered"))
        })?;

        if value >= ctx.bound {
            return Err(CoprocessorError::InvalidProof(format!(
                "encrypted value is not below {}",
                ctx.bound
            )));
        }

        let handle = self.store(OpKind::VerifyInput, Plaintext::U32(value), &[]);
        self.acl.allow(handle, ctx.contract);
        Ok(handle)
    }

    fn trivial_encrypt(&mut self, value: u32) -> Result<Handle, CoprocessorError> {
        self.record(OpKind::TrivialEncrypt);
        Ok(self.store(OpKind::TrivialEncrypt, Plaintext::U32(value), &[]))
    }

    fn eq_scalar(&mut self, lhs: &Handle, rhs: u32) -> Result<Handle, CoprocessorError> {
        self.record(OpKind::EqScalar);
        let value = self.load_u32(lhs)?;
        Ok(self.store(OpKind::EqScalar, Plaintext::Bool(value == rhs), &[lhs]))
    }

    fn add(&mut self, lhs: &Handle, rhs: &Handle) -> Result<Handle, CoprocessorError> {
        self.record(OpKind::Add);
        let sum = self.load_u32(lhs)?.wrapping_add(self.load_u32(rhs)?);
        Ok(self.store(OpKind::Add, Plaintext::U32(sum), &[lhs, rhs]))
    }

    fn select(
        &mut self,
        cond: &Handle,
        if_true: &Handle,
        if_false: &Handle,
    ) -> Result<Handle, CoprocessorError> {
        self.record(OpKind::Select);
        let cond_value = self.load_bool(cond)?;
        // both branches are type checked whatever the condition
        let a = self.load_u32(if_true)?;
        let b = self.load_u32(if_false)?;
        let value = if cond_value { a } else { b };
        Ok(self.store(
            OpKind::Select,
            Plaintext::U32(value),
            &[cond, if_true, if_false],
        ))
    }

    fn allow(&mut self, handle: &Handle, account: Address) -> Result<(), CoprocessorError> {
        self.record(OpKind::Allow);
        self.load(handle)?;
        self.acl.allow(*handle, account);
        Ok(())
    }

    fn grant_public_decrypt(&mut self, handle: &Handle) -> Result<(), CoprocessorError> {
        self.record(OpKind::GrantPublicDecrypt);
        self.load(handle)?;
        self.acl.make_public(*handle);
        Ok(())
    }
}

impl Decryptor for MockCoprocessor {
    fn decrypt(&self, handle: &Handle, requester: Address) -> Result<u32, CoprocessorError> {
        let value = self.load_u32(handle)?;
        if !self.acl.can_decrypt(handle, &requester) {
            return Err(CoprocessorError::DecryptionNotAllowed {
                handle: *handle,
                requester,
            });
        }
        Ok(value)
    }
}
