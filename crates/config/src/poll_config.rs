// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Width of the fixed per-question counter array. No question may offer more options.
pub const MAX_OPTIONS: usize = 4;

/// Chain id of a local development node
pub const LOCAL_CHAIN_ID: u64 = 31337;

pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// Address of the first contract deployed by the default development account
pub const DEFAULT_POLL_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

/// One question of the static catalog
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QuestionDefinition {
    /// Short heading shown above the prompt
    #[serde(default)]
    pub theme: String,
    /// The question text
    pub prompt: String,
    /// Option labels in index order. The option count of the question is the length of this list.
    pub options: Vec<String>,
}

impl QuestionDefinition {
    pub fn new(theme: &str, prompt: &str, options: &[&str]) -> Self {
        Self {
            theme: theme.to_owned(),
            prompt: prompt.to_owned(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Deployment configuration for a poll
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    /// Chain the poll is deployed on. Selects the confidential protocol of the coprocessor.
    pub chain_id: u64,
    /// Address the poll runs under. Encrypted inputs are bound to it.
    pub poll_address: Address,
    /// The static question catalog, indexed by position
    pub questions: Vec<QuestionDefinition>,
}

impl PollConfig {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            chain_id: LOCAL_CHAIN_ID,
            poll_address: DEFAULT_POLL_ADDRESS,
            questions: default_questions(),
        }
    }
}

/// The survey catalog shipped with the poll: five questions with `[3, 4, 3, 3, 3]` options.
pub fn default_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::new(
            "Zama Focus",
            "What is Zama best known for in web3 today?",
            &[
                "Fully Homomorphic Encryption (FHE)",
                "Layer-2 bridging",
                "NFT marketplaces",
            ],
        ),
        QuestionDefinition::new(
            "FHE Fundamentals",
            "Which statement best describes FHE?",
            &[
                "It allows computation on encrypted data without decryption",
                "It hides block timestamps from validators",
                "It stores private keys on-chain",
                "It compresses calldata for cheaper gas",
            ],
        ),
        QuestionDefinition::new(
            "Network",
            "Which network does this FHEVM demo target?",
            &["Ethereum Sepolia", "Polygon mainnet", "Base Sepolia"],
        ),
        QuestionDefinition::new(
            "Relayer",
            "What does the Relayer SDK handle for users?",
            &[
                "Ciphertext registration and proofs",
                "Gas fee refunds",
                "Token swaps",
            ],
        ),
        QuestionDefinition::new(
            "Privacy",
            "Which part of the survey stays encrypted on-chain?",
            &[
                "Each selected answer",
                "Only the question text",
                "The wallet address",
            ],
        ),
    ]
}
