// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{PollConfig, QuestionDefinition, MAX_OPTIONS};
use anyhow::{bail, Result};

/// Smallest number of options that still makes a choice
pub const MIN_OPTIONS: usize = 2;

/// Question ids are a single byte
pub const MAX_QUESTIONS: usize = u8::MAX as usize;

impl PollConfig {
    /// Check the catalog can be served by the fixed-width tally
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            bail!("The question catalog is empty. Configure at least one question.");
        }

        if self.questions.len() > MAX_QUESTIONS {
            bail!(
                "The question catalog holds {} questions but at most {} are supported.",
                self.questions.len(),
                MAX_QUESTIONS
            );
        }

        for (index, question) in self.questions.iter().enumerate() {
            validate_question(index, question)?;
        }

        Ok(())
    }
}

fn validate_question(index: usize, question: &QuestionDefinition) -> Result<()> {
    let count = question.option_count();
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
        bail!(
            "Question {} has {} options. Each question needs between {} and {} options.",
            index,
            count,
            MIN_OPTIONS,
            MAX_OPTIONS
        );
    }

    if question.prompt.trim().is_empty() {
        bail!("Question {} has an empty prompt.", index);
    }

    if let Some(option) = question.options.iter().position(|o| o.trim().is_empty()) {
        bail!("Question {} has an empty label for option {}.", index, option);
    }

    Ok(())
}
