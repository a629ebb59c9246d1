// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::PollError;
use anyhow::{Context, Result};
use tally_config::{PollConfig, QuestionDefinition};
use tally_events::QuestionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    theme: String,
    prompt: String,
    options: Vec<String>,
}

impl Question {
    fn new(id: QuestionId, definition: &QuestionDefinition) -> Self {
        Self {
            id,
            theme: definition.theme.clone(),
            prompt: definition.prompt.clone(),
            options: definition.options.clone(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

/// Static question catalog. Question ids are positions in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn from_config(config: &PollConfig) -> Result<Self> {
        config.validate().context("Invalid question catalog")?;

        let questions = config
            .questions
            .iter()
            .enumerate()
            .map(|(index, definition)| -> Result<Question> {
                let id = u8::try_from(index)
                    .with_context(|| format!("Question index {index} does not fit a question id"))?;
                Ok(Question::new(QuestionId::new(id), definition))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { questions })
    }

    pub fn question(&self, id: QuestionId) -> Result<&Question, PollError> {
        self.questions
            .get(id.index())
            .ok_or(PollError::InvalidQuestion(id))
    }

    pub fn question_count(&self) -> u8 {
        // validated to fit on construction
        self.questions.len() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
