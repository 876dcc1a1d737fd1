//! Shared helpers for session integration tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use flashcard_core::{Answer, Feedback, PromptDriver, Question, Result};

/// Driver that replays canned answers and records everything it saw.
///
/// Each scripted value answers whichever question is asked next. When the
/// script runs out the driver reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    script: VecDeque<String>,
    pub asked: Vec<Question>,
    pub feedback: Vec<Feedback>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Message of every question asked, in order.
    pub fn asked_messages(&self) -> Vec<&str> {
        self.asked.iter().map(|q| q.message.as_str()).collect()
    }
}

#[async_trait]
impl PromptDriver for ScriptedDriver {
    async fn ask(&mut self, question: &Question) -> Result<Option<Answer>> {
        self.asked.push(question.clone());
        Ok(self
            .script
            .pop_front()
            .map(|value| Answer::new(question.id, value)))
    }

    async fn notify(&mut self, feedback: &Feedback) -> Result<()> {
        self.feedback.push(feedback.clone());
        Ok(())
    }
}
