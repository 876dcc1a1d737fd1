//! Prompt driver boundary and the session loop that talks to it.

use crate::error::Result;
use crate::prompt::{Answer, Feedback, Question};
use crate::session::Session;
use async_trait::async_trait;
use serde::Serialize;

/// Issues one question at a time to the user.
///
/// `ask` suspends until the user answers. Returning `Ok(None)` means the
/// input was closed and the session should end.
#[async_trait]
pub trait PromptDriver: Send {
    async fn ask(&mut self, question: &Question) -> Result<Option<Answer>>;

    async fn notify(&mut self, feedback: &Feedback) -> Result<()>;
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub cards_created: usize,
    pub quizzed: usize,
    pub correct: usize,
}

/// Run `session` against `driver` until the user quits or input closes.
///
/// Strictly sequential: the next question is built only after the previous
/// answer has been fully handled. Any error ends the loop.
pub async fn run_session<D>(session: &mut Session, driver: &mut D) -> Result<SessionSummary>
where
    D: PromptDriver + ?Sized,
{
    let created = session.subscribe();
    let mut summary = SessionSummary::default();
    tracing::info!(cards = session.store().len(), "session started");

    let mut next = session.question()?;
    while let Some(question) = next {
        let Some(answer) = driver.ask(&question).await? else {
            tracing::info!("input closed");
            session.close();
            break;
        };

        let step = session.handle(answer)?;
        if let Some(feedback) = &step.feedback {
            if let Feedback::Evaluated { correct, .. } = feedback {
                summary.quizzed += 1;
                if *correct {
                    summary.correct += 1;
                }
            }
            driver.notify(feedback).await?;
        }
        next = step.next;
    }

    summary.cards_created = created.try_iter().count();
    tracing::info!(
        cards_created = summary.cards_created,
        quizzed = summary.quizzed,
        correct = summary.correct,
        "session finished"
    );
    Ok(summary)
}
