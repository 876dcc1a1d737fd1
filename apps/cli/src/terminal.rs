//! Line-oriented prompt driver for a terminal.

use async_trait::async_trait;
use flashcard_core::{
    Answer, Feedback, PromptDriver, Question, QuestionKind, Result, SessionError,
};
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

const PICK_A_CHOICE: &str = "Please pick one of the listed choices.";
use flashcard_core::prompt::EMPTY_TEXT_MESSAGE as ENTER_SOME_TEXT;

/// Renders questions to `output` and reads answers line by line from `input`.
///
/// Invalid answers (unknown choice, empty text, failed validator) are
/// re-asked here and never reach the session.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
}

impl TerminalDriver<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> TerminalDriver<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    async fn render(&mut self, question: &Question) -> io::Result<()> {
        let mut text = format!("? {}\n", question.message);
        for (idx, choice) in question.choices.iter().enumerate() {
            text.push_str(&format!("  {}) {}\n", idx + 1, choice.label));
        }
        text.push_str("> ");
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn say(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn ask_io(&mut self, question: &Question) -> io::Result<Option<Answer>> {
        loop {
            self.render(question).await?;
            let Some(input) = self.read_line().await? else {
                return Ok(None);
            };

            let accepted = match question.kind {
                QuestionKind::SingleChoice => question
                    .resolve_choice(&input)
                    .map(|choice| choice.value.clone())
                    .ok_or_else(|| PICK_A_CHOICE.to_string()),
                QuestionKind::FreeText if input.is_empty() => Err(ENTER_SOME_TEXT.to_string()),
                QuestionKind::FreeText => Ok(input),
                QuestionKind::ValidatedText => match &question.validator {
                    Some(validator) => validator
                        .check(&input)
                        .map(|()| input)
                        .map_err(|err| err.message),
                    None if input.is_empty() => Err(ENTER_SOME_TEXT.to_string()),
                    None => Ok(input),
                },
            };

            match accepted {
                Ok(value) => return Ok(Some(Answer::new(question.id, value))),
                Err(message) => {
                    tracing::debug!(question = ?question.id, "answer re-asked");
                    self.say(&format!(">> {message}")).await?;
                }
            }
        }
    }
}

#[async_trait]
impl<R, W> PromptDriver for TerminalDriver<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&mut self, question: &Question) -> Result<Option<Answer>> {
        self.ask_io(question).await.map_err(driver_error)
    }

    async fn notify(&mut self, feedback: &Feedback) -> Result<()> {
        self.say(&format!("{}\n", feedback.message()))
            .await
            .map_err(driver_error)
    }
}

fn driver_error(err: io::Error) -> SessionError {
    SessionError::Driver(err.to_string())
}
