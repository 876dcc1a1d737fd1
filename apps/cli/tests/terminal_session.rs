//! Full sessions driven through the terminal driver over in-memory buffers.

use flashcard_core::{run_session, Session, SessionConfig};
use flashcards_cli::terminal::TerminalDriver;

async fn play(input: &'static str) -> (Session, String) {
    let mut session = Session::new(SessionConfig::default()).expect("session");
    let mut driver = TerminalDriver::new(input.as_bytes(), Vec::new());
    run_session(&mut session, &mut driver).await.expect("session run");
    let output = String::from_utf8(driver.into_inner().1).expect("utf8 output");
    (session, output)
}

#[tokio::test]
async fn create_cloze_card_and_quiz_it() {
    let input = "create\n\
                 cloze\n\
                 Paris is the capital of France.\n\
                 Rome\n\
                 Paris\n\
                 display\n\
                 3\n\
                 paris\n\
                 quit\n";
    let (session, output) = play(input).await;

    assert!(session.is_finished());
    assert_eq!(session.store().len(), 3);
    assert!(output.contains(">> Invalid input!"));
    assert!(output.contains(" - Cloze Card was created!"));
    assert!(output.contains("  3) [Cloze] ... is the capital of France."));
    assert!(output.contains("? ... is the capital of France.\n> "));
    assert!(output.contains(" - Great job!"));
    assert!(output.ends_with(" - Bye!\n\n"));
}

#[tokio::test]
async fn wrong_answer_shows_expected() {
    let (_, output) = play("2\n1\nroosevelt\n").await;
    assert!(output.contains(" - ...not this time! The answer was: Franklin D. Roosevelt"));
}

#[tokio::test]
async fn end_of_input_finishes_cleanly() {
    let (session, output) = play("1\n1\nhalf").await;
    // "half" has no newline but is still a full line at end of input.
    assert_eq!(session.store().len(), 2);
    assert!(output.contains("What is the 'back' text of the Basic card?"));
}
