//! End-to-end session scenarios driven through a scripted prompt driver.

mod common;

use common::ScriptedDriver;
use flashcard_core::{
    run_session, Card, CardKind, Feedback, QuestionId, Session, SessionConfig, SessionError,
    SessionState, SessionSummary,
};
use pretty_assertions::assert_eq;

fn new_session() -> Session {
    Session::new(SessionConfig::default()).expect("default session")
}

#[tokio::test]
async fn create_basic_card_then_return_to_menu() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new(["create", "basic", "2+2?", "4"]);

    let summary = run_session(&mut session, &mut driver).await.unwrap();

    assert_eq!(summary.cards_created, 1);
    assert_eq!(session.store().len(), 3);
    assert_eq!(
        session.store().get(2).unwrap(),
        &Card::basic("2+2?", "4").unwrap()
    );

    let ids: Vec<_> = driver.asked.iter().map(|q| q.id).collect();
    assert_eq!(
        ids,
        vec![
            QuestionId::MainMenu,
            QuestionId::ChooseCardType,
            QuestionId::BasicFront,
            QuestionId::BasicBack,
            QuestionId::MainMenu,
        ]
    );
    assert_eq!(
        driver.feedback,
        vec![Feedback::CardCreated {
            kind: CardKind::Basic,
            index: 2
        }]
    );
}

#[tokio::test]
async fn cloze_target_rejected_then_accepted() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new([
        "create",
        "cloze",
        "Paris is the capital of France.",
        "Rome",
        "Paris",
    ]);

    run_session(&mut session, &mut driver).await.unwrap();

    let ids: Vec<_> = driver.asked.iter().map(|q| q.id).collect();
    assert_eq!(
        ids,
        vec![
            QuestionId::MainMenu,
            QuestionId::ChooseCardType,
            QuestionId::ClozeFull,
            QuestionId::ClozeTarget,
            QuestionId::ClozeTarget,
            QuestionId::MainMenu,
        ]
    );
    assert!(matches!(driver.feedback[0], Feedback::Rejected { .. }));
    assert_eq!(
        driver.feedback[1],
        Feedback::CardCreated {
            kind: CardKind::Cloze,
            index: 2
        }
    );
    assert_eq!(
        session.store().get(2).unwrap().prompt(),
        "... is the capital of France."
    );
}

#[tokio::test]
async fn quiz_seeded_basic_card() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new([
        "display",
        "1",
        "Franklin D. Roosevelt",
        "display",
        "1",
        "FRANKLIN D. ROOSEVELT",
        "display",
        "1",
        "roosevelt",
    ]);

    let summary = run_session(&mut session, &mut driver).await.unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            cards_created: 0,
            quizzed: 3,
            correct: 2,
        }
    );
    let verdicts: Vec<_> = driver
        .feedback
        .iter()
        .map(|f| matches!(f, Feedback::Evaluated { correct: true, .. }))
        .collect();
    assert_eq!(verdicts, vec![true, true, false]);
    assert_eq!(
        driver.asked_messages()[2],
        "Who was the US president at the beginning of WW2?"
    );
}

#[tokio::test]
async fn new_card_is_listed_on_next_display() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new(["create", "basic", "2+2?", "4", "display", "3", "4"]);

    let summary = run_session(&mut session, &mut driver).await.unwrap();
    assert_eq!(summary.correct, 1);

    let list = driver
        .asked
        .iter()
        .find(|q| q.id == QuestionId::SelectCard)
        .unwrap();
    assert_eq!(list.choices.len(), 3);
    assert_eq!(list.choices[2].label, "[Basic] 2+2?");
}

#[tokio::test]
async fn store_grows_by_number_of_commits() {
    let mut session = new_session();
    let initial = session.store().len();
    let mut driver = ScriptedDriver::new([
        "create", "basic", "a", "b", "create", "cloze", "x y z", "y", "create", "basic", "c", "d",
    ]);

    let summary = run_session(&mut session, &mut driver).await.unwrap();
    assert_eq!(summary.cards_created, 3);
    assert_eq!(session.store().snapshot().len(), initial + 3);
}

#[tokio::test]
async fn quit_ends_session() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new(["quit", "create"]);

    run_session(&mut session, &mut driver).await.unwrap();

    assert!(session.is_finished());
    assert_eq!(driver.asked.len(), 1);
    assert_eq!(driver.feedback, vec![Feedback::Goodbye]);
}

#[tokio::test]
async fn closed_input_mid_pair_discards_half() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new(["create", "cloze", "half a sentence"]);

    let summary = run_session(&mut session, &mut driver).await.unwrap();

    assert_eq!(summary.cards_created, 0);
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.store().len(), 2);
}

#[tokio::test]
async fn empty_basic_back_is_fatal() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new(["create", "basic", "front", ""]);

    let err = run_session(&mut session, &mut driver).await.unwrap_err();
    assert!(matches!(err, SessionError::InvariantViolation(_)));
    assert_eq!(session.store().len(), 2);
}

#[tokio::test]
async fn out_of_range_selection_is_fatal() {
    let mut session = new_session();
    let mut driver = ScriptedDriver::new(["display", "9"]);

    let err = run_session(&mut session, &mut driver).await.unwrap_err();
    assert!(matches!(err, SessionError::OutOfRange { index: 8, len: 2 }));
}
