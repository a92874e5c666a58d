//! The game session state machine.
//!
//! `GameMachine` enforces every turn and resource-limit rule and delegates
//! all AI-dependent decisions to its [`Oracle`]. It performs no I/O of its
//! own and takes the session explicitly, so the transport layer owns
//! storage and this layer stays unit-testable with a mock oracle.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::oracle::Oracle;
use crate::session::{GamePhase, QaRecord, Session};

/// Outcome of a submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessResult {
    /// The guess named the target country; the session is won.
    Correct,
    /// Wrong guess, but at least one guess is left.
    Incorrect {
        /// Guesses still available after this one.
        guesses_remaining: u8,
    },
    /// Wrong guess and none left; the target is revealed.
    GameOver {
        /// Localized name of the target country.
        correct_answer: String,
    },
}

/// Drives one game per session through its four operations.
pub struct GameMachine<O> {
    oracle: O,
}

impl<O: Oracle> GameMachine<O> {
    /// Creates a machine backed by the given oracle.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Starts a new game, discarding whatever session the caller held.
    ///
    /// Infallible: the oracle contract guarantees a country even when the
    /// backing service is down.
    pub async fn new_game(&self) -> Session {
        let country = self.oracle.pick_country().await;
        tracing::info!(country = %country.localized_name, "starting new game");
        Session::new(country)
    }

    /// Asks a yes/no question about the target country.
    ///
    /// On success the activity log grows by exactly one record and
    /// `questions_remaining` drops by one. Every failure leaves the session
    /// untouched.
    ///
    /// # Errors
    ///
    /// `NoActiveGame`, `QuestionsExhausted`, `EmptyInput`, or
    /// `InvalidQuestion` when the oracle rejects the question's shape.
    pub async fn ask_question(
        &self,
        session: Option<&mut Session>,
        text: &str,
    ) -> Result<String> {
        let session = active(session)?;

        if session.questions_remaining == 0 {
            return Err(GameError::QuestionsExhausted);
        }

        let question = text.trim();
        if question.is_empty() {
            return Err(GameError::EmptyInput);
        }

        if !self
            .oracle
            .validate_question(question, &session.target_english_name)
            .await
        {
            return Err(GameError::InvalidQuestion);
        }

        let answer = self
            .oracle
            .answer_question(question, &session.target_english_name)
            .await;

        session.activity_log.push(QaRecord {
            question: question.to_string(),
            answer: answer.clone(),
        });
        session.questions_remaining -= 1;

        Ok(answer)
    }

    /// Requests a hint for the given category identifier.
    ///
    /// Each category is usable at most once per session; unknown categories
    /// are accepted and consume a slot like any other.
    ///
    /// # Errors
    ///
    /// `NoActiveGame`, `HintAlreadyUsed`, or `HintsExhausted`.
    pub async fn request_hint(
        &self,
        session: Option<&mut Session>,
        category: &str,
    ) -> Result<String> {
        let session = active(session)?;

        if session.hints_used.contains(category) {
            return Err(GameError::HintAlreadyUsed);
        }

        if session.hints_remaining == 0 {
            return Err(GameError::HintsExhausted);
        }

        let hint = self
            .oracle
            .hint(category, &session.target_english_name)
            .await;

        session.hints_used.insert(category.to_string());
        session.hints_remaining -= 1;

        Ok(hint)
    }

    /// Submits a guess at the target country's name.
    ///
    /// A correct guess wins the session and consumes nothing. A wrong guess
    /// spends one of the two slots; spending the last one ends the game and
    /// reveals the target's localized name.
    ///
    /// # Errors
    ///
    /// `NoActiveGame`, `GuessesExhausted`, or `EmptyInput`.
    pub async fn submit_guess(
        &self,
        session: Option<&mut Session>,
        text: &str,
    ) -> Result<GuessResult> {
        let session = active(session)?;

        if session.guesses_remaining == 0 {
            return Err(GameError::GuessesExhausted);
        }

        let guess = text.trim();
        if guess.is_empty() {
            return Err(GameError::EmptyInput);
        }

        let correct = self
            .oracle
            .validate_guess(
                guess,
                &session.target_english_name,
                &session.target_localized_name,
            )
            .await;

        if correct {
            session.phase = GamePhase::Won;
            return Ok(GuessResult::Correct);
        }

        session.guesses_remaining -= 1;
        if session.guesses_remaining == 0 {
            session.phase = GamePhase::Exhausted;
            Ok(GuessResult::GameOver {
                correct_answer: session.target_localized_name.clone(),
            })
        } else {
            Ok(GuessResult::Incorrect {
                guesses_remaining: session.guesses_remaining,
            })
        }
    }
}

fn active(session: Option<&mut Session>) -> Result<&mut Session> {
    session.ok_or(GameError::NoActiveGame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;
    use crate::session::{INITIAL_GUESSES, INITIAL_HINTS, INITIAL_QUESTIONS};
    use async_trait::async_trait;

    /// Scripted oracle: fixed country, configurable verdicts, canned texts.
    struct MockOracle {
        country: Country,
        accept_question: bool,
    }

    impl MockOracle {
        fn japan() -> Self {
            Self {
                country: Country::new("Japan", "日本", "https://flagcdn.com/h240/jp.png"),
                accept_question: true,
            }
        }

        fn rejecting_questions() -> Self {
            Self {
                accept_question: false,
                ..Self::japan()
            }
        }
    }

    #[async_trait]
    impl Oracle for MockOracle {
        async fn pick_country(&self) -> Country {
            self.country.clone()
        }

        async fn validate_question(&self, _question: &str, _country: &str) -> bool {
            self.accept_question
        }

        async fn answer_question(&self, _question: &str, _country: &str) -> String {
            "はい".to_string()
        }

        async fn hint(&self, category: &str, _country: &str) -> String {
            format!("hint about {}", category)
        }

        async fn validate_guess(&self, guess: &str, english: &str, localized: &str) -> bool {
            guess.eq_ignore_ascii_case(english) || guess == localized
        }
    }

    fn machine() -> GameMachine<MockOracle> {
        GameMachine::new(MockOracle::japan())
    }

    fn assert_invariants(session: &Session) {
        assert!(session.guesses_remaining <= INITIAL_GUESSES);
        assert!(session.questions_remaining <= INITIAL_QUESTIONS);
        assert!(session.hints_remaining <= INITIAL_HINTS);
        assert_eq!(
            session.hints_used.len(),
            (INITIAL_HINTS - session.hints_remaining) as usize
        );
    }

    #[tokio::test]
    async fn test_new_game_builds_fresh_session() {
        let machine = machine();
        let session = machine.new_game().await;

        assert_eq!(session.target_english_name, "Japan");
        assert_eq!(session.target_localized_name, "日本");
        assert_eq!(session.questions_remaining, INITIAL_QUESTIONS);
        assert_eq!(session.phase, GamePhase::Active);
        assert_invariants(&session);
    }

    #[tokio::test]
    async fn test_operations_require_active_game() {
        let machine = machine();

        assert_eq!(
            machine.ask_question(None, "Is it in Asia?").await,
            Err(GameError::NoActiveGame)
        );
        assert_eq!(
            machine.request_hint(None, "area").await,
            Err(GameError::NoActiveGame)
        );
        assert_eq!(
            machine.submit_guess(None, "Japan").await,
            Err(GameError::NoActiveGame)
        );
    }

    #[tokio::test]
    async fn test_ask_question_logs_and_decrements() {
        let machine = machine();
        let mut session = machine.new_game().await;

        let answer = machine
            .ask_question(Some(&mut session), " Is it in Asia? ")
            .await
            .unwrap();

        assert_eq!(answer, "はい");
        assert_eq!(session.questions_remaining, INITIAL_QUESTIONS - 1);
        assert_eq!(session.activity_log.len(), 1);
        assert_eq!(session.activity_log[0].question, "Is it in Asia?");
        assert_eq!(session.activity_log[0].answer, "はい");
        assert_invariants(&session);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected_without_side_effects() {
        let machine = machine();
        let mut session = machine.new_game().await;

        assert_eq!(
            machine.ask_question(Some(&mut session), "   ").await,
            Err(GameError::EmptyInput)
        );
        assert_eq!(session.questions_remaining, INITIAL_QUESTIONS);
        assert!(session.activity_log.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_question_shape_leaves_state_unchanged() {
        let machine = GameMachine::new(MockOracle::rejecting_questions());
        let mut session = machine.new_game().await;

        assert_eq!(
            machine
                .ask_question(Some(&mut session), "Is it Japan?")
                .await,
            Err(GameError::InvalidQuestion)
        );
        assert_eq!(session.questions_remaining, INITIAL_QUESTIONS);
        assert!(session.activity_log.is_empty());
    }

    #[tokio::test]
    async fn test_questions_exhaust_after_ten() {
        let machine = machine();
        let mut session = machine.new_game().await;

        for _ in 0..INITIAL_QUESTIONS {
            machine
                .ask_question(Some(&mut session), "Is it in Asia?")
                .await
                .unwrap();
        }
        assert_eq!(session.questions_remaining, 0);
        assert_eq!(session.activity_log.len(), INITIAL_QUESTIONS as usize);

        assert_eq!(
            machine
                .ask_question(Some(&mut session), "Is it in Asia?")
                .await,
            Err(GameError::QuestionsExhausted)
        );
        assert_eq!(session.activity_log.len(), INITIAL_QUESTIONS as usize);
        assert_invariants(&session);
    }

    #[tokio::test]
    async fn test_hint_categories_are_single_use() {
        let machine = machine();
        let mut session = machine.new_game().await;

        let hint = machine
            .request_hint(Some(&mut session), "staple-food")
            .await
            .unwrap();
        assert_eq!(hint, "hint about staple-food");
        assert_eq!(session.hints_remaining, INITIAL_HINTS - 1);
        assert_invariants(&session);

        assert_eq!(
            machine.request_hint(Some(&mut session), "staple-food").await,
            Err(GameError::HintAlreadyUsed)
        );
        assert_eq!(session.hints_remaining, INITIAL_HINTS - 1);
    }

    #[tokio::test]
    async fn test_hints_exhaust_after_three() {
        let machine = machine();
        let mut session = machine.new_game().await;

        for category in ["staple-food", "area", "language"] {
            machine
                .request_hint(Some(&mut session), category)
                .await
                .unwrap();
        }
        assert_eq!(session.hints_remaining, 0);
        assert_invariants(&session);

        assert_eq!(
            machine.request_hint(Some(&mut session), "population").await,
            Err(GameError::HintsExhausted)
        );
    }

    #[tokio::test]
    async fn test_correct_guess_wins_without_spending_a_slot() {
        let machine = machine();
        let mut session = machine.new_game().await;

        let result = machine
            .submit_guess(Some(&mut session), " japan ")
            .await
            .unwrap();

        assert_eq!(result, GuessResult::Correct);
        assert_eq!(session.guesses_remaining, INITIAL_GUESSES);
        assert_eq!(session.phase, GamePhase::Won);
        assert_invariants(&session);
    }

    #[tokio::test]
    async fn test_two_wrong_guesses_end_the_game_and_reveal_the_answer() {
        let machine = machine();
        let mut session = machine.new_game().await;

        let first = machine
            .submit_guess(Some(&mut session), "France")
            .await
            .unwrap();
        assert_eq!(
            first,
            GuessResult::Incorrect {
                guesses_remaining: 1
            }
        );
        assert_eq!(session.phase, GamePhase::Active);

        let second = machine
            .submit_guess(Some(&mut session), "Germany")
            .await
            .unwrap();
        assert_eq!(
            second,
            GuessResult::GameOver {
                correct_answer: "日本".to_string()
            }
        );
        assert_eq!(session.phase, GamePhase::Exhausted);
        assert_invariants(&session);

        assert_eq!(
            machine.submit_guess(Some(&mut session), "Japan").await,
            Err(GameError::GuessesExhausted)
        );
    }

    #[tokio::test]
    async fn test_blank_guess_is_rejected_without_spending_a_slot() {
        let machine = machine();
        let mut session = machine.new_game().await;

        assert_eq!(
            machine.submit_guess(Some(&mut session), "  ").await,
            Err(GameError::EmptyInput)
        );
        assert_eq!(session.guesses_remaining, INITIAL_GUESSES);
    }

    #[tokio::test]
    async fn test_questions_and_hints_stay_available_after_guesses_run_out() {
        // Reference behavior: running out of guesses blocks only guessing.
        let machine = machine();
        let mut session = machine.new_game().await;

        machine
            .submit_guess(Some(&mut session), "France")
            .await
            .unwrap();
        machine
            .submit_guess(Some(&mut session), "Germany")
            .await
            .unwrap();
        assert_eq!(session.phase, GamePhase::Exhausted);

        assert!(machine
            .ask_question(Some(&mut session), "Is it in Asia?")
            .await
            .is_ok());
        assert!(machine.request_hint(Some(&mut session), "area").await.is_ok());
    }
}
