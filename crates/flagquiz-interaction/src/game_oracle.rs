//! The oracle facade: Gemini-backed game decisions with fallback.
//!
//! `GameOracle` implements [`flagquiz_core::Oracle`] by building one prompt
//! per operation, sending it through a [`CompletionClient`], and
//! interpreting the reply. Any client failure or uninterpretable reply is
//! logged with the operation tag and absorbed into the fallback policy;
//! nothing infrastructure-shaped ever propagates to the game.

use async_trait::async_trait;
use strum_macros::Display;

use flagquiz_core::{Country, Oracle};

use crate::gemini_client::{CompletionClient, GeminiClient};
use crate::{fallback, parse, prompt};

/// Tag identifying which oracle operation a completion belongs to.
///
/// Fallback classification happens by this tag, never by inspecting the
/// prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OracleOp {
    PickCountry,
    ValidateQuestion,
    AnswerQuestion,
    Hint,
    ValidateGuess,
}

/// Oracle implementation combining the Gemini client and the fallback
/// policy behind the game-semantic operations.
pub struct GameOracle<C = GeminiClient> {
    client: C,
}

impl GameOracle<GeminiClient> {
    /// Builds the facade over a Gemini client configured from the
    /// environment.
    pub fn from_env() -> Self {
        Self::new(GeminiClient::from_env())
    }
}

impl<C: CompletionClient> GameOracle<C> {
    /// Builds the facade over an explicit completion client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Runs one completion, converting any failure into `None` after
    /// logging it. Exactly one attempt per call.
    async fn complete(&self, op: OracleOp, prompt: &str) -> Option<String> {
        match self.client.complete(prompt).await {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(operation = %op, error = %err, "oracle call failed; using fallback");
                None
            }
        }
    }
}

#[async_trait]
impl<C: CompletionClient> Oracle for GameOracle<C> {
    async fn pick_country(&self) -> Country {
        let Some(text) = self
            .complete(OracleOp::PickCountry, &prompt::pick_country())
            .await
        else {
            return fallback::pick_country();
        };

        match parse::parse_country_response(&text) {
            Ok(country) => {
                tracing::debug!(country = %country.localized_name, "oracle picked a country");
                country
            }
            Err(err) => {
                tracing::warn!(
                    operation = %OracleOp::PickCountry,
                    error = %err,
                    "uninterpretable country response; using fallback"
                );
                fallback::pick_country()
            }
        }
    }

    async fn validate_question(&self, question: &str, country: &str) -> bool {
        match self
            .complete(
                OracleOp::ValidateQuestion,
                &prompt::validate_question(question, country),
            )
            .await
        {
            Some(text) => parse::is_affirmative(&text),
            None => fallback::validate_question(),
        }
    }

    async fn answer_question(&self, question: &str, country: &str) -> String {
        match self
            .complete(
                OracleOp::AnswerQuestion,
                &prompt::answer_question(question, country),
            )
            .await
        {
            Some(text) => text.trim().to_string(),
            None => fallback::answer_question().to_string(),
        }
    }

    async fn hint(&self, category: &str, country: &str) -> String {
        match self
            .complete(OracleOp::Hint, &prompt::hint(category, country))
            .await
        {
            Some(text) => text.trim().to_string(),
            None => fallback::hint(category).to_string(),
        }
    }

    async fn validate_guess(&self, guess: &str, english: &str, localized: &str) -> bool {
        match self
            .complete(
                OracleOp::ValidateGuess,
                &prompt::validate_guess(guess, english, localized),
            )
            .await
        {
            Some(text) => parse::is_correct_verdict(&text),
            None => fallback::validate_guess(guess, english, localized),
        }
    }
}
