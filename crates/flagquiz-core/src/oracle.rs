//! The oracle capability the game depends on.

use async_trait::async_trait;

use crate::country::Country;

/// AI-backed decisions the game delegates.
///
/// Implementations must be infallible: when the backing service is
/// unreachable, unconfigured, or returns uninterpretable text, they fall
/// back to substitute data instead of erroring. The state machine therefore
/// never handles infrastructure failures.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Picks a target country for a new game.
    async fn pick_country(&self) -> Country;

    /// Checks that a question is answerable yes/no and does not directly
    /// name the target country.
    async fn validate_question(&self, question: &str, country: &str) -> bool;

    /// Answers a yes/no question about the country. The reply is expected
    /// to be "はい" or "いいえ" but is passed through as-is.
    async fn answer_question(&self, question: &str, country: &str) -> String;

    /// Produces a hint sentence for the given category identifier. Unknown
    /// categories resolve to a generic placeholder, not an error.
    async fn hint(&self, category: &str, country: &str) -> String;

    /// Grades a guess against the target's English and localized names.
    async fn validate_guess(&self, guess: &str, english: &str, localized: &str) -> bool;
}
