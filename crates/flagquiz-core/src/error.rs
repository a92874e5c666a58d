//! Error types for the flag quiz game core.

use thiserror::Error;

/// Domain failures surfaced to the player.
///
/// Every variant is an expected game-rule rejection, not an infrastructure
/// problem; oracle transport failures are absorbed below the [`crate::Oracle`]
/// boundary and never appear here. Display strings are the user-facing
/// Japanese messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No session exists; the player has not started a game.
    #[error("ゲームが開始されていません")]
    NoActiveGame,

    /// The submitted question or guess was blank after trimming.
    #[error("入力が空です。内容を入力してください")]
    EmptyInput,

    /// The oracle rejected the question's shape.
    #[error("質問は Yes/No で回答できる形式で、答えに直結しない内容にしてください。")]
    InvalidQuestion,

    /// All 10 questions have been spent.
    #[error("質問回数が残っていません")]
    QuestionsExhausted,

    /// All 3 hints have been spent.
    #[error("ヒントは3回まで使用できます")]
    HintsExhausted,

    /// The requested hint category was already used this session.
    #[error("このヒントは既に使用されています")]
    HintAlreadyUsed,

    /// Both guesses have been spent.
    #[error("回答回数が残っていません")]
    GuessesExhausted,
}

/// A type alias for `Result<T, GameError>`.
pub type Result<T> = std::result::Result<T, GameError>;
