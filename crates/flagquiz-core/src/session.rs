//! Session domain model.
//!
//! A [`Session`] is the "pure" per-game state the game logic operates on.
//! It carries no behavior beyond construction and invariant-preserving
//! accessors: all mutation happens through the operations of
//! [`crate::game::GameMachine`], and the caller owns the value outright
//! (no internal persistence).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::country::Country;

/// Guesses granted per game.
pub const INITIAL_GUESSES: u8 = 2;
/// Yes/no questions granted per game.
pub const INITIAL_QUESTIONS: u8 = 10;
/// Hints granted per game.
pub const INITIAL_HINTS: u8 = 3;

/// Lifecycle phase of a session.
///
/// The phase is bookkeeping for the caller's rendering; it never gates
/// questions or hints. Guessing is gated by `guesses_remaining` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The game is in progress.
    Active,
    /// A guess validated as correct.
    Won,
    /// Both guesses were spent without a correct one.
    Exhausted,
}

/// One question/answer exchange in the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaRecord {
    /// The player's question, as submitted (trimmed).
    pub question: String,
    /// The oracle's answer text.
    pub answer: String,
}

/// State of one flag-guessing game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Canonical English name of the target country.
    pub target_english_name: String,
    /// Localized (Japanese) name of the target country.
    pub target_localized_name: String,
    /// Flag image URI shown to the player.
    pub flag_url: String,
    /// Guesses left, counting down from [`INITIAL_GUESSES`].
    pub guesses_remaining: u8,
    /// Questions left, counting down from [`INITIAL_QUESTIONS`].
    pub questions_remaining: u8,
    /// Hints left, counting down from [`INITIAL_HINTS`].
    pub hints_remaining: u8,
    /// Hint category identifiers already spent; each at most once.
    pub hints_used: BTreeSet<String>,
    /// Chronological question/answer log, append-only.
    pub activity_log: Vec<QaRecord>,
    /// Current lifecycle phase.
    pub phase: GamePhase,
}

impl Session {
    /// Creates a fresh session for the given target country, with all
    /// counters at their initial values and an empty log and hint set.
    pub fn new(country: Country) -> Self {
        Self {
            target_english_name: country.english_name,
            target_localized_name: country.localized_name,
            flag_url: country.flag_url,
            guesses_remaining: INITIAL_GUESSES,
            questions_remaining: INITIAL_QUESTIONS,
            hints_remaining: INITIAL_HINTS,
            hints_used: BTreeSet::new(),
            activity_log: Vec::new(),
            phase: GamePhase::Active,
        }
    }
}
