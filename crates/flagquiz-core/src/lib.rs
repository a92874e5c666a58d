pub mod country;
pub mod error;
pub mod game;
pub mod hint;
pub mod oracle;
pub mod session;

// Re-export the types the transport layer works with directly
pub use country::Country;
pub use error::GameError;
pub use game::{GameMachine, GuessResult};
pub use hint::HintCategory;
pub use oracle::Oracle;
pub use session::{GamePhase, QaRecord, Session};
