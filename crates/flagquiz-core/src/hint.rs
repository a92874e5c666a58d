//! Hint categories a player may spend a hint slot on.

use strum_macros::{Display, EnumString};

/// The fixed set of hint topics.
///
/// Categories arrive from the caller as strings; unknown strings are still
/// accepted by the oracle facade (they resolve to a generic placeholder
/// hint) and still consume a hint slot, so this enum only covers the
/// categories with dedicated prompt and fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum HintCategory {
    /// The country's staple food.
    #[strum(serialize = "staple-food")]
    StapleFood,
    /// The country's land area, compared to Japan.
    #[strum(serialize = "area")]
    Area,
    /// The country's official language.
    #[strum(serialize = "language")]
    Language,
}
