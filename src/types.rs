//! Newtype wrappers and board constants shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of points on the Twelve Men's Morris board.
pub const BOARD_SIZE: usize = 24;

/// Pieces each player starts with in hand.
pub const PIECES_PER_PLAYER: usize = 12;

/// A validated board snapshot key.
///
/// Encodes the 24 cells of a board as a fixed-width string ('X', 'O', '.')
/// so that (state, action) pairs can be used as Q-table keys and round-trip
/// exactly through serialization. The snapshot deliberately excludes the
/// side to move, phase, and piece counts.
///
/// # Examples
///
/// ```
/// use morris::morris::GameState;
/// use morris::types::BoardKey;
///
/// let state = GameState::new();
/// let key = BoardKey::from(&state);
/// assert_eq!(key.as_str(), "........................");
///
/// // Parse from string (validates the format)
/// let key = BoardKey::parse("XO......................").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(String);

impl BoardKey {
    /// Parse and validate a board snapshot from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly 24 cells of
    /// 'X', 'O', or '.'.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        crate::morris::board::decode_cells(s)?;
        Ok(BoardKey(s.to_string()))
    }

    /// Create from a known-valid encoding (for internal use).
    pub(crate) fn from_encoding(encoding: String) -> Self {
        BoardKey(encoding)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BoardKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&crate::morris::GameState> for BoardKey {
    fn from(state: &crate::morris::GameState) -> Self {
        BoardKey(state.encode())
    }
}
