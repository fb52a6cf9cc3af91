//! Hidden roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's hidden role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Does not know the secret word.
    Spy,
    /// Knows the secret word.
    Civilian,
}

impl Role {
    /// Check if this is the spy role.
    pub fn is_spy(self) -> bool {
        matches!(self, Self::Spy)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spy => write!(f, "spy"),
            Self::Civilian => write!(f, "civilian"),
        }
    }
}
