//! Events fed into a [`RevealSession`](crate::RevealSession) and the actions
//! it returns.
//!
//! The presentation layer turns taps into events and renders the actions; it
//! never reads the role layout itself.

use crate::reveal::OwnedRoleView;

/// User-initiated events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// Current player taps to see their role.
    Reveal,
    /// Current player hides the role and passes the device on.
    Advance,
}

/// Actions for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    /// Show a role privately to the current player.
    ShowRole {
        /// Zero-based player slot.
        player: usize,
        /// What the player may see.
        view: OwnedRoleView,
    },

    /// Hide everything and ask for the device to be passed.
    PromptPass {
        /// Zero-based slot of the player who should take the device.
        player: usize,
        /// Total number of players.
        total: usize,
    },

    /// Every player has seen their role; discussion can start.
    Finished {
        /// Total number of players.
        total: usize,
    },
}
