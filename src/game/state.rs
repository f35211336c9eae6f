//! Round state.

/// Where the current round stands.
///
/// `NotStarted` → `PlayerTurn` on a new game; `PlayerTurn` → `Finished` on a
/// bust; `PlayerTurn` → `DealerTurn` → `Finished` on stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and an outcome is available.
    Finished,
}

impl RoundState {
    /// Returns whether a round has been dealt and not yet finished.
    #[must_use]
    pub const fn in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dealt_unfinished_rounds_are_in_progress() {
        assert!(!RoundState::NotStarted.in_progress());
        assert!(RoundState::PlayerTurn.in_progress());
        assert!(RoundState::DealerTurn.in_progress());
        assert!(!RoundState::Finished.in_progress());
    }
}
