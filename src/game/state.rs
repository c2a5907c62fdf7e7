//! Round state types.

/// State of the current round.
///
/// One round runs `AwaitingBet -> PlayerTurn -> DealerTurn -> Resolved`;
/// [`Game::clear_round`](super::Game::clear_round) returns to `AwaitingBet`
/// for the next round of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for a bet to start the round.
    AwaitingBet,
    /// Waiting for the player's stick/twist decisions.
    PlayerTurn,
    /// Player is done; the dealer plays out their hand.
    DealerTurn,
    /// Round has ended; hands, totals, and outcome are final.
    Resolved,
}
