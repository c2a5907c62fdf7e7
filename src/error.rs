//! Error types for game operations.
//!
//! Every failure here is a caller contract violation local to a single
//! round; the I/O boundary recovers by re-prompting, the engine itself
//! never retries.

use thiserror::Error;

/// The deck has no cards left to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeck;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A bet is only accepted while awaiting one.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount exceeds the chip balance.
    #[error("bet exceeds chip balance")]
    InsufficientChips,
    /// The deck cannot cover the initial deal.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur during the player's stick/twist turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player decision is pending.
    #[error("no player decision is pending")]
    InvalidState,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur while resolving the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The round is not ready to resolve.
    #[error("round is not ready to resolve")]
    InvalidState,
    /// The deck ran out of cards while the dealer had to draw.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Input did not parse as a stick/twist decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected one of 'twist' or 'stick'")]
pub struct InvalidDecision;
