//! A single-player blackjack (pontoon) round engine.
//!
//! The crate provides a [`Game`] type that runs one round at a time through
//! the `AwaitingBet -> PlayerTurn -> DealerTurn -> Resolved` state machine:
//! betting, the initial deal, the player's stick/twist decisions, the
//! dealer's fixed-threshold play, and payout settlement. The chip balance
//! lives on the [`Game`] and persists across rounds of a session.
//!
//! Prompting and rendering are deliberately outside the engine; see
//! `demos/cli.rs` for a terminal front end.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 100, 42);
//! game.place_bet(10).unwrap();
//! game.stick().unwrap();
//! let result = game.resolve().unwrap();
//! println!("{:?}, balance {}", result.outcome, result.chips);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, EmptyDeck, InvalidDecision, ResolveError};
pub use game::{Decision, Game, RoundState};
pub use hand::{DealerHand, Hand};
pub use options::GameOptions;
pub use result::{RoundOutcome, RoundResult};
