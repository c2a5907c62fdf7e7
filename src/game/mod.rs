//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Decision;
pub use state::RoundState;

/// A pontoon session: one player against the dealer, repeated rounds
/// sharing a chip balance.
///
/// The game owns the deck, both hands, and the chip balance. The deck and
/// hands are recreated at every round boundary; chips persist for the life
/// of the session. Use [`GameOptions`] to configure the dealer's stick
/// threshold.
pub struct Game {
    /// Cards remaining this round. Exposed so tests can install a known
    /// order before betting.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: RoundState,
    chips: usize,
    bet: usize,
    player: Hand,
    dealer: DealerHand,
    player_bust: bool,
    result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given starting chips and RNG seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pontoon::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 100, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, chips: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck,
            options,
            state: RoundState::AwaitingBet,
            chips,
            bet: 0,
            player: Hand::new(),
            dealer: DealerHand::new(),
            player_bust: false,
            result: None,
            rng,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the bet placed this round (0 while awaiting one).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the result of the last resolved round, if any.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns whether the player busted this round.
    #[must_use]
    pub const fn player_is_bust(&self) -> bool {
        self.player_bust
    }

    /// Credits chips to the balance, e.g. a buy-back after busting out.
    pub const fn deposit(&mut self, amount: usize) {
        self.chips += amount;
    }

    /// Ends the round: clears hands, bet, and result, rebuilds a fresh
    /// shuffled deck, and returns to `AwaitingBet`. Chips persist.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.bet = 0;
        self.player_bust = false;
        self.result = None;
        self.deck = Deck::shuffled(&mut self.rng);
        self.state = RoundState::AwaitingBet;
    }
}
