use crate::error::{BetError, EmptyDeck};

use super::{Game, RoundState};

/// Cards consumed by the initial deal: two each for player and dealer.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Places the bet for this round and deals the opening hands.
    ///
    /// Debits the bet from the chip balance and deals two cards each in
    /// the fixed interleave player, dealer, player, dealer, leaving the
    /// dealer's second card as the hidden hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already underway, the amount is zero
    /// or exceeds the chip balance, or the deck cannot cover the deal.
    /// Nothing is debited or dealt on failure.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientChips);
        }
        if self.deck.len() < INITIAL_DEAL {
            return Err(EmptyDeck.into());
        }

        self.chips -= amount;
        self.bet = amount;

        for _ in 0..2 {
            self.player.add_card(self.deck.deal()?);
            self.dealer.add_card(self.deck.deal()?);
        }

        self.state = RoundState::PlayerTurn;

        Ok(())
    }
}
