use crate::error::ResolveError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, RoundState};

impl Game {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// Reveals the hole card, then — unless the player is bust — the dealer
    /// twists while their adjusted total is below the stick threshold and
    /// sticks at or above it, regardless of the player's total. Outcome
    /// precedence:
    ///
    /// 1. Player bust: dealer wins, no payout.
    /// 2. Dealer bust or lower total: player wins, `2 * bet` credited.
    /// 3. Higher dealer total: dealer wins, no payout.
    /// 4. Equal totals: push, the stake is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn, or the
    /// deck runs out while the dealer must draw.
    pub fn resolve(&mut self) -> Result<RoundResult, ResolveError> {
        if self.state != RoundState::DealerTurn {
            return Err(ResolveError::InvalidState);
        }

        self.dealer.reveal_hole();

        if !self.player_bust {
            while self.dealer.total() < self.options.dealer_stick_threshold {
                let card = self.deck.deal()?;
                self.dealer.add_card(card);
            }
        }

        let player_total = self.player.total();
        let dealer_total = self.dealer.total();

        let outcome = if self.player_bust {
            RoundOutcome::DealerWin
        } else if dealer_total > 21 || dealer_total < player_total {
            RoundOutcome::PlayerWin
        } else if dealer_total > player_total {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        };

        let payout = match outcome {
            RoundOutcome::PlayerWin => self.bet * 2,
            RoundOutcome::Push => self.bet,
            RoundOutcome::DealerWin => 0,
        };

        self.chips += payout;

        let result = RoundResult {
            outcome,
            player_total,
            dealer_total,
            bet: self.bet,
            payout,
            chips: self.chips,
        };

        self.result = Some(result);
        self.state = RoundState::Resolved;

        Ok(result)
    }
}
