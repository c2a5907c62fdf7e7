use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, InvalidDecision};

use super::{Game, RoundState};

/// The player's binary choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Twist,
    /// Decline further cards, ending the player's turn.
    Stick,
}

impl FromStr for Decision {
    type Err = InvalidDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "twist" => Ok(Self::Twist),
            "s" | "stick" => Ok(Self::Stick),
            _ => Err(InvalidDecision),
        }
    }
}

impl Game {
    /// Player action: twist (draw one card).
    ///
    /// A bust ends the player's turn immediately; no further twists are
    /// accepted and the dealer will not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn twist(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.deal()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.player_bust = true;
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: stick (decline further cards).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stick(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.state = RoundState::DealerTurn;

        Ok(())
    }

    /// Applies a parsed [`Decision`], returning the drawn card on a twist.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn decide(&mut self, decision: Decision) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Twist => self.twist().map(Some),
            Decision::Stick => self.stick().map(|()| None),
        }
    }
}
