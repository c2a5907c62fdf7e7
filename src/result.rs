//! Round result types.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or has the lower total). Pays 1:1.
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Equal totals. The stake is returned, net zero.
    Push,
}

/// Result of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final adjusted total.
    pub player_total: u8,
    /// The dealer's final adjusted total. When the player busts the dealer
    /// never draws, so this is the total of the two dealt cards.
    pub dealer_total: u8,
    /// The bet placed this round.
    pub bet: usize,
    /// Chips credited back at resolution: `2 * bet` on a win, `bet` on a
    /// push, `0` on a loss (the bet itself was debited at placement).
    pub payout: usize,
    /// The chip balance after settlement.
    pub chips: usize,
}
