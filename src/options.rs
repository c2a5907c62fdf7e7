//! Game configuration options.

/// Adjusted total at or above which the dealer stops twisting.
pub const DEFAULT_DEALER_STICK_THRESHOLD: u8 = 17;

/// Configuration options for a pontoon game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pontoon::GameOptions;
///
/// let options = GameOptions::default().with_dealer_stick_threshold(16);
/// assert_eq!(options.dealer_stick_threshold, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer twists below this total and sticks at or above it,
    /// regardless of the player's total.
    pub dealer_stick_threshold: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stick_threshold: DEFAULT_DEALER_STICK_THRESHOLD,
        }
    }
}

impl GameOptions {
    /// Sets the dealer stick threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stick_threshold(18);
    /// assert_eq!(options.dealer_stick_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stick_threshold(mut self, threshold: u8) -> Self {
        self.dealer_stick_threshold = threshold;
        self
    }
}
