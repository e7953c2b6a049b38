//! A player that plays rounds by consulting its strategies.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec;

use crate::error::PlayError;
use crate::round::{Action, PlayedHand, Round};
use crate::strategy::{BettingStrategy, GameStrategy};
use crate::table::Table;

/// A participant at a [`Table`].
///
/// The player owns its betting strategy (which may track wins and losses)
/// and shares its game strategy and table with other players.
pub struct Player {
    table: Arc<Table>,
    betting: Box<dyn BettingStrategy + Send>,
    game: Arc<dyn GameStrategy>,
    /// The last round played.
    round: Option<Round>,
}

impl Player {
    /// Creates a player seated at `table`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use shoebox::strategy::{Flat, Naive};
    /// use shoebox::{LogSink, Player, Table, TableOptions};
    ///
    /// let table = Arc::new(Table::new(TableOptions::default(), 7, LogSink));
    /// let mut player = Player::new(table, Box::new(Flat::new(2)), Arc::new(Naive));
    /// let round = player.game().unwrap();
    /// assert!(round.total_wagered() >= 2);
    /// ```
    #[must_use]
    pub fn new(
        table: Arc<Table>,
        betting: Box<dyn BettingStrategy + Send>,
        game: Arc<dyn GameStrategy>,
    ) -> Self {
        Self {
            table,
            betting,
            game,
            round: None,
        }
    }

    /// Returns the table this player is seated at.
    #[must_use]
    pub const fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Returns the last round played, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns every hand of the last round, two after a split, or none if
    /// no round has completed.
    #[must_use]
    pub fn hands(&self) -> &[PlayedHand] {
        self.round
            .as_ref()
            .map(|round| round.hands.as_slice())
            .unwrap_or_default()
    }

    /// Tells the betting strategy the last round was won.
    pub fn record_win(&mut self) {
        self.betting.record_win();
    }

    /// Tells the betting strategy the last round was lost.
    pub fn record_loss(&mut self) {
        self.betting.record_loss();
    }

    /// Plays one round.
    ///
    /// Places the strategy's bet, takes a hand from the table, insures it if
    /// the table offers insurance and the strategy agrees, then lets the game
    /// strategy split, double or hit. Dealer play and settlement are left to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the table refuses a bet or an insurance bet. The
    /// round ends at the first error.
    pub fn game(&mut self) -> Result<&Round, PlayError> {
        self.round = None;

        let bet = self.betting.bet();
        self.table.place_bet(bet)?;
        let mut hand = self.table.get_hand();

        let mut insurance = 0;
        if self.table.can_insure(&hand) && self.game.insurance(&hand) {
            insurance = (bet / 2).max(1);
            self.table.insure(insurance)?;
            log::debug!("insured {insurance} against {}", hand.dealer_card());
        }

        let split = hand.len() == 2 && self.game.split(&hand);
        let mut hands = if split {
            self.table.place_bet(bet)?;
            let fresh = [self.table.deal_card(), self.table.deal_card()];
            let [first, second] = hand.split(0, fresh)?;
            log::debug!("split into {first} and {second}");
            vec![PlayedHand::new(first, bet), PlayedHand::new(second, bet)]
        } else {
            vec![PlayedHand::new(hand, bet)]
        };

        for played in &mut hands {
            self.play_hand(played)?;
        }

        Ok(self.round.insert(Round {
            insurance,
            split,
            hands,
        }))
    }

    /// Doubles or hits one hand until the strategy stands or the hand busts.
    fn play_hand(&self, played: &mut PlayedHand) -> Result<(), PlayError> {
        if played.hand.len() == 2 && self.game.double(&played.hand) {
            self.table.place_bet(played.bet)?;
            played.bet = played.bet.saturating_mul(2);
            played.hand.append(self.table.deal_card());
            played.actions.push(Action::Double);
            log::debug!("doubled to {}: {}", played.bet, played.hand);
            return Ok(());
        }

        while !played.is_bust() && self.game.hit(&played.hand) {
            played.hand.append(self.table.deal_card());
            played.actions.push(Action::Hit);
        }

        if played.is_bust() {
            log::debug!("bust: {}", played.hand);
        } else {
            played.actions.push(Action::Stand);
            log::debug!("stand: {}", played.hand);
        }

        Ok(())
    }
}
