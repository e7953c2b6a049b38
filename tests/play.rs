//! Table, strategy and player tests.

use std::sync::Arc;

use shoebox::strategy::{BettingStrategy, Flat, GameStrategy, Martingale, Naive};
use shoebox::{
    Action, BetError, Card, Deck, Hand, InsuranceError, PlayError, Player, Suit, Table,
    TableOptions, Transcript,
};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).unwrap()
}

fn table_with(options: TableOptions, draws: &[Card]) -> (Arc<Table>, Arc<Transcript>) {
    let transcript = Arc::new(Transcript::new());
    let table = Table::new(options, 1, Arc::clone(&transcript));
    table.set_shoe(Deck::from_cards(draws.to_vec()));
    (Arc::new(table), transcript)
}

/// Says yes to everything it is asked.
struct Eager;

impl GameStrategy for Eager {
    fn insurance(&self, _hand: &Hand) -> bool {
        true
    }

    fn split(&self, _hand: &Hand) -> bool {
        true
    }

    fn double(&self, _hand: &Hand) -> bool {
        true
    }

    fn hit(&self, _hand: &Hand) -> bool {
        true
    }
}

/// Hits until it busts.
struct Reckless;

impl GameStrategy for Reckless {
    fn hit(&self, _hand: &Hand) -> bool {
        true
    }
}

#[test]
fn table_reshuffles_when_shoe_is_empty() {
    let (table, _) = table_with(TableOptions::default().with_decks(2), &[]);
    assert_eq!(table.cards_remaining(), 0);

    let first = table.deal_card();
    assert!((1..=13).contains(&first.rank()));
    assert!(table.cards_remaining() > 0);
}

#[test]
fn table_deals_every_card_before_reshuffling() {
    let options = TableOptions::default().with_burn(false);
    let (table, _) = table_with(options, &[card(4, Suit::Heart)]);

    assert_eq!(table.deal_card(), card(4, Suit::Heart));
    assert_eq!(table.cards_remaining(), 0);

    // The fresh shoe is unburned, so one card has left a full deck.
    let _ = table.deal_card();
    assert_eq!(table.cards_remaining(), 51);
}

#[test]
fn table_survives_many_shoes() {
    let (table, _) = table_with(TableOptions::default(), &[]);
    for _ in 0..1_000 {
        let c = table.deal_card();
        assert!(c.hard() <= c.soft());
    }
}

#[test]
fn reshuffle_replaces_the_shoe() {
    let options = TableOptions::default().with_decks(3).with_burn(false);
    let (table, _) = table_with(options, &[card(2, Suit::Club)]);

    table.reshuffle();
    assert_eq!(table.cards_remaining(), 3 * 52);
}

#[test]
fn zero_decks_is_treated_as_one() {
    let options = TableOptions::default().with_decks(0).with_burn(false);
    assert_eq!(options.shoe_decks(), 1);

    let table = Table::new(options, 5, Transcript::new());
    assert_eq!(table.cards_remaining(), 52);
}

#[test]
fn bet_limits() {
    let options = TableOptions::default().with_bet_limits(5, 50);
    let (table, transcript) = table_with(options, &[]);

    assert_eq!(table.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        table.place_bet(4).unwrap_err(),
        BetError::BelowMinimum {
            amount: 4,
            minimum: 5
        }
    );
    assert_eq!(
        table.place_bet(51).unwrap_err(),
        BetError::AboveMaximum {
            amount: 51,
            maximum: 50
        }
    );
    assert!(transcript.lines().is_empty());

    table.place_bet(5).unwrap();
    table.place_bet(50).unwrap();
    assert_eq!(transcript.lines(), ["Bet 5", "Bet 50"]);
}

#[test]
fn get_hand_deals_dealer_card_first() {
    let draws = [card(1, Suit::Club), card(8, Suit::Heart), card(8, Suit::Spade)];
    let (table, transcript) = table_with(TableOptions::default(), &draws);

    let hand = table.get_hand();
    assert_eq!(hand.dealer_card(), &card(1, Suit::Club));
    assert_eq!(hand.cards(), [card(8, Suit::Heart), card(8, Suit::Spade)]);
    assert_eq!(transcript.lines(), ["Deal 8♥, 8♠ vs A♣"]);
}

#[test]
fn insurance_requires_an_ace_and_an_offer() {
    let ace_up = [card(1, Suit::Club), card(5, Suit::Heart), card(6, Suit::Heart)];
    let ten_up = [card(10, Suit::Club), card(5, Suit::Heart), card(6, Suit::Heart)];

    let (table, _) = table_with(TableOptions::default(), &ace_up);
    assert!(table.can_insure(&table.get_hand()));

    let (table, _) = table_with(TableOptions::default(), &ten_up);
    assert!(!table.can_insure(&table.get_hand()));

    let (table, _) = table_with(TableOptions::default().with_insurance(false), &ace_up);
    assert!(!table.can_insure(&table.get_hand()));
    assert_eq!(table.insure(1).unwrap_err(), InsuranceError::NotOffered);
}

#[test]
fn insure_rejects_zero() {
    let (table, transcript) = table_with(TableOptions::default(), &[]);
    assert_eq!(table.insure(0).unwrap_err(), InsuranceError::ZeroBet);
    table.insure(3).unwrap();
    assert_eq!(transcript.lines(), ["Insurance 3"]);

    transcript.clear();
    assert!(transcript.lines().is_empty());
    table.place_bet(2).unwrap();
    assert_eq!(transcript.lines(), ["Bet 2"]);
}

#[test]
fn naive_strategy_decisions() {
    let dealer = Arc::new(card(1, Suit::Club));
    let hand = |ranks: &[u8]| {
        Hand::new(
            Arc::clone(&dealer),
            ranks.iter().map(|&rank| card(rank, Suit::Heart)),
        )
    };

    let pair = hand(&[8, 8]);
    assert!(!Naive.insurance(&pair));
    assert!(!Naive.split(&pair));
    assert!(!Naive.double(&pair));

    assert!(Naive.hit(&hand(&[10, 7])));
    assert!(!Naive.hit(&hand(&[10, 8])));
    // Aces count 1 on the hard total.
    assert!(Naive.hit(&hand(&[1, 1, 10, 5])));
}

#[test]
fn flat_betting_ignores_results() {
    let mut flat = Flat::new(3);
    flat.record_loss();
    flat.record_win();
    assert_eq!(flat.bet(), 3);
    assert_eq!(Flat::default().bet(), 1);
}

#[test]
fn martingale_doubles_up_to_cap() {
    let mut martingale = Martingale::new(1, 5);
    let mut stakes = vec![martingale.bet()];
    for _ in 0..4 {
        martingale.record_loss();
        stakes.push(martingale.bet());
    }
    assert_eq!(stakes, [1, 2, 4, 5, 5]);

    martingale.record_win();
    assert_eq!(martingale.bet(), 1);

    let options = TableOptions::default().with_bet_limits(1, 3);
    let mut capped = Martingale::for_table(2, &options);
    capped.record_loss();
    assert_eq!(capped.bet(), 3);
}

#[test]
fn martingale_base_above_cap_starts_at_cap() {
    let options = TableOptions::default().with_bet_limits(1, 5);
    let mut martingale = Martingale::for_table(10, &options);
    assert_eq!(martingale.bet(), 5);

    martingale.record_loss();
    assert_eq!(martingale.bet(), 5);

    martingale.record_win();
    assert_eq!(martingale.bet(), 5);
}

#[test]
fn naive_player_hits_then_stands() {
    let draws = [
        card(10, Suit::Club),
        card(5, Suit::Heart),
        card(6, Suit::Heart),
        card(7, Suit::Spade),
    ];
    let (table, transcript) = table_with(TableOptions::default(), &draws);
    let mut player = Player::new(table, Box::new(Flat::new(2)), Arc::new(Naive));

    let round = player.game().unwrap();
    assert_eq!(round.insurance, 0);
    assert!(!round.split);
    assert_eq!(round.hands.len(), 1);

    let played = &round.hands[0];
    assert_eq!(played.bet, 2);
    assert_eq!(played.actions, [Action::Hit, Action::Stand]);
    assert_eq!(played.hand.hard_total(), 18);
    assert_eq!(round.total_wagered(), 2);

    assert_eq!(transcript.lines(), ["Bet 2", "Deal 5♥, 6♥ vs 10♣"]);
    assert_eq!(player.hands().len(), 1);
    assert_eq!(player.hands()[0].hand.len(), 3);
}

#[test]
fn naive_player_hits_on_seventeen() {
    let draws = [
        card(9, Suit::Club),
        card(10, Suit::Heart),
        card(7, Suit::Heart),
        card(2, Suit::Spade),
    ];
    let (table, _) = table_with(TableOptions::default(), &draws);
    let mut player = Player::new(table, Box::new(Flat::default()), Arc::new(Naive));

    let round = player.game().unwrap();
    assert_eq!(round.hands[0].hand.hard_total(), 19);
    assert_eq!(round.hands[0].actions, [Action::Hit, Action::Stand]);
}

#[test]
fn reckless_player_stops_at_bust() {
    let draws = [
        card(2, Suit::Club),
        card(10, Suit::Heart),
        card(10, Suit::Spade),
        card(5, Suit::Diamond),
    ];
    let (table, _) = table_with(TableOptions::default(), &draws);
    let mut player = Player::new(table, Box::new(Flat::default()), Arc::new(Reckless));

    let round = player.game().unwrap();
    let played = &round.hands[0];
    assert!(played.is_bust());
    assert_eq!(played.actions, [Action::Hit]);
}

#[test]
fn eager_player_insures_splits_and_doubles() {
    let draws = [
        card(1, Suit::Club),
        card(8, Suit::Heart),
        card(8, Suit::Spade),
        card(3, Suit::Club),
        card(10, Suit::Heart),
        card(5, Suit::Diamond),
        card(2, Suit::Diamond),
    ];
    let (table, transcript) = table_with(TableOptions::default(), &draws);
    let mut player = Player::new(table, Box::new(Flat::new(4)), Arc::new(Eager));

    let round = player.game().unwrap();
    assert_eq!(round.insurance, 2);
    assert!(round.split);
    assert_eq!(round.hands.len(), 2);

    let first = &round.hands[0];
    assert_eq!(
        first.hand.cards(),
        [card(8, Suit::Heart), card(3, Suit::Club), card(5, Suit::Diamond)]
    );
    assert_eq!(first.bet, 8);
    assert_eq!(first.actions, [Action::Double]);

    let second = &round.hands[1];
    assert_eq!(
        second.hand.cards(),
        [card(8, Suit::Spade), card(10, Suit::Heart), card(2, Suit::Diamond)]
    );
    assert_eq!(second.bet, 8);

    assert_eq!(round.total_wagered(), 18);
    assert_eq!(
        transcript.lines(),
        [
            "Bet 4",
            "Deal 8♥, 8♠ vs A♣",
            "Insurance 2",
            "Bet 4",
            "Bet 4",
            "Bet 4"
        ]
    );

    let bets: Vec<usize> = player.hands().iter().map(|played| played.bet).collect();
    assert_eq!(bets, [8, 8]);
}

#[test]
fn insurance_is_skipped_without_dealer_ace() {
    let draws = [
        card(9, Suit::Club),
        card(8, Suit::Heart),
        card(8, Suit::Spade),
        card(3, Suit::Club),
        card(10, Suit::Heart),
        card(5, Suit::Diamond),
        card(2, Suit::Diamond),
    ];
    let (table, _) = table_with(TableOptions::default(), &draws);
    let mut player = Player::new(table, Box::new(Flat::new(1)), Arc::new(Eager));

    let round = player.game().unwrap();
    assert_eq!(round.insurance, 0);
    assert_eq!(round.total_wagered(), 4);
}

#[test]
fn refused_bet_ends_the_round() {
    let options = TableOptions::default().with_bet_limits(5, 10);
    let (table, transcript) = table_with(options, &[]);
    let mut player = Player::new(table, Box::new(Flat::new(1)), Arc::new(Naive));

    assert_eq!(
        player.game().unwrap_err(),
        PlayError::Bet(BetError::BelowMinimum {
            amount: 1,
            minimum: 5
        })
    );
    assert!(player.round().is_none());
    assert!(player.hands().is_empty());
    assert_eq!(player.table().options().min_bet, 5);
    assert!(transcript.lines().is_empty());
}

#[test]
fn player_forwards_results_to_betting_strategy() {
    let (table, transcript) = table_with(TableOptions::default(), &[]);
    let mut player = Player::new(table, Box::new(Martingale::new(1, 100)), Arc::new(Naive));

    player.game().unwrap();
    player.record_loss();
    player.game().unwrap();
    player.record_loss();
    player.game().unwrap();
    player.record_win();
    player.game().unwrap();

    let bets: Vec<String> = transcript
        .lines()
        .into_iter()
        .filter(|line| line.starts_with("Bet"))
        .collect();
    assert_eq!(bets, ["Bet 1", "Bet 2", "Bet 4", "Bet 1"]);
}

#[test]
fn players_share_a_table_across_threads() {
    let table = Arc::new(Table::new(TableOptions::default(), 11, Transcript::new()));
    let strategy: Arc<dyn GameStrategy> = Arc::new(Naive);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let mut player = Player::new(
                Arc::clone(&table),
                Box::new(Flat::default()),
                Arc::clone(&strategy),
            );
            scope.spawn(move || {
                for _ in 0..50 {
                    let round = player.game().unwrap();
                    assert!(round.hands.iter().all(|played| played.hand.len() >= 2));
                }
            });
        }
    });
}
