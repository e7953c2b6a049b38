//! Plays a few rounds at a six-deck table and prints what the table shows.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use shoebox::strategy::{Martingale, Naive};
use shoebox::{Player, Sink, Table, TableOptions};

struct Stdout;

impl Sink for Stdout {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_decks(6).with_bet_limits(1, 64);
    let betting = Martingale::for_table(1, &options);
    let table = Arc::new(Table::new(options, seed, Stdout));

    let mut player = Player::new(table, Box::new(betting), Arc::new(Naive));

    for round_number in 1..=5 {
        println!("-- round {round_number}");
        let busted = match player.game() {
            Ok(round) => round.hands.iter().all(|played| played.is_bust()),
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        };

        // No dealer play here: treat a bust as a loss and anything else as a win.
        if busted {
            println!("Bust");
            player.record_loss();
        } else {
            player.record_win();
        }
    }
}
