//! Terminal pontoon front end.
//!
//! Wires stdin/stdout prompting and rendering to the engine: bounded
//! numeric prompts with retry, stick/twist decisions, a partially hidden
//! dealer hand until the reveal, and the replay/buy-back loop.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{Card, Decision, Game, GameOptions, Rank, RoundOutcome, RoundResult, RoundState, Suit};

fn main() {
    println!("Welcome to pontoon, enjoy responsibly (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(stack) = prompt_number("Starting chip stack: ", 1, usize::MAX) else {
        return;
    };

    let mut game = Game::new(GameOptions::default(), stack, seed);

    loop {
        if game.chips() == 0 {
            if !prompt_yes_no("You're out of chips, buy back in? (y/n): ") {
                println!("Thanks for playing!");
                break;
            }
            let Some(amount) = prompt_number("How many chips? ", 1, usize::MAX) else {
                break;
            };
            game.deposit(amount);
        }

        let chips = game.chips();
        let Some(bet) = prompt_number(&format!("Place your bet (1-{chips}): "), 1, chips) else {
            break;
        };

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        render(&game);

        while game.state() == RoundState::PlayerTurn {
            let Some(decision) = prompt_decision() else {
                return;
            };
            match game.decide(decision) {
                Ok(Some(card)) => {
                    println!("You draw the {}.", format_card(&card));
                    render(&game);
                }
                Ok(None) => println!("Player sticks. Dealer to play."),
                Err(err) => println!("Action error: {err}"),
            }
        }

        match game.resolve() {
            Ok(result) => {
                render(&game);
                render_outcome(&result);
            }
            Err(err) => println!("Resolve error: {err}"),
        }

        game.clear_round();

        if !prompt_yes_no("Play again? (y/n): ") {
            println!("Thanks for playing!");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Prompts until an integer in `[min, max]` is entered. `None` means quit.
fn prompt_number(prompt: &str, min: usize, max: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return Some(value),
            _ => {
                if max == usize::MAX {
                    println!("Please enter a number of at least {min}.");
                } else {
                    println!("Please enter a number between {min} and {max}.");
                }
            }
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        let input = prompt_line(prompt);
        match input.chars().next() {
            Some('y') => return true,
            Some('n') => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

/// Prompts until a valid stick/twist decision is entered. `None` means quit.
fn prompt_decision() -> Option<Decision> {
    loop {
        let input = prompt_line("Stick or twist? (s/t): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<Decision>() {
            Ok(decision) => return Some(decision),
            Err(err) => println!("{err}"),
        }
    }
}

fn render(game: &Game) {
    let dealer = game.dealer_hand();

    let dealer_view = if dealer.is_hole_revealed() {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    };
    println!("\nDealer: {} (showing {})", dealer_view, dealer.visible_total());

    let player = game.player_hand();
    let player_view = player
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    let soft = if player.is_soft() { " soft" } else { "" };
    println!("You:    {} (total{} {})\n", player_view, soft, player.total());
}

fn render_outcome(result: &RoundResult) {
    println!("**********************");
    match result.outcome {
        RoundOutcome::PlayerWin => {
            if result.dealer_total > 21 {
                println!("Dealer busts, you win {}!", result.payout);
            } else {
                println!("You win {}!", result.payout);
            }
        }
        RoundOutcome::DealerWin => {
            if result.player_total > 21 {
                println!("You're bust, dealer wins.");
            } else {
                println!("Dealer wins.");
            }
        }
        RoundOutcome::Push => println!("It's a tie, stake returned."),
    }
    println!("**********************");
    println!("Chip balance: {}", result.chips);
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Spades => ("S", "34"),
        Suit::Clubs => ("C", "32"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
