//! Terminal blackjack front-end: prompts, rendering, and pacing.
//!
//! All game state lives in [`Game`]; this binary only renders it and
//! feeds it validated input.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use twentyone::{BET_UNIT, BettingStatus, Card, Game, RoundPhase, Settlement, Suit, hand_value};

enum PlayerMove {
    Hit,
    Stand,
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seeding game with {seed}");

    let mut game = Game::new(seed);

    clear_screen();
    stagger_string(15, "Welcome to Blackjack!\n");
    prompt_line("Press 'Enter' to continue.\n");

    loop {
        clear_screen();
        banner("BETTING");

        match game.betting_status() {
            BettingStatus::Broke => {
                println!("Out of gambling money.");
                pause(500);
                flash_text(3, 900, "GAME OVER.");
                break;
            }
            BettingStatus::Open { cash, pot } => {
                println!("You have ${cash} in cash, and the pot is ${pot}.");
                pause(500);
            }
        }

        if !prompt_yes_no("Play a round? (Y/N)") {
            let _ = game.resign();
            clear_screen();
            println!("Enough Blackjack for now.");
            println!("Don't forget to gamble responsibly!");
            break;
        }

        prompt_bet(&mut game);

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        println!();
        println!("Player initial hand:");
        show_hand(game.player_hand.cards(), true);
        println!();
        pause(250);

        println!("Dealer initial hand:");
        show_hand(game.dealer_hand.cards(), false);
        println!();
        pause(250);

        while game.phase == RoundPhase::PlayerTurn {
            match prompt_move() {
                PlayerMove::Hit => match game.hit() {
                    Ok(_) => {
                        clear_screen();
                        banner("HIT");
                        println!("Dealing card to player!");
                        println!("Player hand:");
                        show_hand(game.player_hand.cards(), true);
                        println!("Dealer hand:");
                        show_hand(game.dealer_hand.cards(), false);
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                PlayerMove::Stand => {
                    if let Err(err) = game.stand() {
                        println!("Action error: {err}");
                    }
                }
            }
        }

        if game.phase == RoundPhase::DealerTurn {
            clear_screen();
            banner("DEALER  DRAW");
            println!("Player hand:");
            show_hand(game.player_hand.cards(), true);
            println!();

            match game.dealer_play() {
                Ok(drawn) => {
                    for _ in &drawn {
                        println!("Dealing card to dealer!");
                        pause(500);
                    }
                    println!("Dealer hand:");
                    show_hand(game.dealer_hand.cards(), true);
                    pause(1000);
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        if game.phase == RoundPhase::RoundOver {
            match game.settle() {
                Ok(settlement) => announce(&settlement),
                Err(err) => println!("Settle error: {err}"),
            }
            prompt_line("Press 'Enter' to continue.\n");
        }
    }
}

fn announce(settlement: &Settlement) {
    use twentyone::RoundOutcome;

    match settlement.outcome {
        RoundOutcome::PlayerBlackjack => {
            flash_text(3, 600, &colorize("IIIIT'S A BLACKJACK! CONGRATS!", "33"));
            println!("You won ${}.", settlement.winnings);
        }
        RoundOutcome::PlayerWin => {
            println!("You win this one, human!");
            println!("You won ${}.", settlement.winnings);
        }
        RoundOutcome::PlayerLose => {
            println!("Too bad, you lost. Better luck next time.");
        }
        RoundOutcome::Tie => {
            println!("It's a tie! Money's still on the table...");
        }
        RoundOutcome::Broke | RoundOutcome::Quit | RoundOutcome::Undecided => {}
    }
}

/// Prints a hand as a listing plus the total of its visible cards.
///
/// With `reveal_all` unset, only the first card is fully shown; the rest
/// keep their rank but mask their suit and stay out of the shown total,
/// the way a dealer keeps their hole cards down. Scoring inside the
/// engine always uses the full hand; this masking is render-only.
fn show_hand(cards: &[Card], reveal_all: bool) {
    for (index, card) in cards.iter().enumerate() {
        if reveal_all || index == 0 {
            print!(" {} ", format_card(*card));
        } else {
            print!(" {} of {} ", card.rank_name(), colorize("????", "90"));
        }
        flush();
        pause(100);
    }
    println!();

    let visible = if reveal_all { cards } else { &cards[..cards.len().min(1)] };
    println!("Total: {}", hand_value(visible));
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    format!("{} of {}", card.rank_name(), colorize(card.suit.name(), color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[1;1H");
    println!("    =======  BLACKJACK  =======");
    println!();
}

fn banner(label: &str) {
    println!("      ===   {label}   ===");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(&format!("{prompt}\n")).as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Invalid answer, try again."),
        }
    }
}

/// Asks for the bet as a count of tens, until the engine accepts it.
fn prompt_bet(game: &mut Game) {
    println!("How much (in multiples of 10) would you like to add to the pot?");
    loop {
        let input = prompt_line("10 x $");
        let Ok(count) = input.parse::<u32>() else {
            println!("Please enter a number.");
            continue;
        };

        match game.place_bet(count.saturating_mul(BET_UNIT)) {
            Ok(()) => return,
            Err(err) => println!("Invalid amount: {err}."),
        }
    }
}

fn prompt_move() -> PlayerMove {
    println!("Would you like to Hit or Stand?");
    loop {
        match prompt_line("(Enter \"hit\" or \"stand\" to answer)\n").as_str() {
            "h" | "hit" => return PlayerMove::Hit,
            "s" | "stand" => return PlayerMove::Stand,
            _ => println!("Invalid input, please try again."),
        }
    }
}

fn flush() {
    let _ = io::stdout().flush();
}

fn pause(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

/// Prints a string one character at a time.
fn stagger_string(delay: u64, text: &str) {
    if delay == 0 {
        print!("{text}");
        return;
    }

    for ch in text.chars() {
        print!("{ch}");
        flush();
        pause(delay);
    }
}

/// Repeatedly blanks and redraws a line of text in place.
fn flash_text(reps: u32, delay: u64, text: &str) {
    let blank = " ".repeat(text.chars().count());
    let third = delay / 3;

    for _ in 0..reps {
        print!("\r{blank}");
        flush();
        pause(third);

        print!("\r{text}");
        flush();
        pause(third * 2);
    }
    println!();
}
