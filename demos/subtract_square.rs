//! An interactive game of Subtract Square against the engine.
//!
//! Run with `cargo run --example subtract_square`. Turn on search logging
//! with `RUST_LOG=debug`.

use plymax::subtract_square::SubtractSquare;
use plymax::{CacheScope, Game, GameState, Memoizing, Player, Strategy};

use std::io::{self, BufRead, Write};

fn prompt(msg: &str) -> String {
    print!("{}", msg);
    io::stdout().flush().expect("flush stdout");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).expect("read stdin");
    line.trim().to_string()
}

fn read_total() -> u32 {
    loop {
        match prompt("Enter the number to subtract from: ").parse() {
            Ok(n) if n > 0 => return n,
            _ => println!("Please enter a positive number."),
        }
    }
}

fn main() {
    env_logger::init();

    println!(
        "Players take turns subtracting square numbers from the starting \
         number. The winner is the person who subtracts to 0."
    );
    let start = SubtractSquare::new(Player::One, read_total());
    let mut game = Game::with_labels(start, ["You".to_string(), "Engine".to_string()]);
    let mut engine = Memoizing::new(CacheScope::PerInstance);

    while !game.is_over() {
        println!("{}", game.state());
        let m = match game.state().active_player() {
            Player::One => match prompt("Enter a move: ").parse() {
                Ok(m) => m,
                Err(_) => {
                    println!("That is not a move.");
                    continue;
                }
            },
            Player::Two => {
                let m = engine
                    .choose_move(game.state())
                    .expect("engine asked to move in a finished game");
                println!("Engine subtracts {}.", m);
                m
            }
        };
        if game.make_move(m).is_err() {
            println!("Invalid move.");
        }
    }

    println!("{}", game.state());
    match game.winner() {
        Some(plymax::Winner::Competitor(p)) => println!("{} wins!", game.label(p)),
        _ => println!("It's a draw."),
    }
}
