use anyhow::{anyhow, Result};
use log::debug;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::{
    display,
    game::{ConnectFour, GameStatus, Move, Variant},
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let variant = match std::env::args().nth(1).as_deref() {
        Some("--classic") => Variant::Classic,
        Some("--popout") => Variant::PopOut,
        _ => choose_variant(&stdin)?,
    };
    let mut game = ConnectFour::new(variant);
    debug!("starting a {} game", variant);

    if variant.allows_pop() {
        println!("Enter a column (1-7) to drop a coin, p and a column (e.g. p4) to pop your coin.");
    } else {
        println!("Enter a column (1-7) to drop a coin.");
    }
    println!("r restarts the game, q quits.\n");

    // game loop
    loop {
        display::render(game.board(), &mut stdout())?;

        match game.status() {
            GameStatus::Playing => {
                print!("{} turn > ", game.current_player());
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    break;
                }

                match input_str.trim() {
                    "q" => break,
                    "r" => {
                        game.reset();
                        continue;
                    }
                    _ => {}
                }

                let next_move = match input_str.parse::<Move>() {
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                    Ok(next_move) => next_move,
                };

                if let Err(err) = game.play(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameStatus::Won(player) => {
                println!("{} won!", player);
                if !ask(&stdin, "Play again? y/n: ")? {
                    break;
                }
                game.reset();
            }
            GameStatus::Draw => {
                println!("Game drawn!");
                if !ask(&stdin, "Play again? y/n: ")? {
                    break;
                }
                game.reset();
            }
        }
    }
    Ok(())
}

fn choose_variant(stdin: &Stdin) -> Result<Variant> {
    loop {
        let mut buffer = String::new();
        print!("Classic or PopOut? c/p: ");
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("no game variant chosen"));
        }
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'c') => return Ok(Variant::Classic),
            Some(_letter @ 'p') => return Ok(Variant::PopOut),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
