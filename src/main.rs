mod game;
mod grid;
mod snake;
mod term;

pub type GridInt = i16;

use std::{process::exit, thread::sleep, time::Duration};

use game::Game;
use grid::Direction;
use term::{InputEvent, TermManager};

const TICK_INTERVAL_MS: u64 = 50;

fn main() {
    let mut term = TermManager::new();
    term.setup();

    let (rows, cols) = term.grid_size();
    let mut game = match Game::new(rows, cols) {
        Ok(game) => game,
        Err(err) => {
            term.restore();
            eprintln!("{}", err);
            exit(1);
        }
    };

    while game.running() {
        let mut turn: Option<Direction> = None;
        match term.poll_input() {
            Some(InputEvent::Quit) => {
                term.restore();
                exit(0);
            }
            Some(InputEvent::Turn(direction)) => turn = Some(direction),
            None => {}
        }

        let frame = game.tick(turn);
        term.draw_frame(frame.segments, frame.food, frame.tail_index);

        sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    term.restore();
    println!("You lost");
}
