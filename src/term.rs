use std::{io::{stdout, Stdout, Write}, time::Duration};

use crate::grid::{Direction, Point};
use crate::GridInt;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

const SNAKE_CHAR: char = '#';
const FOOD_CHAR: char = 'o';

/// A key press the game loop cares about.
pub enum InputEvent {
    Turn(Direction),
    Quit,
}

/// Owns the terminal for the lifetime of the game: alternate screen, raw
/// mode, hidden cursor, and all drawing.
pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        TermManager { width, height, stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        terminal::disable_raw_mode().expect("Error unsetting raw mode.");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Board bounds for the collision check: the terminal width bounds X
    /// and the height bounds Y.
    pub fn grid_size(&self) -> (GridInt, GridInt) {
        (self.width as GridInt, self.height as GridInt)
    }

    /// Drains every key event queued since the last call and reduces them
    /// to at most one action. Quit wins over anything else; among turns,
    /// the last one pressed wins.
    pub fn poll_input(&self) -> Option<InputEvent> {
        let mut turn = None;

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                if is_ctrl_c(&ev) {
                    return Some(InputEvent::Quit);
                }

                match ev.code {
                    KeyCode::Char('w') | KeyCode::Up => turn = Some(Direction::Up),
                    KeyCode::Char('a') | KeyCode::Left => turn = Some(Direction::Left),
                    KeyCode::Char('s') | KeyCode::Down => turn = Some(Direction::Down),
                    KeyCode::Char('d') | KeyCode::Right => turn = Some(Direction::Right),
                    _ => {}
                }
            }
        }

        turn.map(InputEvent::Turn)
    }

    /// Redraws the whole frame: food, snake, and the tail-index status
    /// line at the origin.
    pub fn draw_frame(&mut self, segments: &[Point], food: Point, tail_index: usize) {
        queue!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");

        self.print_at(food, FOOD_CHAR);
        for pos in segments {
            self.print_at(*pos, SNAKE_CHAR);
        }

        queue!(
            self.stdout,
            cursor::MoveTo(0, 0),
            style::Print(format!("Tail position: {}", tail_index))
        )
        .expect("Error printing status.");

        self.stdout.flush().expect("Error flushing.");
    }

    fn print_at(&mut self, pos: Point, ch: char) {
        // Cells the snake pushed off the board are simply not drawn.
        if pos.x < 0 || pos.y < 0 || pos.x as u16 >= self.width || pos.y as u16 >= self.height {
            return;
        }

        queue!(self.stdout, cursor::MoveTo(pos.x as u16, pos.y as u16), style::Print(ch))
            .expect("Error printing.");
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
