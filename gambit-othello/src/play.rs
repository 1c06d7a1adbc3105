//! A console game: a human plays White against the search playing Black.

use crate::{Board, Move, MoveError, Player};
use derive_more::{Display, Error, From};
use gambit_search::{Algorithm, Searcher};
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    #[display(fmt = "console i/o failed: {}", _0)]
    Io(#[error(source)] io::Error),
    #[display(fmt = "the computer chose a bad move: {}", _0)]
    Move(#[error(source)] MoveError),
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub board: Board,
    /// The human typed the exit keyword or closed the input before the game was over.
    pub quit: bool,
}

/// One game over a pair of text streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    board: Board,
    searcher: Searcher,
    depth: u32,
    show_stats: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, algorithm: Algorithm, depth: u32) -> Self {
        Self {
            input,
            output,
            board: Board::new(),
            searcher: Searcher::new(algorithm),
            depth,
            show_stats: false,
        }
    }

    /// Start from `board` instead of the opening position.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Report search statistics and timing after every computer move.
    pub fn show_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
    }

    /// Play until neither side can move or the human quits.
    pub fn run(mut self) -> Result<Outcome, PlayError> {
        writeln!(
            self.output,
            "You play white (O) against the computer ({}, depth {}). Type \"{}\" to quit.",
            self.searcher.algorithm(),
            self.depth,
            Move::EXIT_KEYWORD
        )?;

        let mut quit = false;
        while !self.board.is_finished() {
            if !self.board.has_moves() {
                writeln!(self.output, "{} has no legal move and passes.", self.board.to_move())?;
                self.board.pass();
                continue;
            }

            let keep_going = match self.board.to_move() {
                Player::White => self.human_turn()?,
                Player::Black => {
                    self.computer_turn()?;
                    true
                }
            };
            if !keep_going {
                quit = true;
                break;
            }
        }

        self.report(quit)?;
        Ok(Outcome {
            board: self.board,
            quit,
        })
    }

    /// Returns `false` if the human asked to stop.
    fn human_turn(&mut self) -> Result<bool, PlayError> {
        loop {
            writeln!(self.output, "\n{}\n", self.board)?;
            write!(self.output, "Your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            let loc = match line.trim().parse::<Move>() {
                Ok(Move::Exit) => return Ok(false),
                Ok(Move::Place(loc)) => loc,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match self.board.play(loc) {
                Ok(()) => return Ok(true),
                Err(e) => writeln!(
                    self.output,
                    "Illegal move: {}. Legal moves: {}",
                    e,
                    self.board.legal_moves()
                )?,
            }
        }
    }

    fn computer_turn(&mut self) -> Result<(), PlayError> {
        let start = Instant::now();
        let decision = match self.searcher.decide(&self.board, self.depth) {
            Some(decision) => decision,
            None => {
                self.board.pass();
                return Ok(());
            }
        };
        let elapsed = start.elapsed();

        writeln!(self.output, "computer plays {}", decision.best_move)?;
        if self.show_stats {
            writeln!(
                self.output,
                "  value {}, {} in {:.3}s",
                decision.value,
                self.searcher.stats(),
                elapsed.as_secs_f64()
            )?;
        }

        self.board.play(decision.best_move.location())?;
        Ok(())
    }

    fn report(&mut self, quit: bool) -> Result<(), PlayError> {
        writeln!(self.output, "\n{}\n", self.board)?;
        writeln!(
            self.output,
            "Result: white = {}, black = {}",
            self.board.count(Player::White),
            self.board.count(Player::Black)
        )?;
        if !quit {
            match self.board.winner() {
                Some(player) => writeln!(self.output, "{} wins.", player)?,
                None => writeln!(self.output, "The game is a tie.")?,
            }
        }
        Ok(())
    }
}
