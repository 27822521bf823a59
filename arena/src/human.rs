//! Interactive player reading coordinates from a terminal

use anyhow::Result;
use engine_core::{Position, Side};
use games_othello::{Board, Square};
use std::io::{BufRead, Write};

use crate::player::{Player, PlayerAction, PlayerKind};

/// Player that asks a person for each move.
///
/// Accepts coordinates such as `D3` in any case and re-prompts on malformed
/// or illegal input. `Q` (or end of input) abandons the game.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn select_move(&mut self, board: &Board, side: Side) -> Result<PlayerAction> {
        let legal = board.legal_moves(side);
        let hint = legal
            .iter()
            .map(Square::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        loop {
            write!(
                self.output,
                "{} to move [{}], enter a square (e.g. D3) or Q to quit: ",
                side, hint
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(PlayerAction::Quit);
            }

            let entry = line.trim();
            if entry.eq_ignore_ascii_case("q") {
                return Ok(PlayerAction::Quit);
            }

            match entry.parse::<Square>() {
                Ok(square) if legal.contains(&square) => return Ok(PlayerAction::Play(square)),
                Ok(square) => writeln!(self.output, "{} is not a legal move, try again", square)?,
                Err(e) => writeln!(self.output, "Invalid input: {}, try again", e)?,
            }
        }
    }
}
