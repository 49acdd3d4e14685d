use serde::{Deserialize, Serialize};

use crate::error::Rejection;

/// The 8 canonical winning triples: rows, columns, diagonals
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, turn passed to the other player
    Placed,
    /// Click on an occupied cell; nothing changed
    Ignored,
    /// The placed mark completed a triple; the board has been reset
    Win { winner: Mark },
}

/// A 9-cell tic-tac-toe board with X always moving first. Winning
/// resets the whole game, including whose turn it is. A full board with
/// no winner is not treated specially.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    board: [Option<Mark>; 9],
    current: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            board: [None; 9],
            current: Mark::X,
        }
    }
}

impl TicTacToe {
    /// Handle a click on a cell. Occupied cells and clicks after a
    /// winner already exists are ignored without mutating the board.
    pub fn play(&mut self, cell: usize) -> Result<MoveOutcome, Rejection> {
        if cell >= 9 {
            return Err(Rejection::CellOutOfRange);
        }
        if self.board[cell].is_some() || self.winner().is_some() {
            return Ok(MoveOutcome::Ignored);
        }

        self.board[cell] = Some(self.current);

        if let Some(winner) = self.winner() {
            // New game: empty board, X to move again
            *self = Self::default();
            return Ok(MoveOutcome::Win { winner });
        }

        self.current = self.current.other();
        Ok(MoveOutcome::Placed)
    }

    /// Scan the 8 winning triples for three equal non-empty marks
    pub fn winner(&self) -> Option<Mark> {
        for triple in WINNING_TRIPLES {
            if let Some(mark) = self.board[triple[0]] {
                if self.board[triple[1]] == Some(mark) && self.board[triple[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    pub fn board(&self) -> &[Option<Mark>; 9] {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }
}
