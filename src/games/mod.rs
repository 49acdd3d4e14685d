pub mod guess;
pub mod hangman;
pub mod tictactoe;

use serde::{Deserialize, Serialize};

pub use guess::{GuessGame, GuessOutcome};
pub use hangman::{Hangman, HangmanOutcome};
pub use tictactoe::{Mark, MoveOutcome, TicTacToe};

/// Which of the three mini-games the page's radio selector points at.
/// The games share no state with each other or with the sentiment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameChoice {
    #[default]
    GuessTheNumber,
    TicTacToe,
    Hangman,
}
