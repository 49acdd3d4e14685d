use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::Rejection,
    games::{GameChoice, GuessOutcome, HangmanOutcome, Mark, MoveOutcome},
    models::{SessionState, Tally},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SelectGame {
    pub game: GameChoice,
}

#[derive(Debug, Deserialize)]
pub struct NumberGuess {
    pub guess: u32,
}

#[derive(Debug, Deserialize)]
pub struct CellClick {
    pub cell: usize,
}

#[derive(Debug, Deserialize)]
pub struct LetterGuess {
    pub letter: String,
}

#[derive(Debug, Serialize)]
pub struct GuessView {
    pub active: bool,
    pub message: String,
    pub celebrate: bool,
}

#[derive(Debug, Serialize)]
pub struct BoardView {
    pub board: [Option<Mark>; 9],
    pub current_player: Mark,
    pub message: Option<String>,
    pub celebrate: bool,
}

#[derive(Debug, Serialize)]
pub struct HangmanView {
    pub display: String,
    pub chances: u8,
    pub guessed: String,
    pub message: Option<String>,
    pub celebrate: bool,
}

/// Everything the page needs to redraw itself after a refresh
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub active_game: GameChoice,
    pub tally: Tally,
    pub tic_tac_toe: BoardView,
    pub hangman: HangmanView,
}

fn session_snapshot(session: &SessionState) -> SessionView {
    SessionView {
        active_game: session.active_game,
        tally: session.tally.clone(),
        tic_tac_toe: board_view(session, None, false),
        hangman: hangman_view(session, None, false),
    }
}

fn board_view(session: &SessionState, message: Option<String>, celebrate: bool) -> BoardView {
    BoardView {
        board: *session.tic_tac_toe.board(),
        current_player: session.tic_tac_toe.current_player(),
        message,
        celebrate,
    }
}

fn hangman_view(session: &SessionState, message: Option<String>, celebrate: bool) -> HangmanView {
    HangmanView {
        display: session.hangman.display(),
        chances: session.hangman.chances(),
        guessed: session.hangman.guessed_letters(),
        message,
        celebrate,
    }
}

/// Current session state, for page hydration
pub async fn session_view(State(state): State<Arc<AppState>>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session_snapshot(&session))
}

/// Switch the radio selector to another game. Game states themselves
/// are untouched: switching away and back resumes where you left off.
pub async fn select_game(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectGame>,
) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.active_game = payload.game;
    tracing::debug!("Active game switched to {:?}", payload.game);
    Json(session_snapshot(&session))
}

/// Check a guess against the secret number
pub async fn guess_number(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NumberGuess>,
) -> Result<Json<GuessView>, Rejection> {
    let mut session = state.session.lock().await;
    let outcome = session.guess.guess(payload.guess, &mut rand::rng())?;

    let (message, celebrate) = guess_message(&outcome);
    Ok(Json(GuessView {
        active: session.guess.is_active(),
        message,
        celebrate,
    }))
}

/// Player action from the won state: drop back to not-started so the
/// next guess draws a fresh secret
pub async fn restart_guess(State(state): State<Arc<AppState>>) -> Json<GuessView> {
    let mut session = state.session.lock().await;
    session.guess.restart();
    Json(GuessView {
        active: false,
        message: "Guess a number between 1 and 100".to_string(),
        celebrate: false,
    })
}

/// Handle a click on a tic-tac-toe cell
pub async fn play_cell(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CellClick>,
) -> Result<Json<BoardView>, Rejection> {
    let mut session = state.session.lock().await;
    let outcome = session.tic_tac_toe.play(payload.cell)?;

    let (message, celebrate) = match outcome {
        MoveOutcome::Win { winner } => {
            (Some(format!("🎉 Player {} wins! 🎉", winner)), true)
        }
        MoveOutcome::Placed | MoveOutcome::Ignored => (None, false),
    };
    Ok(Json(board_view(&session, message, celebrate)))
}

/// Submit a single-letter hangman guess
pub async fn guess_letter(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LetterGuess>,
) -> Result<Json<HangmanView>, Rejection> {
    let mut session = state.session.lock().await;
    let outcome = session
        .hangman
        .guess(&payload.letter, &mut rand::rng())?;

    let (message, celebrate) = hangman_message(&outcome);
    Ok(Json(hangman_view(&session, message, celebrate)))
}

fn guess_message(outcome: &GuessOutcome) -> (String, bool) {
    match outcome {
        GuessOutcome::TooLow => ("Too low! Try again. 🔽".to_string(), false),
        GuessOutcome::TooHigh => ("Too high! Try again. 🔼".to_string(), false),
        GuessOutcome::Won { secret } => (
            format!("🎉 Correct! The number was {}. You win! 🎉", secret),
            true,
        ),
    }
}

fn hangman_message(outcome: &HangmanOutcome) -> (Option<String>, bool) {
    match outcome {
        HangmanOutcome::Hit => (None, false),
        HangmanOutcome::Miss { chances_left } => (
            Some(format!("Not in the word. {} chances left.", chances_left)),
            false,
        ),
        HangmanOutcome::Won { word } => (
            Some(format!("🎉 Congratulations! You guessed \"{}\"! 🎉", word)),
            true,
        ),
        HangmanOutcome::Lost { word } => {
            (Some(format!("❌ You lost! The word was {}. ❌", word)), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_messages() {
        assert_eq!(guess_message(&GuessOutcome::TooLow).0, "Too low! Try again. 🔽");
        assert!(!guess_message(&GuessOutcome::TooHigh).1);

        let (message, celebrate) = guess_message(&GuessOutcome::Won { secret: 42 });
        assert!(message.contains("42"));
        assert!(celebrate);
    }

    #[test]
    fn test_hangman_messages() {
        assert_eq!(hangman_message(&HangmanOutcome::Hit), (None, false));

        let (message, celebrate) = hangman_message(&HangmanOutcome::Lost {
            word: "data".to_string(),
        });
        assert!(message.unwrap().contains("data"));
        assert!(!celebrate);

        let (_, celebrate) = hangman_message(&HangmanOutcome::Won {
            word: "data".to_string(),
        });
        assert!(celebrate);
    }
}
