use crate::games::{GameChoice, GuessGame, Hangman, TicTacToe};
use crate::models::Tally;

/// All mutable state for the one interactive page session this process
/// serves: the sentiment tally plus the three game machines. Created at
/// startup, handed to handlers by reference, dropped with the process.
/// Nothing here is ever persisted.
#[derive(Debug, Default)]
pub struct SessionState {
    pub tally: Tally,
    pub active_game: GameChoice,
    pub guess: GuessGame,
    pub tic_tac_toe: TicTacToe,
    pub hangman: Hangman,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::STARTING_CHANCES;

    #[test]
    fn test_fresh_session_starts_clean() {
        let session = SessionState::default();

        assert_eq!(session.tally.total(), 0);
        assert_eq!(session.active_game, GameChoice::GuessTheNumber);
        assert!(session.guess.secret().is_none());
        assert!(session.tic_tac_toe.board().iter().all(|cell| cell.is_none()));
        assert_eq!(session.hangman.chances(), STARTING_CHANCES);
    }
}
