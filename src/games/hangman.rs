use rand::Rng;
use std::collections::BTreeSet;

use crate::error::Rejection;

/// Fixed vocabulary the secret word is drawn from
pub const VOCABULARY: &[&str] = &[
    "python",
    "machine",
    "learning",
    "data",
    "science",
    "sentiment",
];

/// Wrong guesses allowed before the game is lost
pub const STARTING_CHANCES: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanOutcome {
    /// The letter is in the word, but the word is not complete yet
    Hit,
    /// The letter is not in the word
    Miss { chances_left: u8 },
    /// Every letter of the secret is guessed; a fresh game has started
    Won { word: String },
    /// Chances ran out; the secret is revealed and a fresh game started
    Lost { word: String },
}

/// Hangman over a fixed vocabulary: a guessed-letter set and a chances
/// counter. Win and loss both replace the whole game with a fresh one,
/// so every game starts at exactly `STARTING_CHANCES`.
#[derive(Debug, Clone)]
pub struct Hangman {
    secret: String,
    guessed: BTreeSet<char>,
    chances: u8,
}

impl Default for Hangman {
    fn default() -> Self {
        Self::new(&mut rand::rng())
    }
}

impl Hangman {
    /// Start a game with a secret drawn uniformly from the vocabulary
    pub fn new(rng: &mut impl Rng) -> Self {
        let secret = VOCABULARY[rng.random_range(0..VOCABULARY.len())];
        Self::with_secret(secret)
    }

    fn with_secret(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            guessed: BTreeSet::new(),
            chances: STARTING_CHANCES,
        }
    }

    /// The word with unguessed letters masked, e.g. "d_t_"
    pub fn display(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    pub fn chances(&self) -> u8 {
        self.chances
    }

    /// Guessed letters in alphabetical order, for display
    pub fn guessed_letters(&self) -> String {
        self.guessed.iter().collect()
    }

    /// Submit a single-letter guess. Non-letters and repeats are
    /// rejected without touching the game. On win or loss the state is
    /// replaced with a brand new game before returning.
    pub fn guess(&mut self, raw: &str, rng: &mut impl Rng) -> Result<HangmanOutcome, Rejection> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(Rejection::NotALetter),
        };

        if self.guessed.contains(&letter) {
            return Err(Rejection::AlreadyGuessed(letter));
        }

        self.guessed.insert(letter);

        if !self.secret.contains(letter) {
            self.chances -= 1;
            if self.chances == 0 {
                let word = std::mem::replace(self, Self::new(rng)).secret;
                return Ok(HangmanOutcome::Lost { word });
            }
            return Ok(HangmanOutcome::Miss {
                chances_left: self.chances,
            });
        }

        if self.secret.chars().all(|c| self.guessed.contains(&c)) {
            let word = std::mem::replace(self, Self::new(rng)).secret;
            return Ok(HangmanOutcome::Won { word });
        }

        Ok(HangmanOutcome::Hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_display_masks_unguessed_letters() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Hangman::with_secret("data");
        assert_eq!(game.display(), "____");

        assert_eq!(game.guess("d", &mut rng).unwrap(), HangmanOutcome::Hit);
        assert_eq!(game.display(), "d___");

        assert_eq!(game.guess("t", &mut rng).unwrap(), HangmanOutcome::Hit);
        assert_eq!(game.display(), "__t_");
    }

    #[test]
    fn test_win_when_all_letters_covered() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = Hangman::with_secret("data");

        game.guess("d", &mut rng).unwrap();
        game.guess("t", &mut rng).unwrap();
        // "a" is the last uncovered letter; guessing it completes the word
        assert_eq!(
            game.guess("a", &mut rng).unwrap(),
            HangmanOutcome::Won {
                word: "data".to_string()
            }
        );

        // Terminal state cleared: fresh game with full chances
        assert_eq!(game.chances(), STARTING_CHANCES);
        assert!(game.guessed_letters().is_empty());
    }

    #[test]
    fn test_miss_decrements_chances() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Hangman::with_secret("data");

        assert_eq!(
            game.guess("z", &mut rng).unwrap(),
            HangmanOutcome::Miss { chances_left: 5 }
        );
        assert_eq!(game.chances(), 5);
    }

    #[test]
    fn test_loss_reveals_word_and_resets() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = Hangman::with_secret("data");

        for (i, wrong) in ["b", "c", "e", "f", "g"].iter().enumerate() {
            assert_eq!(
                game.guess(wrong, &mut rng).unwrap(),
                HangmanOutcome::Miss {
                    chances_left: STARTING_CHANCES - 1 - i as u8
                }
            );
        }
        assert_eq!(
            game.guess("h", &mut rng).unwrap(),
            HangmanOutcome::Lost {
                word: "data".to_string()
            }
        );

        // New game starts at exactly 6 chances, nothing guessed
        assert_eq!(game.chances(), STARTING_CHANCES);
        assert!(game.guessed_letters().is_empty());
        assert!(VOCABULARY.contains(&game.secret.as_str()));
    }

    #[test]
    fn test_repeat_guess_rejected_without_penalty() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Hangman::with_secret("data");

        game.guess("z", &mut rng).unwrap();
        assert_eq!(
            game.guess("z", &mut rng).unwrap_err(),
            Rejection::AlreadyGuessed('z')
        );
        // Chances untouched by the repeat
        assert_eq!(game.chances(), 5);
    }

    #[test]
    fn test_non_letter_guesses_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut game = Hangman::with_secret("data");

        for bad in ["", "7", "!", "ab", "  "] {
            assert_eq!(game.guess(bad, &mut rng).unwrap_err(), Rejection::NotALetter);
        }
        assert_eq!(game.chances(), STARTING_CHANCES);
        assert!(game.guessed_letters().is_empty());
    }

    #[test]
    fn test_uppercase_guess_matches_lowercase_secret() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = Hangman::with_secret("data");

        assert_eq!(game.guess("D", &mut rng).unwrap(), HangmanOutcome::Hit);
        assert_eq!(game.display(), "d___");
    }

    #[test]
    fn test_new_draws_from_vocabulary() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let game = Hangman::new(&mut rng);
            assert!(VOCABULARY.contains(&game.secret.as_str()));
            assert_eq!(game.chances(), STARTING_CHANCES);
        }
    }
}
