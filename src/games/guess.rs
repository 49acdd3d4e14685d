use rand::Rng;

use crate::error::Rejection;

/// Inclusive bounds for the secret number
pub const SECRET_MIN: u32 = 1;
pub const SECRET_MAX: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    NotStarted,
    Active {
        secret: u32,
    },
    Won {
        secret: u32,
    },
}

/// Guess-the-number: NotStarted -> Active -> Won. A secret is drawn
/// once when the game becomes active and redrawn on every restart.
#[derive(Debug, Clone, Default)]
pub struct GuessGame {
    phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Won { secret: u32 },
}

impl GuessGame {
    /// Draw a fresh secret if no game is in progress. Called lazily so
    /// the secret only exists once the player actually engages.
    pub fn ensure_started(&mut self, rng: &mut impl Rng) {
        if !matches!(self.phase, Phase::Active { .. }) {
            let secret = rng.random_range(SECRET_MIN..=SECRET_MAX);
            self.phase = Phase::Active { secret };
        }
    }

    /// Compare a guess against the secret. Starts a new game first if
    /// none is active (including after a win, which redraws the secret).
    pub fn guess(&mut self, guess: u32, rng: &mut impl Rng) -> Result<GuessOutcome, Rejection> {
        if !(SECRET_MIN..=SECRET_MAX).contains(&guess) {
            return Err(Rejection::GuessOutOfRange {
                min: SECRET_MIN,
                max: SECRET_MAX,
            });
        }

        self.ensure_started(rng);
        let secret = match self.phase {
            Phase::Active { secret } => secret,
            // ensure_started just made the phase Active
            _ => unreachable!(),
        };

        if guess < secret {
            Ok(GuessOutcome::TooLow)
        } else if guess > secret {
            Ok(GuessOutcome::TooHigh)
        } else {
            self.phase = Phase::Won { secret };
            Ok(GuessOutcome::Won { secret })
        }
    }

    /// Player action from the Won (or any) state: back to NotStarted,
    /// so the next guess draws a brand new secret.
    pub fn restart(&mut self) {
        self.phase = Phase::NotStarted;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// The current secret, if one has been drawn. Never exposed over
    /// the API; the page only ever sees comparison outcomes.
    #[allow(dead_code)]
    pub fn secret(&self) -> Option<u32> {
        match self.phase {
            Phase::Active { secret } | Phase::Won { secret } => Some(secret),
            Phase::NotStarted => None,
        }
    }

    #[cfg(test)]
    fn with_secret(secret: u32) -> Self {
        Self {
            phase: Phase::Active { secret },
        }
    }
}
