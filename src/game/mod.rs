use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

pub mod guess;
pub mod secret;

pub use guess::Guess;

/// Secrets are drawn from `[1, UPPER_BOUND]`.
pub const UPPER_BOUND: u32 = 20;

/// A round ends in a loss after this many wrong guesses.
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won,
    Lost,
}

/// What a single guess submission did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    /// Wrong guess on the final attempt.
    Exhausted { secret: u32 },
    /// Wrong guess, the secret is greater. Also the answer for input
    /// that does not parse as a number.
    SecretGreater,
    SecretSmaller,
    /// Submission while the round is already over; nothing happened.
    RoundOver,
}

/// One game session, created once at startup and reset in place for every
/// new round. Transitions only return [`GuessOutcome`] values; nothing
/// here touches a UI.
pub struct GameSession<R = ThreadRng> {
    upper_bound: u32,
    drawn: Vec<u32>,
    secret: u32,
    attempts: u32,
    state: RoundState,
    rng: R,
}

impl GameSession {
    /// Creates a session and draws the first secret.
    pub fn new(upper_bound: u32) -> Self {
        Self::with_rng(upper_bound, thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(upper_bound: u32, mut rng: R) -> Self {
        let mut drawn = Vec::new();
        let secret = secret::draw(&mut rng, upper_bound, &mut drawn);

        Self {
            upper_bound,
            drawn,
            secret,
            attempts: 1,
            state: RoundState::AwaitingGuess,
            rng,
        }
    }

    /// Starts a new round: fresh secret, attempt counter back to 1.
    pub fn restart(&mut self) {
        self.secret = secret::draw(&mut self.rng, self.upper_bound, &mut self.drawn);
        self.attempts = 1;
        self.state = RoundState::AwaitingGuess;
    }

    /// Submits the raw guess text for the current attempt.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.state != RoundState::AwaitingGuess {
            return GuessOutcome::RoundOver;
        }

        let guess = Guess::parse(raw);

        if guess.hits(self.secret) {
            self.state = RoundState::Won;
            GuessOutcome::Hit
        } else if self.attempts == MAX_ATTEMPTS {
            self.state = RoundState::Lost;
            GuessOutcome::Exhausted {
                secret: self.secret,
            }
        } else {
            self.attempts += 1;
            if guess.is_above(self.secret) {
                GuessOutcome::SecretSmaller
            } else {
                GuessOutcome::SecretGreater
            }
        }
    }

    #[inline]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    pub fn secret(&self) -> u32 {
        self.secret
    }

    #[inline]
    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    #[inline]
    pub fn drawn(&self) -> &[u32] {
        &self.drawn
    }
}

#[cfg(test)]
impl GameSession {
    /// Session with a known secret, for deterministic scenarios.
    pub(crate) fn with_secret(upper_bound: u32, secret: u32) -> Self {
        Self {
            upper_bound,
            drawn: vec![secret],
            secret,
            attempts: 1,
            state: RoundState::AwaitingGuess,
            rng: thread_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_draws_and_awaits() {
        let session = GameSession::new(20);

        assert_eq!(session.state(), RoundState::AwaitingGuess);
        assert_eq!(session.attempts(), 1);
        assert!((1..=20).contains(&session.secret()));
        assert!(session.drawn().contains(&session.secret()));
    }

    #[test]
    fn winning_scenario() {
        let mut session = GameSession::with_secret(20, 7);

        assert_eq!(session.submit_guess("10"), GuessOutcome::SecretSmaller);
        assert_eq!(session.attempts(), 2);

        assert_eq!(session.submit_guess("3"), GuessOutcome::SecretGreater);
        assert_eq!(session.attempts(), 3);

        assert_eq!(session.submit_guess("7"), GuessOutcome::Hit);
        assert_eq!(session.state(), RoundState::Won);
    }

    #[test]
    fn losing_scenario_reveals_secret() {
        let mut session = GameSession::with_secret(20, 7);

        assert_eq!(session.submit_guess("1"), GuessOutcome::SecretGreater);
        assert_eq!(session.submit_guess("2"), GuessOutcome::SecretGreater);
        assert_eq!(
            session.submit_guess("3"),
            GuessOutcome::Exhausted { secret: 7 }
        );
        assert_eq!(session.state(), RoundState::Lost);
    }

    #[test]
    fn win_on_final_attempt() {
        let mut session = GameSession::with_secret(20, 7);

        session.submit_guess("1");
        session.submit_guess("2");
        assert_eq!(session.attempts(), 3);
        assert_eq!(session.submit_guess("7"), GuessOutcome::Hit);
        assert_eq!(session.state(), RoundState::Won);
    }

    #[test]
    fn malformed_input_consumes_an_attempt() {
        let mut session = GameSession::with_secret(20, 7);

        assert_eq!(session.submit_guess("seven"), GuessOutcome::SecretGreater);
        assert_eq!(session.attempts(), 2);
        assert_eq!(session.state(), RoundState::AwaitingGuess);
    }

    #[test]
    fn submission_after_round_end_is_a_no_op() {
        let mut session = GameSession::with_secret(20, 7);

        session.submit_guess("7");
        assert_eq!(session.state(), RoundState::Won);

        assert_eq!(session.submit_guess("7"), GuessOutcome::RoundOver);
        assert_eq!(session.state(), RoundState::Won);
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn restart_resets_the_round() {
        let mut session = GameSession::with_secret(20, 7);

        session.submit_guess("10");
        session.submit_guess("7");
        assert_eq!(session.state(), RoundState::Won);

        session.restart();
        assert_eq!(session.state(), RoundState::AwaitingGuess);
        assert_eq!(session.attempts(), 1);
        assert!((1..=20).contains(&session.secret()));
        assert!(session.drawn().contains(&session.secret()));
    }
}
