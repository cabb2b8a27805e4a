use tracing::debug;

use crate::game::{GameSession, GuessOutcome, MAX_ATTEMPTS};

/// Named output positions of the player-facing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The big line: prompt, win or loss announcement.
    Headline,
    /// The supporting line: instructions, hints, the revealed secret.
    Detail,
}

/// Player actions that can be switched on and off, mirroring the two
/// buttons of the game surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Guess,
    Restart,
}

/// What the round controller needs from a front end.
pub trait Presenter {
    fn display(&mut self, slot: Slot, text: &str);

    /// Raw text of the pending guess.
    fn read_guess(&self) -> String;

    fn clear_guess(&mut self);

    fn set_control(&mut self, control: Control, enabled: bool);
}

/// Drives one [`GameSession`] against a [`Presenter`]. Game rules live in
/// the session; this type only narrates them.
pub struct Round<P: Presenter> {
    session: GameSession,
    presenter: P,
}

impl<P: Presenter> Round<P> {
    pub fn new(upper_bound: u32, presenter: P) -> Self {
        Self {
            session: GameSession::new(upper_bound),
            presenter,
        }
    }

    /// Presents the initial prompt. The session has already drawn its
    /// first secret at construction, so nothing is redrawn here.
    pub fn start(&mut self) {
        debug!("secret number: {}", self.session.secret());
        self.show_prompt();
    }

    /// Starts a new round with a fresh secret.
    pub fn restart(&mut self) {
        self.session.restart();
        debug!("secret number: {}", self.session.secret());
        debug!("drawn this cycle: {:?}", self.session.drawn());
        self.show_prompt();
    }

    /// Submits whatever the presenter currently holds as the guess.
    pub fn submit(&mut self) {
        let raw = self.presenter.read_guess();

        match self.session.submit_guess(&raw) {
            GuessOutcome::Hit => {
                self.presenter.display(Slot::Headline, "You got it!");
                self.presenter.display(
                    Slot::Detail,
                    "Congratulations! Type 'new' to play another round.",
                );
                self.end_round();
            }
            GuessOutcome::Exhausted { secret } => {
                self.presenter.display(
                    Slot::Headline,
                    &format!("Wrong! {} attempts is the limit", MAX_ATTEMPTS),
                );
                self.presenter
                    .display(Slot::Detail, &format!("The secret number was: {}", secret));
                self.end_round();
            }
            GuessOutcome::SecretGreater => {
                self.presenter
                    .display(Slot::Detail, "The secret number is greater");
                self.presenter.clear_guess();
            }
            GuessOutcome::SecretSmaller => {
                self.presenter
                    .display(Slot::Detail, "The secret number is smaller");
                self.presenter.clear_guess();
            }
            GuessOutcome::RoundOver => {}
        }
    }

    fn show_prompt(&mut self) {
        self.presenter
            .display(Slot::Headline, "Guess the secret number");
        self.presenter.display(
            Slot::Detail,
            &format!("Pick a number from 1 to {}", self.session.upper_bound()),
        );
        self.presenter.clear_guess();
        self.presenter.set_control(Control::Guess, true);
        self.presenter.set_control(Control::Restart, false);
    }

    fn end_round(&mut self) {
        self.presenter.set_control(Control::Guess, false);
        self.presenter.set_control(Control::Restart, true);
    }

    #[inline]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[inline]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[inline]
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
impl<P: Presenter> Round<P> {
    pub(crate) fn from_parts(session: GameSession, presenter: P) -> Self {
        Self { session, presenter }
    }
}
