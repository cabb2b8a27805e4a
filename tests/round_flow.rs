use secret_number::game::{RoundState, MAX_ATTEMPTS, UPPER_BOUND};
use secret_number::ui::{Control, Presenter, Round, Slot};

/// Captures everything the controller tells the front end.
#[derive(Default)]
struct RecordingPresenter {
    headline: String,
    detail: String,
    pending: String,
    guess_enabled: bool,
    restart_enabled: bool,
}

impl Presenter for RecordingPresenter {
    fn display(&mut self, slot: Slot, text: &str) {
        match slot {
            Slot::Headline => self.headline = text.to_owned(),
            Slot::Detail => self.detail = text.to_owned(),
        }
    }

    fn read_guess(&self) -> String {
        self.pending.clone()
    }

    fn clear_guess(&mut self) {
        self.pending.clear();
    }

    fn set_control(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Guess => self.guess_enabled = enabled,
            Control::Restart => self.restart_enabled = enabled,
        }
    }
}

fn submit(round: &mut Round<RecordingPresenter>, raw: &str) {
    round.presenter_mut().pending = raw.to_owned();
    round.submit();
}

// The secret is random, so derive a guess that is guaranteed wrong and
// still inside [1, UPPER_BOUND].
fn wrong_guess(secret: u32) -> u32 {
    secret % UPPER_BOUND + 1
}

#[test]
fn win_flow_announces_and_swaps_controls() {
    let mut round = Round::new(UPPER_BOUND, RecordingPresenter::default());
    round.start();

    assert_eq!(round.presenter().headline, "Guess the secret number");
    assert!(round.presenter().guess_enabled);
    assert!(!round.presenter().restart_enabled);

    let secret = round.session().secret();
    let wrong = wrong_guess(secret);

    submit(&mut round, &wrong.to_string());
    // hint direction depends on which side of the secret the guess fell
    let expected = if wrong > secret {
        "The secret number is smaller"
    } else {
        "The secret number is greater"
    };
    assert_eq!(round.presenter().detail, expected);
    assert_eq!(round.session().attempts(), 2);
    assert!(round.presenter().pending.is_empty(), "hint must clear input");

    submit(&mut round, &secret.to_string());
    assert_eq!(round.session().state(), RoundState::Won);
    assert_eq!(round.presenter().headline, "You got it!");
    assert!(!round.presenter().guess_enabled);
    assert!(round.presenter().restart_enabled);
}

#[test]
fn loss_flow_reveals_the_secret_after_three_wrong_guesses() {
    let mut round = Round::new(UPPER_BOUND, RecordingPresenter::default());
    round.start();

    let secret = round.session().secret();
    let wrong = wrong_guess(secret).to_string();

    for _ in 0..MAX_ATTEMPTS {
        submit(&mut round, &wrong);
    }

    assert_eq!(round.session().state(), RoundState::Lost);
    assert_eq!(
        round.presenter().headline,
        format!("Wrong! {} attempts is the limit", MAX_ATTEMPTS)
    );
    assert_eq!(
        round.presenter().detail,
        format!("The secret number was: {}", secret)
    );
    assert!(!round.presenter().guess_enabled);
    assert!(round.presenter().restart_enabled);
}

#[test]
fn submitting_after_the_round_ended_changes_nothing() {
    let mut round = Round::new(UPPER_BOUND, RecordingPresenter::default());
    round.start();

    let secret = round.session().secret();
    submit(&mut round, &secret.to_string());
    assert_eq!(round.session().state(), RoundState::Won);

    submit(&mut round, &wrong_guess(secret).to_string());
    assert_eq!(round.session().state(), RoundState::Won);
    assert_eq!(round.presenter().headline, "You got it!");
}

#[test]
fn restart_begins_a_fresh_round() {
    let mut round = Round::new(UPPER_BOUND, RecordingPresenter::default());
    round.start();

    let secret = round.session().secret();
    submit(&mut round, &secret.to_string());
    assert_eq!(round.session().state(), RoundState::Won);

    round.restart();

    assert_eq!(round.session().state(), RoundState::AwaitingGuess);
    assert_eq!(round.session().attempts(), 1);
    assert!((1..=UPPER_BOUND).contains(&round.session().secret()));
    assert_eq!(round.presenter().headline, "Guess the secret number");
    assert!(round.presenter().guess_enabled);
    assert!(!round.presenter().restart_enabled);
}

#[test]
fn malformed_input_costs_an_attempt_and_hints_greater() {
    let mut round = Round::new(UPPER_BOUND, RecordingPresenter::default());
    round.start();

    // the legacy surface compared NaN against the secret and answered
    // "greater"; unparseable text keeps that exact outcome
    submit(&mut round, "banana");
    assert_eq!(round.presenter().detail, "The secret number is greater");
    assert_eq!(round.session().attempts(), 2);
    assert_eq!(round.session().state(), RoundState::AwaitingGuess);
}
