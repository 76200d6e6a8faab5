use crate::checkout;
use crate::notation::{self, ParseError};
use crate::runtime::{LineSource, ReadOutcome};
use crate::session::{Mode, Outcome, Round, Session};
use crate::throw::Throw;
use crate::validate::{self, CheckoutError};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

/// Ends the session from any prompt, case-insensitively.
pub const QUIT_COMMAND: &str = "quit";

/// Everything that can be wrong with one submitted answer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Structured result of one turn, for the front end to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The answer finished `target`; a fresh round has already been set up.
    Solved { target: u16, throws: Vec<Throw> },
    /// The answer did not parse or did not finish the checkout. Free mode
    /// keeps the round open; timed mode is over.
    Rejected(GameError),
    /// An empty line. Free mode re-prompts; timed mode is over.
    NoInput,
    /// The round deadline elapsed before any input. Session over.
    TimedOut,
    /// The quit command, or end of input. Session over.
    Quit,
}

/// Drives one session: hand out targets, take answers, keep score.
///
/// One call to [`play_turn`](Controller::play_turn) performs exactly one
/// read-parse-validate cycle and reports what happened; rendering is the
/// caller's job. Input arrives through a [`LineSource`] and targets come
/// from the injected rng, so the whole machine runs headless in tests.
pub struct Controller<S: LineSource, R: Rng> {
    source: S,
    rng: R,
    session: Session,
    round: Round,
    over: bool,
}

impl<S, R> Controller<S, R>
where
    S: LineSource,
    R: Rng,
{
    pub fn new(mode: Mode, source: S, mut rng: R) -> Self {
        let target = checkout::generate(&mut rng);
        debug!(checkout = target, "session started");
        Self {
            source,
            rng,
            session: Session::new(mode),
            round: Round::new(target),
            over: false,
        }
    }

    pub fn target(&self) -> u16 {
        self.round.target
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Wait for one line (bounded by the mode's deadline) and resolve it.
    pub fn play_turn(&mut self) -> Turn {
        match self.source.next_line(self.session.mode.deadline()) {
            ReadOutcome::TimedOut => {
                debug!(checkout = self.round.target, "deadline elapsed");
                self.round.outcome = Outcome::Timeout;
                self.over = true;
                Turn::TimedOut
            }
            ReadOutcome::Closed => {
                self.over = true;
                Turn::Quit
            }
            ReadOutcome::Line(line) => self.handle_line(line.trim()),
        }
    }

    fn handle_line(&mut self, line: &str) -> Turn {
        if line.eq_ignore_ascii_case(QUIT_COMMAND) {
            self.over = true;
            return Turn::Quit;
        }

        if line.is_empty() {
            if self.session.mode.is_timed() {
                self.round.outcome = Outcome::Failure;
                self.over = true;
            }
            return Turn::NoInput;
        }

        match self.answer(line) {
            Ok(throws) => {
                let target = self.round.target;
                self.round.throws = throws.clone();
                self.round.outcome = Outcome::Success;
                if self.session.mode.is_timed() {
                    self.session.score += 1;
                }
                self.advance();
                Turn::Solved { target, throws }
            }
            Err(err) => {
                debug!(checkout = self.round.target, %err, "answer rejected");
                if self.session.mode.is_timed() {
                    self.round.outcome = Outcome::Failure;
                    self.over = true;
                }
                Turn::Rejected(err)
            }
        }
    }

    fn answer(&self, line: &str) -> Result<Vec<Throw>, GameError> {
        let throws = notation::parse(line)?;
        validate::validate(self.round.target, &throws)?;
        Ok(throws)
    }

    /// Replace the finished round with a fresh target. In timed mode this
    /// also restarts the deadline, since the next `play_turn` waits anew.
    fn advance(&mut self) {
        let target = checkout::generate(&mut self.rng);
        debug!(checkout = target, score = self.session.score, "new target");
        self.round = Round::new(target);
    }
}
