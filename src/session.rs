use crate::throw::Throw;
use std::time::Duration;

/// How a session is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Unbounded input, wrong answers loop on the same target.
    Free,
    /// Each round must be answered within the deadline; any failure ends
    /// the session. The deadline is per round, not cumulative.
    Timed { deadline: Duration },
}

impl Mode {
    pub fn deadline(&self) -> Option<Duration> {
        match self {
            Mode::Free => None,
            Mode::Timed { deadline } => Some(*deadline),
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, Mode::Timed { .. })
    }
}

/// How a single round ended, or that it hasn't yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Success,
    Failure,
    Timeout,
}

/// One checkout target and the player's answer to it.
#[derive(Clone, Debug)]
pub struct Round {
    pub target: u16,
    pub throws: Vec<Throw>,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(target: u16) -> Self {
        Self {
            target,
            throws: Vec::new(),
            outcome: Outcome::Pending,
        }
    }
}

/// State that survives across rounds. The score only moves in timed play.
#[derive(Clone, Debug)]
pub struct Session {
    pub mode: Mode,
    pub score: u32,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self { mode, score: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_mode_has_no_deadline() {
        assert_eq!(Mode::Free.deadline(), None);
        assert!(!Mode::Free.is_timed());
    }

    #[test]
    fn test_timed_mode_exposes_deadline() {
        let mode = Mode::Timed {
            deadline: Duration::from_secs(10),
        };
        assert_eq!(mode.deadline(), Some(Duration::from_secs(10)));
        assert!(mode.is_timed());
    }

    #[test]
    fn test_new_round_is_pending() {
        let round = Round::new(100);
        assert_eq!(round.target, 100);
        assert!(round.throws.is_empty());
        assert_eq!(round.outcome, Outcome::Pending);
    }

    #[test]
    fn test_new_session_starts_at_zero() {
        let session = Session::new(Mode::Free);
        assert_eq!(session.score, 0);
    }
}
