use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// What came back from asking for one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A full line arrived before any deadline, trailing newline stripped.
    Line(String),
    /// The deadline elapsed first; no partial input is ever surfaced.
    TimedOut,
    /// The input channel is gone (EOF on stdin, or the sender dropped).
    Closed,
}

/// Source of input lines for the round controller.
pub trait LineSource: Send + 'static {
    /// Block for the next line, bounded by `deadline` when one is given.
    fn next_line(&self, deadline: Option<Duration>) -> ReadOutcome;
}

/// Production line source reading stdin on a detached background thread.
///
/// The thread pushes whole lines into a channel; `next_line` waits on the
/// receiver, with a timeout in timed play. A deadline that fires leaves the
/// blocking read running, since there is no portable way to interrupt it,
/// but a timeout ends the session, so the receiver is dropped and any late
/// line dies with the channel instead of leaking into another round.
pub struct StdinLineSource {
    rx: Receiver<String>,
}

impl StdinLineSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        Self { rx }
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLineSource {
    fn next_line(&self, deadline: Option<Duration>) -> ReadOutcome {
        recv_outcome(&self.rx, deadline)
    }
}

/// Test line source fed from a caller-owned channel.
pub struct TestLineSource {
    rx: Receiver<String>,
}

impl TestLineSource {
    pub fn new(rx: Receiver<String>) -> Self {
        Self { rx }
    }
}

impl LineSource for TestLineSource {
    fn next_line(&self, deadline: Option<Duration>) -> ReadOutcome {
        recv_outcome(&self.rx, deadline)
    }
}

fn recv_outcome(rx: &Receiver<String>, deadline: Option<Duration>) -> ReadOutcome {
    match deadline {
        Some(timeout) => match rx.recv_timeout(timeout) {
            Ok(line) => ReadOutcome::Line(line),
            Err(RecvTimeoutError::Timeout) => ReadOutcome::TimedOut,
            Err(RecvTimeoutError::Disconnected) => ReadOutcome::Closed,
        },
        None => match rx.recv() {
            Ok(line) => ReadOutcome::Line(line),
            Err(_) => ReadOutcome::Closed,
        },
    }
}
