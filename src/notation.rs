use crate::throw::{Multiplier, Throw};
use thiserror::Error;

/// A line of darts notation could not be tokenized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No token matched at some position (stray character, or a
    /// multiplier with no digits after it).
    #[error("invalid dart notation")]
    MalformedNotation,
    /// A well-formed token described a dart that does not exist on the board.
    #[error(transparent)]
    InvalidSegment(#[from] SegmentError),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("invalid dart score: {0}")]
    OutOfRange(u32),
    #[error("triple bull (t25) is not valid")]
    TripleBull,
    #[error("double {0} is not valid")]
    InvalidDouble(u32),
    #[error("triple {0} is not valid")]
    InvalidTriple(u32),
}

/// Parse a line like `t20s20d20` or `t18db` into the darts it describes.
///
/// The line is lowercased and trimmed, then scanned left to right. At each
/// position the two-character bull tokens (`db`, `ob`) are tried first;
/// otherwise the scanner expects an optional multiplier character (`s`, `d`
/// or `t`, absence meaning single) followed by one or more digits.
///
/// An empty line parses to an empty vector; whether that is acceptable is
/// the validator's call, not the parser's. No length or sum checks happen
/// here either.
pub fn parse(line: &str) -> Result<Vec<Throw>, ParseError> {
    let input = line.trim().to_lowercase();
    let bytes = input.as_bytes();

    let mut throws = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(b"db") {
            throws.push(Throw::double_bull());
            i += 2;
        } else if bytes[i..].starts_with(b"ob") {
            throws.push(Throw::outer_bull());
            i += 2;
        } else {
            let multiplier = match bytes[i] {
                b's' => {
                    i += 1;
                    Multiplier::Single
                }
                b'd' => {
                    i += 1;
                    Multiplier::Double
                }
                b't' => {
                    i += 1;
                    Multiplier::Triple
                }
                _ => Multiplier::Single,
            };

            let digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if digits_start == i {
                return Err(ParseError::MalformedNotation);
            }

            // Unparseable only when the digit run overflows u32, which is
            // out of range by a comfortable margin anyway.
            let n: u32 = input[digits_start..i].parse().unwrap_or(u32::MAX);
            throws.push(segment(multiplier, n)?);
        }
    }

    tracing::trace!(input = %input, count = throws.len(), "parsed notation");
    Ok(throws)
}

/// Turn a (multiplier, number) token into a throw, rejecting darts that do
/// not exist on the board.
fn segment(multiplier: Multiplier, n: u32) -> Result<Throw, SegmentError> {
    // Board numbers are 1-20 plus the bull at 25.
    if n < 1 || (n > 20 && n != 25) {
        return Err(SegmentError::OutOfRange(n));
    }

    match multiplier {
        Multiplier::Single => Ok(Throw::single(n as u16)),
        // d25 lands on the inner bull, so it is a legal alias of `db`.
        Multiplier::Double if n > 20 && n != 25 => Err(SegmentError::InvalidDouble(n)),
        Multiplier::Double => Ok(Throw::double(n as u16)),
        Multiplier::Triple if n == 25 => Err(SegmentError::TripleBull),
        Multiplier::Triple if n > 20 => Err(SegmentError::InvalidTriple(n)),
        Multiplier::Triple => Ok(Throw::triple(n as u16)),
    }
}
