//! `(AI)value` input parsing.

use core::fmt;
use tracing::debug;
use crate::error::{Error, Result};

/// Opens an application identifier group.
pub const AI_OPEN: char = '(';
/// Closes an application identifier group, stripped from values.
pub const AI_CLOSE: char = ')';

/// One application identifier with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    ai: u8,
    value: String,
}

impl Segment {
    /// Creates a segment from a two digit application identifier. The value
    /// is not checked here, the encoder rejects non-digit values.
    pub fn new(ai: &str, value: impl Into<String>) -> Result<Self> {
        match ai.as_bytes() {
            &[hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => Ok(Self {
                ai: (hi - b'0') * 10 + (lo - b'0'),
                value: value.into(),
            }),
            _ => Err(Error::format(format!("application identifier {ai:?} is not two digits"))),
        }
    }

    /// Application identifier as a number (0-99).
    #[inline]
    pub const fn ai(&self) -> u8 {
        self.ai
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:02}){}", self.ai, self.value)
    }
}

/// Splits `input` into segments, in input order.
///
/// Chunks between two `(` that are two characters or shorter are dropped.
/// Otherwise the first two characters are the application identifier and
/// the rest, with `)` removed, is the value, which must be all digits.
pub fn parse(input: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();

    for chunk in input.split(AI_OPEN) {
        let Some((split, _)) = chunk.char_indices().nth(2) else { continue };

        let (ai, rest) = chunk.split_at(split);
        let value: String = rest.chars().filter(|&c| c != AI_CLOSE).collect();
        if let Some(c) = value.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::format(format!("({ai}) value {value:?} contains non-digit {c:?}")));
        }

        segments.push(Segment::new(ai, value)?);
    }

    if segments.is_empty() {
        return Err(Error::format(format!("no (AI)value group found in {input:?}")));
    }

    debug!(segments = segments.len(), "parsed input");
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::{parse, Segment};
    use crate::error::Error;

    #[test]
    fn test_parse_in_order() {
        let segments = parse("(01)09501101530003(10)12345(21)42").unwrap();
        assert_eq!(segments, [
            Segment::new("01", "09501101530003").unwrap(),
            Segment::new("10", "12345").unwrap(),
            Segment::new("21", "42").unwrap(),
        ]);
        assert_eq!(segments[0].ai(), 1);
        assert_eq!(segments[1].value(), "12345");
    }

    #[test]
    fn test_parse_empty_value() {
        let segments = parse("(10)").unwrap();
        assert_eq!(segments, [Segment::new("10", "").unwrap()]);
    }

    #[test]
    fn test_parse_drops_short_chunks() {
        // "1)" is too short to hold an identifier
        let segments = parse("(1)(17)250101").unwrap();
        assert_eq!(segments, [Segment::new("17", "250101").unwrap()]);
    }

    #[test]
    fn test_parse_non_digit_value() {
        assert!(matches!(parse("(10)AB(21)CD"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_parse_non_digit_ai() {
        assert!(matches!(parse("(A1)1234"), Err(Error::Format { .. })));
        assert!(matches!(parse("]C1(01)12"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_parse_multibyte_chunk() {
        assert!(matches!(parse("(é1)12"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_parse_nothing() {
        assert!(matches!(parse(""), Err(Error::Format { .. })));
        assert!(matches!(parse("(1)"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_segment_new() {
        assert!(Segment::new("00", "1").is_ok());
        assert!(Segment::new("+1", "1").is_err());
        assert!(Segment::new("100", "1").is_err());
        assert!(Segment::new("1", "1").is_err());
    }

    #[test]
    fn test_display() {
        let segment = Segment::new("01", "123").unwrap();
        assert_eq!(segment.to_string(), "(01)123");
    }
}
