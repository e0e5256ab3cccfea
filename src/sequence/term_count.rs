//! Validated term counts

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Number of Fibonacci terms to produce
///
/// Always non-negative; construction goes through [`TermCount::parse`] or
/// `TryFrom<i64>`, which reject negative input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TermCount(usize);

impl TermCount {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Parse a command-line argument like "10", " +7 " or "-1"
    ///
    /// Surrounding whitespace and a leading '+' are accepted. Anything that
    /// is not an integer is `InvalidFormat`; any negative integer, however
    /// large, is `NegativeValue`.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().parse::<i64>() {
            Ok(n) => Self::try_from(n),
            Err(e) => match e.kind() {
                IntErrorKind::NegOverflow => Err(Error::negative_value(raw)),
                _ => Err(Error::invalid_format(raw)),
            },
        }
    }
}

impl TryFrom<i64> for TermCount {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(Error::NegativeValue(n.to_string()));
        }
        usize::try_from(n)
            .map(Self)
            .map_err(|_| Error::InvalidFormat(n.to_string()))
    }
}

impl FromStr for TermCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(TermCount::parse("10").unwrap().get(), 10);
        assert_eq!(TermCount::parse("0").unwrap().get(), 0);
    }

    #[test]
    fn test_parse_whitespace_and_plus() {
        assert_eq!(TermCount::parse("  7\n").unwrap().get(), 7);
        assert_eq!(TermCount::parse("+3").unwrap().get(), 3);
        assert_eq!(TermCount::parse("-0").unwrap().get(), 0);
    }

    #[test]
    fn test_parse_not_an_integer() {
        for raw in ["", "   ", "abc", "2.5", "1e3", "0x10", "5 terms", "--"] {
            match TermCount::parse(raw) {
                Err(Error::InvalidFormat(got)) => assert_eq!(got, raw),
                other => panic!("Expected InvalidFormat for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_negative() {
        match TermCount::parse("-1") {
            Err(Error::NegativeValue(got)) => assert_eq!(got, "-1"),
            other => panic!("Expected NegativeValue, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_huge_negative_is_still_negative() {
        let raw = "-99999999999999999999999999";
        assert!(matches!(
            TermCount::parse(raw),
            Err(Error::NegativeValue(_))
        ));
    }

    #[test]
    fn test_parse_huge_positive_is_invalid() {
        assert!(matches!(
            TermCount::parse("99999999999999999999999999"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_try_from_i64() {
        assert_eq!(TermCount::try_from(4i64).unwrap(), TermCount::new(4));
        assert!(matches!(
            TermCount::try_from(-5i64),
            Err(Error::NegativeValue(v)) if v == "-5"
        ));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let count: TermCount = "12".parse().unwrap();
        assert_eq!(count, TermCount::new(12));
        assert_eq!(count.to_string(), "12");
    }
}
