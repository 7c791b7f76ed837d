//! Station telecodes.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid telecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTelecode {
    /// Wrong length (telecodes are exactly three bytes)
    #[error("telecode must be 3 letters, got {0} bytes")]
    Length(usize),

    /// Right length, wrong alphabet
    #[error("telecode must be uppercase ASCII letters")]
    Charset,
}

/// A station telecode: the 3-letter uppercase key 12306 uses for a
/// station on the wire, e.g. `BXP` for 北京西 or `CSQ` for 长沙.
///
/// Display names are what people write in config files; telecodes are
/// what the query endpoint accepts. Holding a `Telecode` means the
/// station-table lookup already succeeded, so a query can never be
/// built around an unresolved name.
///
/// # Examples
///
/// ```
/// use ticket_monitor::domain::Telecode;
///
/// let changsha = Telecode::parse("CSQ").unwrap();
/// assert_eq!(changsha.as_str(), "CSQ");
/// assert!("csq".parse::<Telecode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Telecode([u8; 3]);

impl Telecode {
    /// Parse a telecode: exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidTelecode> {
        let bytes: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidTelecode::Length(s.len()))?;

        if bytes.iter().all(u8::is_ascii_uppercase) {
            Ok(Telecode(bytes))
        } else {
            Err(InvalidTelecode::Charset)
        }
    }

    /// The telecode as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction only admits uppercase ASCII, so this cannot fail.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl FromStr for Telecode {
    type Err = InvalidTelecode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Telecode::parse(s)
    }
}

impl fmt::Debug for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Telecode({})", self.as_str())
    }
}

impl fmt::Display for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_codes() {
        for code in ["VAP", "BJP", "BXP", "CSQ", "CWQ"] {
            assert_eq!(Telecode::parse(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn wrong_length_reports_byte_count() {
        assert_eq!(Telecode::parse(""), Err(InvalidTelecode::Length(0)));
        assert_eq!(Telecode::parse("BX"), Err(InvalidTelecode::Length(2)));
        assert_eq!(Telecode::parse("BXPP"), Err(InvalidTelecode::Length(4)));
        // Multi-byte characters are counted as bytes, not letters.
        assert_eq!(Telecode::parse("北京"), Err(InvalidTelecode::Length(6)));
    }

    #[test]
    fn wrong_alphabet_is_rejected() {
        assert_eq!(Telecode::parse("bxp"), Err(InvalidTelecode::Charset));
        assert_eq!(Telecode::parse("Bxp"), Err(InvalidTelecode::Charset));
        assert_eq!(Telecode::parse("B1P"), Err(InvalidTelecode::Charset));
        assert_eq!(Telecode::parse("B-P"), Err(InvalidTelecode::Charset));
        assert_eq!(Telecode::parse("B P"), Err(InvalidTelecode::Charset));
    }

    #[test]
    fn from_str_matches_parse() {
        assert_eq!("CWQ".parse::<Telecode>(), Telecode::parse("CWQ"));
        assert!("cwq".parse::<Telecode>().is_err());
    }

    #[test]
    fn formatting() {
        let code = Telecode::parse("BXP").unwrap();
        assert_eq!(code.to_string(), "BXP");
        assert_eq!(format!("{code:?}"), "Telecode(BXP)");
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashSet;

        let set: HashSet<Telecode> = [Telecode::parse("BJP").unwrap()].into();
        assert!(set.contains(&Telecode::parse("BJP").unwrap()));
        assert!(!set.contains(&Telecode::parse("CSQ").unwrap()));
    }
}
