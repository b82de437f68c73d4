//! Airport code type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown airport code: {code}")]
pub struct InvalidAirport {
    code: String,
}

/// An airport in the connection network.
///
/// The set of airports is closed: a code either names one of these
/// variants or is rejected at parse time. Any `Airport` value is
/// therefore valid by construction.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Airport;
///
/// let nue = Airport::parse("NUE").unwrap();
/// assert_eq!(nue.code(), "NUE");
/// assert_eq!(nue.city(), "Herzogenaurach");
///
/// // Lowercase is rejected
/// assert!(Airport::parse("nue").is_err());
///
/// // Codes outside the network are rejected
/// assert!(Airport::parse("JFK").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airport {
    Nue,
    Bos,
    Ams,
    Fra,
    Dxb,
    Hkg,
    Pdx,
    Lhr,
}

impl Airport {
    /// Every airport in the network, in declaration order.
    pub const ALL: [Airport; 8] = [
        Airport::Nue,
        Airport::Bos,
        Airport::Ams,
        Airport::Fra,
        Airport::Dxb,
        Airport::Hkg,
        Airport::Pdx,
        Airport::Lhr,
    ];

    /// Parse an airport from its 3-letter code.
    ///
    /// The input must exactly match one of the known uppercase codes.
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        match s {
            "NUE" => Ok(Airport::Nue),
            "BOS" => Ok(Airport::Bos),
            "AMS" => Ok(Airport::Ams),
            "FRA" => Ok(Airport::Fra),
            "DXB" => Ok(Airport::Dxb),
            "HKG" => Ok(Airport::Hkg),
            "PDX" => Ok(Airport::Pdx),
            "LHR" => Ok(Airport::Lhr),
            _ => Err(InvalidAirport {
                code: s.to_string(),
            }),
        }
    }

    /// Returns the 3-letter code for this airport.
    pub fn code(&self) -> &'static str {
        match self {
            Airport::Nue => "NUE",
            Airport::Bos => "BOS",
            Airport::Ams => "AMS",
            Airport::Fra => "FRA",
            Airport::Dxb => "DXB",
            Airport::Hkg => "HKG",
            Airport::Pdx => "PDX",
            Airport::Lhr => "LHR",
        }
    }

    /// Returns the city this airport serves.
    pub fn city(&self) -> &'static str {
        match self {
            Airport::Nue => "Herzogenaurach",
            Airport::Bos => "Canton, MA",
            Airport::Ams => "Amsterdam",
            Airport::Fra => "Frankfurt",
            Airport::Dxb => "Dubai",
            Airport::Hkg => "Hong Kong",
            Airport::Pdx => "Portland, OR",
            Airport::Lhr => "London-Heathrow",
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Airport {
    type Err = InvalidAirport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Airport::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        for airport in Airport::ALL {
            assert_eq!(Airport::parse(airport.code()), Ok(airport));
        }
    }

    #[test]
    fn reject_lowercase() {
        assert!(Airport::parse("nue").is_err());
        assert!(Airport::parse("Nue").is_err());
        assert!(Airport::parse("lhR").is_err());
    }

    #[test]
    fn reject_unknown_codes() {
        assert!(Airport::parse("JFK").is_err());
        assert!(Airport::parse("XXX").is_err());
        assert!(Airport::parse("").is_err());
        assert!(Airport::parse("NUEE").is_err());
        assert!(Airport::parse("NU").is_err());
    }

    #[test]
    fn display_is_code() {
        assert_eq!(format!("{}", Airport::Lhr), "LHR");
        assert_eq!(format!("{}", Airport::Pdx), "PDX");
    }

    #[test]
    fn from_str_roundtrip() {
        let ams: Airport = "AMS".parse().unwrap();
        assert_eq!(ams, Airport::Ams);
    }

    #[test]
    fn city_names() {
        assert_eq!(Airport::Nue.city(), "Herzogenaurach");
        assert_eq!(Airport::Hkg.city(), "Hong Kong");
    }

    #[test]
    fn error_message_carries_code() {
        let err = Airport::parse("ZRH").unwrap_err();
        assert_eq!(err.to_string(), "unknown airport code: ZRH");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: every known code parses back to itself.
        #[test]
        fn roundtrip(idx in 0usize..Airport::ALL.len()) {
            let airport = Airport::ALL[idx];
            prop_assert_eq!(Airport::parse(airport.code()), Ok(airport));
        }

        /// Any 3-letter string that is not a known code is rejected.
        #[test]
        fn unknown_codes_rejected(s in "[A-Z]{3}") {
            let known = Airport::ALL.iter().any(|a| a.code() == s);
            prop_assert_eq!(Airport::parse(&s).is_ok(), known);
        }

        /// Strings of the wrong length never parse.
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,8}") {
            prop_assert!(Airport::parse(&s).is_err());
        }
    }
}
