//! Parsing question text into typed questions.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::domain::Airport;

use super::{
    BelowPriceQuestion, CheapestQuestion, Question, RoutePriceQuestion, StopCountQuestion,
    StopsComparison,
};

static ROUTE_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d+): What is the price of the connection (.*)\?").unwrap()
});

static CHEAPEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d+): What is the cheapest connection from (.*)\?").unwrap()
});

static BELOW_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d+): Find all connections from (.*) below (\d+) Euros!").unwrap()
});

static STOP_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^#(\d+): How many different connections with (maximum|minimum|exactly) (\d) stops? exist between (.*)\?",
    )
    .unwrap()
});

/// Error returned when a line cannot be turned into a question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionParseError {
    /// The line matches none of the known question forms
    #[error("line does not match any known question form")]
    Unrecognized,
    /// A question form needed a fixed number of airports
    #[error("expected {expected} airports in the question, found {found}")]
    AirportCount { expected: usize, found: usize },
}

/// Extracts the airports named in a question fragment.
///
/// Unknown codes are reported and skipped, so the caller must check it
/// got the number of airports its question form needs.
fn extract_airports(fragment: &str, delimiter: &str) -> Vec<Airport> {
    fragment
        .split(delimiter)
        .filter_map(|code| match Airport::parse(code) {
            Ok(airport) => Some(airport),
            Err(err) => {
                warn!(%err, "skipping airport in question");
                None
            }
        })
        .collect()
}

fn endpoints(
    fragment: &str,
    delimiter: &str,
) -> Result<(Airport, Airport), QuestionParseError> {
    let airports = extract_airports(fragment, delimiter);
    match airports[..] {
        [from, to] => Ok((from, to)),
        _ => Err(QuestionParseError::AirportCount {
            expected: 2,
            found: airports.len(),
        }),
    }
}

/// Parses one input line into a typed question.
///
/// # Errors
///
/// Returns `Err` if the line matches no known question form, or matches
/// one but names the wrong number of valid airports.
pub fn parse_question(line: &str) -> Result<Box<dyn Question>, QuestionParseError> {
    if let Some(caps) = ROUTE_PRICE.captures(line) {
        let number = parse_number(&caps[1])?;
        let route = extract_airports(&caps[2], "-");
        return Ok(Box::new(RoutePriceQuestion::new(number, route)));
    }

    if let Some(caps) = CHEAPEST.captures(line) {
        let number = parse_number(&caps[1])?;
        let (from, to) = endpoints(&caps[2], " to ")?;
        return Ok(Box::new(CheapestQuestion::new(number, from, to)));
    }

    if let Some(caps) = BELOW_PRICE.captures(line) {
        let number = parse_number(&caps[1])?;
        let (from, to) = endpoints(&caps[2], " to ")?;
        let price_limit = caps[3]
            .parse()
            .map_err(|_| QuestionParseError::Unrecognized)?;
        return Ok(Box::new(BelowPriceQuestion::new(
            number, from, to, price_limit,
        )));
    }

    if let Some(caps) = STOP_COUNT.captures(line) {
        let number = parse_number(&caps[1])?;
        let comparison = StopsComparison::from_keyword(&caps[2])
            .ok_or(QuestionParseError::Unrecognized)?;
        let stops = caps[3]
            .parse()
            .map_err(|_| QuestionParseError::Unrecognized)?;
        let (from, to) = endpoints(&caps[4], " and ")?;
        return Ok(Box::new(StopCountQuestion::new(
            number, from, to, comparison, stops,
        )));
    }

    Err(QuestionParseError::Unrecognized)
}

fn parse_number(digits: &str) -> Result<u32, QuestionParseError> {
    digits.parse().map_err(|_| QuestionParseError::Unrecognized)
}
