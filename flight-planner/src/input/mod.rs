//! Input file loading.
//!
//! An input file carries one `Connections:` line describing the segment
//! multiset and any number of question lines. Malformed entries are
//! reported and skipped; the only fatal condition is a file that yields
//! no graph at all.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::domain::{Airport, FlightSegment};
use crate::graph::ConnectionGraph;
use crate::question::{Question, parse_question};

const CONNECTIONS_PREFIX: &str = "Connections:";

static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{3})-([A-Z]{3})-(\d+)").unwrap());

/// A fully loaded input: the graph plus the questions to run against it,
/// in input order.
pub struct Input {
    pub graph: ConnectionGraph,
    pub questions: Vec<Box<dyn Question>>,
}

/// Error loading an input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// No connections line yielded any valid segment
    #[error("input contains no valid connections, nothing to query")]
    NoConnections,
}

/// Loads and parses an input file.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, or if it contains no valid
/// connection segments (there is no graph to query, so the run aborts).
pub fn load(path: &Path) -> Result<Input, InputError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parses input text into a graph and a question list.
///
/// Unparseable connection entries and unrecognized question lines are
/// reported through `warn` and skipped.
pub fn parse(text: &str) -> Result<Input, InputError> {
    let mut graph = ConnectionGraph::new();
    let mut questions: Vec<Box<dyn Question>> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(line, "processing input line");

        if let Some(list) = line.strip_prefix(CONNECTIONS_PREFIX) {
            parse_connections(&mut graph, list);
        } else {
            match parse_question(line) {
                Ok(question) => questions.push(question),
                Err(err) => warn!(%err, line, "skipping line"),
            }
        }
    }

    if graph.nodes().is_empty() {
        return Err(InputError::NoConnections);
    }

    Ok(Input { graph, questions })
}

/// Parses a comma-separated connections specification into the graph.
///
/// Each entry must look like `XXX-YYY-99`. Entries with an unknown
/// airport code, a malformed shape, or an out-of-range price are
/// reported and skipped.
fn parse_connections(graph: &mut ConnectionGraph, list: &str) {
    for entry in list.split(',') {
        let entry = entry.trim();
        let Some(caps) = SEGMENT.captures(entry) else {
            warn!(entry, "connection entry is not of the form XXX-YYY-99");
            continue;
        };

        let source = match Airport::parse(&caps[1]) {
            Ok(airport) => airport,
            Err(err) => {
                warn!(%err, entry, "skipping connection");
                continue;
            }
        };
        let destination = match Airport::parse(&caps[2]) {
            Ok(airport) => airport,
            Err(err) => {
                warn!(%err, entry, "skipping connection");
                continue;
            }
        };
        let price = match caps[3].parse::<u32>() {
            Ok(price) => price,
            Err(err) => {
                warn!(%err, entry, "skipping connection with unusable price");
                continue;
            }
        };

        graph.add_edge(FlightSegment::new(source, destination, price));
    }
}
