//! Flight connection question answerer.
//!
//! Answers questions about trips through a small priced flight network:
//! fixed-route prices, cheapest connections, all connections under a
//! price ceiling, and counts bounded by stop count. The input is a
//! text file with one connections line and one question per line; the
//! output is one answer line per question, in input order.

pub mod domain;
pub mod graph;
pub mod input;
pub mod question;
