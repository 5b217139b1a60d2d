//! Content negotiation
//!
//! Picks the representation a server should return for a client's
//! `Accept`-style header:
//!
//! 1. the header is split into media ranges ([`AcceptHeader`])
//! 2. each available media type is scored against those ranges
//!    ([`fitness_and_quality`])
//! 3. the highest `(fitness, quality, position)` wins ([`Negotiator`])
//!
//! Everything here is a pure function of its inputs.

mod accept;
mod fitness;
mod selector;

pub use accept::AcceptHeader;
pub use fitness::{FitnessQuality, fitness_and_quality};
pub use selector::{Negotiator, Ranked, best_match};
