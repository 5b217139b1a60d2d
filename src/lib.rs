//! RFC-compliant media type parsing and `Accept` header content negotiation.
//!
//! ```
//! use mimeparser::negotiation::best_match;
//!
//! let available = ["application/json", "text/html"];
//! let chosen = best_match(&available, "text/*;q=0.3, text/html;q=0.7, */*;q=0.5").unwrap();
//! assert_eq!(chosen, "text/html");
//! ```

pub mod api;
pub mod config;
pub mod media_type;
pub mod negotiation;
pub mod observability;

pub use media_type::{MediaType, MediaTypeError, ParamValue, Precision};
pub use negotiation::{Negotiator, best_match};
