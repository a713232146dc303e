//! Primitives shared by the `responderapi` and `qrlyapi` binaries.
//!
//! Neither service keeps any persistent state; the only things that live for the
//! lifetime of the process are a correlation-ID allocator and (indirectly, via
//! `rand`) a thread-local PRNG. Both are exposed from here so the two binaries
//! don't duplicate them.

mod error;
mod ident;
mod time;

pub use error::HttpError;
pub use ident::CorrelationIdGenerator;
pub use time::{format_duration, now_iso8601};
