//! Shared library surface for the `responderapi` and `qrlyapi` binaries.

pub mod qr;
pub mod responder;
pub mod server;
