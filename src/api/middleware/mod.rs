//! HTTP middleware: request logging and panic recovery.

pub mod recover;
pub mod tracing;
