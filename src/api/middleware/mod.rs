//! API middleware components.
//!
//! - [`request_log`]: one log line per inbound request

pub mod request_log;

pub use request_log::{RequestLogLayer, request_line};
