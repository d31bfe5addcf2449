//! Command handlers.
//!
//! Each handler turns the shared request flags into a validated
//! [`RoboHashRequestBuilder`](robohash_client::RoboHashRequestBuilder),
//! calls the client, and formats the result for the terminal. Request
//! validation lives in the client crate; handlers only print.

pub mod describe;
pub mod fetch;
pub mod url;
