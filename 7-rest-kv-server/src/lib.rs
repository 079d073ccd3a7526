//! Plain-text key-value service over HTTP.
//!
//! Modules, leaf first:
//!
//! - [`store`] holds the shared in-memory map behind a read/write lock.
//! - [`handlers`] turns path parameters into store reads and writes and
//!   formats the plain-text responses.
//! - [`app`] wires the handlers into an axum `Router`.
//! - [`server`] binds a socket and serves the router until shutdown.
//! - [`cli`] parses the listen address flag.
//!
//! Integration tests use this crate directly to drive a real server over
//! loopback.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod server;
pub mod store;
