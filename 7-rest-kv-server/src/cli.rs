use std::net::{SocketAddr, ToSocketAddrs};

use clap::Parser;

use crate::error::AddrError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve an in-memory key-value store over HTTP", long_about = None)]
pub struct Cli {
    /// HTTP service address, `host:port`. An empty host listens on all IPv4 interfaces.
    #[arg(long, default_value = ":8080")]
    pub addr: String,
}

impl Cli {
    pub fn listen_addr(&self) -> Result<SocketAddr, AddrError> {
        parse_listen_addr(&self.addr)
    }
}

/// Resolves a `host:port` string to the first matching socket address.
///
/// `:8080` binds every IPv4 interface. Hostnames go through the system
/// resolver, so this may block briefly on start-up.
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr, AddrError> {
    let trimmed = addr.trim();
    let candidate = if trimmed.starts_with(':') {
        format!("0.0.0.0{trimmed}")
    } else {
        trimmed.to_string()
    };

    candidate
        .to_socket_addrs()
        .map_err(|source| AddrError::Invalid {
            addr: addr.to_string(),
            source,
        })?
        .next()
        .ok_or_else(|| AddrError::Unresolved(addr.to_string()))
}
