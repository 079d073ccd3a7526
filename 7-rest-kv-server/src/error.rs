use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrError {
    #[error("invalid listen address '{addr}'")]
    Invalid {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listen address '{0}' did not resolve to any socket address")]
    Unresolved(String),
}
