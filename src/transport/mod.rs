//! Transport bindings: local stdio stream and stateless HTTP

pub mod http;
pub mod stdio;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// Stateless JSON-RPC over HTTP POST
    Http,
}
