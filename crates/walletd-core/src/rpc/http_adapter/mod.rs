//! JSON-RPC client for walletd over HTTP.
//!
//! Implements [`WalletRpc`](super::WalletRpc) with `reqwest`: one POST per
//! operation, envelope decoding, and typed per-method result parsing.

mod client;
mod parsing;
mod protocol;

pub use client::HttpWalletClient;
