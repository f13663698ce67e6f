pub mod config;
pub mod error;
pub mod rpc;
pub mod types;
pub mod units;

pub use config::ClientConfig;
pub use error::{ErrorKind, WalletError};
pub use rpc::{HttpWalletClient, WalletRpc};
pub use types::{Balance, SpendKeys, Status, Transfer};
