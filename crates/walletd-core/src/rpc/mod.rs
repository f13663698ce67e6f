//! Wallet daemon RPC abstraction layer.
//!
//! Defines the [`WalletRpc`] trait and its HTTP JSON-RPC implementation
//! ([`HttpWalletClient`]).

mod http_adapter;

pub use http_adapter::HttpWalletClient;

use async_trait::async_trait;

use crate::error::WalletError;
use crate::types::{Balance, SpendKeys, Status, Transfer};

/// The walletd RPC methods this crate exposes.
///
/// Amounts are in major units on both sides of the trait; implementations
/// own the conversion to and from the daemon's minor units.
#[async_trait]
pub trait WalletRpc: Send + Sync {
    /// Available, locked and total balance of the wallet.
    async fn get_balance(&self) -> Result<Balance, WalletError>;

    /// Every address held by the wallet container, in daemon order.
    async fn get_addresses(&self) -> Result<Vec<String>, WalletError>;

    /// The wallet's primary (first) address.
    ///
    /// Fails with [`WalletError::NoAddresses`] when the container is empty.
    async fn get_address(&self) -> Result<String, WalletError> {
        self.get_addresses()
            .await?
            .into_iter()
            .next()
            .ok_or(WalletError::NoAddresses)
    }

    /// Transfers in `block_count` blocks starting at `first_block_index`,
    /// restricted to `addresses` (all addresses when empty).
    ///
    /// An empty list is a normal answer, meaning nothing new in the range.
    async fn list_transactions(
        &self,
        block_count: u64,
        first_block_index: u64,
        addresses: &[String],
    ) -> Result<Vec<Transfer>, WalletError>;

    /// Wallet sync height, the daemon's known height, and peer count.
    async fn get_status(&self) -> Result<Status, WalletError>;

    /// Send `amount` to `address`, returning the transaction hash.
    async fn send_transaction(
        &self,
        address: &str,
        amount: f64,
        payment_id: &str,
        fee: f64,
        mixin: u32,
    ) -> Result<String, WalletError>;

    /// The container's private view key.
    async fn get_view_key(&self) -> Result<String, WalletError>;

    /// Spend key pair of `address`.
    async fn get_spend_keys(&self, address: &str) -> Result<SpendKeys, WalletError>;

    /// Ask the daemon to persist the wallet container to disk.
    async fn save_wallet(&self) -> Result<(), WalletError>;
}
