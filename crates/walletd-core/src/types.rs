//! Domain records returned by the wallet client.
//!
//! All amounts are in major units; see [`crate::units`].

use serde::Serialize;
use time::OffsetDateTime;

// ==============================================================================
// Balance
// ==============================================================================

/// Wallet balance from `getBalance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balance {
    pub available: f64,
    pub locked: f64,
    /// Always `available + locked`.
    pub total: f64,
}

impl Balance {
    pub fn new(available: f64, locked: f64) -> Self {
        Self {
            available,
            locked,
            total: available + locked,
        }
    }
}

// ==============================================================================
// Sync Status
// ==============================================================================

/// Daemon sync and connectivity status from `getStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub block_count: u64,
    pub known_block_count: u64,
    pub peer_count: u64,
}

impl Status {
    /// True once the wallet has processed every block the daemon knows of.
    pub fn is_synced(&self) -> bool {
        self.block_count >= self.known_block_count
    }
}

// ==============================================================================
// Transfers
// ==============================================================================

/// One transaction entry of a `getTransactions` response, as seen by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    pub payment_id: String,
    pub tx_hash: String,
    #[serde(with = "time::serde::timestamp")]
    pub timestamp: OffsetDateTime,
    /// Negative for outgoing transfers.
    pub amount: f64,
    pub fee: f64,
    pub block: u64,
    /// `queried block count - block + 1`. Not clamped: a block beyond the
    /// queried range yields zero or less.
    pub confirmations: i64,
    pub is_incoming: bool,
}

// ==============================================================================
// Keys
// ==============================================================================

/// Spend key pair for one wallet address, from `getSpendKeys`.
#[derive(Clone, PartialEq, Eq)]
pub struct SpendKeys {
    pub secret: String,
    pub public: String,
}

impl std::fmt::Debug for SpendKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpendKeys")
            .field("secret", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}
