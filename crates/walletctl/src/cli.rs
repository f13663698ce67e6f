use clap::{Parser, Subcommand};

use walletd_core::config::DEFAULT_RPC_URL;

/// walletctl — query and drive a walletd wallet daemon over JSON-RPC.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// walletd JSON-RPC endpoint.
    #[arg(long, default_value = DEFAULT_RPC_URL, env = "WALLETD_RPC_URL")]
    pub rpc_url: String,

    /// walletd RPC password.
    #[arg(long, default_value = "", env = "WALLETD_RPC_PASSWORD", hide_env_values = true)]
    pub rpc_password: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Print results as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show available, locked and total balance.
    Balance,

    /// Show the wallet's primary address.
    Address,

    /// List every address in the wallet container.
    Addresses,

    /// List transfers in a block range.
    Transactions {
        /// Number of blocks to scan. Defaults to everything the wallet has
        /// synced past `--first-block-index`.
        #[arg(long)]
        block_count: Option<u64>,

        #[arg(long, default_value = "0")]
        first_block_index: u64,

        /// Restrict to these addresses (repeatable).
        #[arg(long)]
        address: Vec<String>,
    },

    /// Show sync height and peer count.
    Status,

    /// Send coins to one address.
    Send {
        address: String,

        /// Amount in coins, not hundredths.
        amount: f64,

        #[arg(long, default_value = "0.1")]
        fee: f64,

        #[arg(long, default_value = "")]
        payment_id: String,

        #[arg(long, default_value = "3")]
        mixin: u32,
    },

    /// Print the private view key.
    ViewKey,

    /// Print the spend key pair of an address (primary address if omitted).
    SpendKeys { address: Option<String> },

    /// Persist the wallet container.
    Save,
}
