mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use time::format_description::well_known::Rfc3339;

use walletd_core::{ClientConfig, ErrorKind, HttpWalletClient, Transfer, WalletError, WalletRpc};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = ClientConfig::new(&args.rpc_url, &args.rpc_password)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let wallet = HttpWalletClient::new(config).context("configure walletd client")?;

    run(&wallet, args.command, args.json)
        .await
        .map_err(|err| report(wallet.url(), err))
}

async fn run(wallet: &dyn WalletRpc, command: Command, json: bool) -> Result<(), WalletError> {
    match command {
        Command::Balance => {
            let balance = wallet.get_balance().await?;
            if json {
                print_json(&balance);
            } else {
                println!("available: {:.2}", balance.available);
                println!("locked:    {:.2}", balance.locked);
                println!("total:     {:.2}", balance.total);
            }
        }
        Command::Address => println!("{}", wallet.get_address().await?),
        Command::Addresses => {
            let addresses = wallet.get_addresses().await?;
            if json {
                print_json(&addresses);
            } else {
                for address in addresses {
                    println!("{address}");
                }
            }
        }
        Command::Transactions {
            block_count,
            first_block_index,
            address,
        } => {
            let block_count = match block_count {
                Some(count) => count,
                None => {
                    let status = wallet.get_status().await?;
                    status.block_count.saturating_sub(first_block_index).max(1)
                }
            };
            let transfers = wallet
                .list_transactions(block_count, first_block_index, &address)
                .await?;
            if json {
                print_json(&transfers);
            } else if transfers.is_empty() {
                println!("no transfers in blocks {first_block_index}..+{block_count}");
            } else {
                for transfer in &transfers {
                    println!("{}", format_transfer(transfer));
                }
            }
        }
        Command::Status => {
            let status = wallet.get_status().await?;
            if json {
                print_json(&status);
            } else {
                println!(
                    "blocks: {}/{}  peers: {}{}",
                    status.block_count,
                    status.known_block_count,
                    status.peer_count,
                    if status.is_synced() { "" } else { "  (syncing)" }
                );
            }
        }
        Command::Send {
            address,
            amount,
            fee,
            payment_id,
            mixin,
        } => {
            let hash = wallet
                .send_transaction(&address, amount, &payment_id, fee, mixin)
                .await?;
            tracing::info!(tx_hash = %hash, amount, fee, "transaction sent");
            println!("{hash}");
        }
        Command::ViewKey => println!("{}", wallet.get_view_key().await?),
        Command::SpendKeys { address } => {
            let address = match address {
                Some(address) => address,
                None => wallet.get_address().await?,
            };
            let keys = wallet.get_spend_keys(&address).await?;
            if json {
                print_json(&serde_json::json!({
                    "address": address,
                    "spendSecretKey": keys.secret,
                    "spendPublicKey": keys.public,
                }));
            } else {
                println!("secret: {}", keys.secret);
                println!("public: {}", keys.public);
            }
        }
        Command::Save => {
            wallet.save_wallet().await?;
            tracing::info!("wallet saved");
        }
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => tracing::error!(error = %err, "could not render JSON output"),
    }
}

fn format_transfer(transfer: &Transfer) -> String {
    let when = transfer
        .timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| transfer.timestamp.unix_timestamp().to_string());
    let direction = if transfer.is_incoming { "in " } else { "out" };
    let payment_id = if transfer.payment_id.is_empty() {
        String::new()
    } else {
        format!("  payment-id {}", transfer.payment_id)
    };
    format!(
        "{when}  {direction} {:>14.2}  fee {:.2}  block {} ({} conf)  {}{payment_id}",
        transfer.amount, transfer.fee, transfer.block, transfer.confirmations, transfer.tx_hash
    )
}

/// Attach an actionable hint to errors a user can usually fix themselves.
fn report(rpc_url: &str, err: WalletError) -> eyre::Report {
    let hint = match err.kind() {
        ErrorKind::Transport if matches!(err, WalletError::HttpStatus { status: 401 | 403, .. }) => {
            Some("authentication failed; verify --rpc-password")
        }
        ErrorKind::Transport if matches!(err, WalletError::HttpStatus { status: 404, .. }) => {
            Some("endpoint path is invalid; walletd serves JSON-RPC at /json_rpc")
        }
        ErrorKind::Transport => {
            Some("is walletd running and reachable at this URL? (see --rpc-url)")
        }
        ErrorKind::Decode => Some("the endpoint answered but does not look like walletd"),
        ErrorKind::Daemon | ErrorKind::Usage => None,
    };

    let mut message = format!("walletd call to `{rpc_url}` failed: {err}");
    if let Some(hint) = hint {
        message.push_str("\nhint: ");
        message.push_str(hint);
    }
    eyre!(message)
}
