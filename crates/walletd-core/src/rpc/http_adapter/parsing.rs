use serde::de::DeserializeOwned;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::WalletError;
use crate::types::{Balance, SpendKeys, Status, Transfer};
use crate::units::to_major;

use super::protocol::json_kind;

// ==============================================================================
// Per-method result shapes
// ==============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceResult {
    available_balance: i64,
    locked_amount: i64,
}

#[derive(Deserialize)]
struct AddressesResult {
    addresses: Vec<String>,
}

#[derive(Deserialize)]
struct TransactionsResult {
    items: Vec<BlockItem>,
}

#[derive(Deserialize)]
struct BlockItem {
    transactions: Vec<TransactionItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionItem {
    payment_id: String,
    transaction_hash: String,
    timestamp: i64,
    amount: i64,
    fee: i64,
    block_index: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusResult {
    block_count: u64,
    known_block_count: u64,
    peer_count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResult {
    transaction_hash: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewKeyResult {
    view_secret_key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpendKeysResult {
    spend_secret_key: String,
    spend_public_key: String,
}

fn parse_result<T: DeserializeOwned>(
    method: &'static str,
    raw: serde_json::Value,
) -> Result<T, WalletError> {
    // Derived structs would otherwise accept `[a, b, c]` positionally.
    if !raw.is_object() {
        return Err(WalletError::decode(
            method,
            format!("expected a JSON object result, got {}", json_kind(&raw)),
        ));
    }
    serde_json::from_value(raw).map_err(|e| WalletError::decode(method, e))
}

// ==============================================================================
// Parsers
// ==============================================================================

pub(super) fn parse_balance(raw: serde_json::Value) -> Result<Balance, WalletError> {
    let result: BalanceResult = parse_result("getBalance", raw)?;
    Ok(Balance::new(
        to_major(result.available_balance),
        to_major(result.locked_amount),
    ))
}

pub(super) fn parse_addresses(raw: serde_json::Value) -> Result<Vec<String>, WalletError> {
    let result: AddressesResult = parse_result("getAddresses", raw)?;
    Ok(result.addresses)
}

/// Flatten `items[].transactions[]` into transfers.
///
/// `block_count` is the value the caller queried with, not the chain height;
/// confirmations are relative to it. A null result means the daemon has
/// nothing new in the range and yields an empty list.
pub(super) fn parse_transactions(
    raw: serde_json::Value,
    block_count: u64,
) -> Result<Vec<Transfer>, WalletError> {
    if raw.is_null() {
        return Ok(Vec::new());
    }

    let result: TransactionsResult = parse_result("getTransactions", raw)?;
    result
        .items
        .into_iter()
        .flat_map(|block| block.transactions)
        .map(|tx| build_transfer(tx, block_count))
        .collect()
}

fn build_transfer(tx: TransactionItem, block_count: u64) -> Result<Transfer, WalletError> {
    let timestamp = OffsetDateTime::from_unix_timestamp(tx.timestamp).map_err(|e| {
        WalletError::decode("getTransactions", format!("timestamp {}: {e}", tx.timestamp))
    })?;
    let amount = to_major(tx.amount);
    let confirmations = i64::try_from(block_count)
        .ok()
        .zip(i64::try_from(tx.block_index).ok())
        .and_then(|(count, block)| (count - block).checked_add(1))
        .ok_or_else(|| {
            WalletError::decode(
                "getTransactions",
                format!("block index {} out of range", tx.block_index),
            )
        })?;

    Ok(Transfer {
        payment_id: tx.payment_id,
        tx_hash: tx.transaction_hash,
        timestamp,
        amount,
        fee: to_major(tx.fee),
        block: tx.block_index,
        confirmations,
        is_incoming: amount >= 0.0,
    })
}

pub(super) fn parse_status(raw: serde_json::Value) -> Result<Status, WalletError> {
    let result: StatusResult = parse_result("getStatus", raw)?;
    Ok(Status {
        block_count: result.block_count,
        known_block_count: result.known_block_count,
        peer_count: result.peer_count,
    })
}

pub(super) fn parse_transaction_hash(raw: serde_json::Value) -> Result<String, WalletError> {
    let result: SendResult = parse_result("sendTransaction", raw)?;
    Ok(result.transaction_hash)
}

pub(super) fn parse_view_key(raw: serde_json::Value) -> Result<String, WalletError> {
    let result: ViewKeyResult = parse_result("getViewKey", raw)?;
    Ok(result.view_secret_key)
}

pub(super) fn parse_spend_keys(raw: serde_json::Value) -> Result<SpendKeys, WalletError> {
    let result: SpendKeysResult = parse_result("getSpendKeys", raw)?;
    Ok(SpendKeys {
        secret: result.spend_secret_key,
        public: result.spend_public_key,
    })
}
