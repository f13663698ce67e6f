use async_trait::async_trait;
use reqwest::header;
use serde_json::json;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::WalletError;
use crate::types::{Balance, SpendKeys, Status, Transfer};
use crate::units::to_minor;

use super::super::WalletRpc;
use super::parsing::{
    parse_addresses, parse_balance, parse_spend_keys, parse_status, parse_transaction_hash,
    parse_transactions, parse_view_key,
};
use super::protocol::{decode_envelope, JsonRpcRequest, REQUEST_ID};

/// walletd JSON-RPC client over HTTP(S).
///
/// Every operation is a single POST; nothing is cached between calls.
pub struct HttpWalletClient {
    client: reqwest::Client,
    url: String,
    password: String,
}

impl HttpWalletClient {
    /// Create a client for one walletd endpoint.
    ///
    /// The config is validated first: a URL that is not `http://` or
    /// `https://`, or a zero timeout, fails with
    /// [`WalletError::InvalidConfig`]. No request is made here.
    pub fn new(config: ClientConfig) -> Result<Self, WalletError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| WalletError::InvalidConfig(format!("build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url,
            password: config.password,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn rpc_call(
        &self,
        method: &'static str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, WalletError> {
        debug!(rpc.method = method, "rpc call");
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            password: &self.password,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await?;
        let status = response.status();

        let body = response.text().await?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");

        decode_envelope(method, status, &body)
    }
}

#[async_trait]
impl WalletRpc for HttpWalletClient {
    async fn get_balance(&self) -> Result<Balance, WalletError> {
        let raw = self.rpc_call("getBalance", json!({})).await?;
        let balance = parse_balance(raw)?;
        debug!(
            available = balance.available,
            locked = balance.locked,
            "wallet balance"
        );
        Ok(balance)
    }

    async fn get_addresses(&self) -> Result<Vec<String>, WalletError> {
        let raw = self.rpc_call("getAddresses", json!({})).await?;
        parse_addresses(raw)
    }

    async fn list_transactions(
        &self,
        block_count: u64,
        first_block_index: u64,
        addresses: &[String],
    ) -> Result<Vec<Transfer>, WalletError> {
        let raw = self
            .rpc_call(
                "getTransactions",
                json!({
                    "blockCount": block_count,
                    "firstBlockIndex": first_block_index,
                    "addresses": addresses,
                }),
            )
            .await?;
        let transfers = parse_transactions(raw, block_count)?;
        debug!(
            first_block_index,
            block_count,
            transfers = transfers.len(),
            "wallet transfers"
        );
        Ok(transfers)
    }

    async fn get_status(&self) -> Result<Status, WalletError> {
        let raw = self.rpc_call("getStatus", json!({})).await?;
        let status = parse_status(raw)?;
        debug!(
            block_count = status.block_count,
            known_block_count = status.known_block_count,
            peer_count = status.peer_count,
            "wallet status"
        );
        Ok(status)
    }

    async fn send_transaction(
        &self,
        address: &str,
        amount: f64,
        payment_id: &str,
        fee: f64,
        mixin: u32,
    ) -> Result<String, WalletError> {
        let params = send_params(address, amount, payment_id, fee, mixin)?;
        let raw = self.rpc_call("sendTransaction", params).await?;
        parse_transaction_hash(raw)
    }

    async fn get_view_key(&self) -> Result<String, WalletError> {
        let raw = self.rpc_call("getViewKey", json!({})).await?;
        parse_view_key(raw)
    }

    async fn get_spend_keys(&self, address: &str) -> Result<SpendKeys, WalletError> {
        let raw = self
            .rpc_call("getSpendKeys", json!({ "address": address }))
            .await?;
        parse_spend_keys(raw)
    }

    async fn save_wallet(&self) -> Result<(), WalletError> {
        self.rpc_call("save", json!({})).await?;
        Ok(())
    }
}

/// Build `sendTransaction` params with a single transfer entry.
fn send_params(
    address: &str,
    amount: f64,
    payment_id: &str,
    fee: f64,
    mixin: u32,
) -> Result<serde_json::Value, WalletError> {
    if amount < 0.0 {
        return Err(WalletError::InvalidAmount(format!("amount {amount} is negative")));
    }
    if fee < 0.0 {
        return Err(WalletError::InvalidAmount(format!("fee {fee} is negative")));
    }
    let amount = to_minor(amount)?;
    let fee = to_minor(fee)?;

    Ok(json!({
        "fee": fee,
        "paymentId": payment_id,
        "anonymity": mixin,
        "transfers": [{ "amount": amount, "address": address }],
    }))
}
