use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;
use types::{
    amount::amount_from_btc,
    errors::ApiError,
    send::{SubmissionResult, WalletBalance},
};

use crate::{
    api::WalletApi,
    session::Session,
    wire::{
        AddressCheck, CreatedTransaction, EstimateResponse, FeeRates, HistoryEntry, LoginResponse,
        RateEstimate, WalletSummary,
    },
};

/// Bearer-authenticated JSON client for the wallet service. Timeouts and
/// proxies are left to the underlying `reqwest` client configuration.
#[derive(Clone)]
pub struct HttpWalletApi {
    base_url: String,
    client: Client,
    session: Box<dyn Session>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WalletsEnvelope {
    wallets: Vec<WalletSummary>,
}

#[derive(Debug, Deserialize)]
struct NextAddressEnvelope {
    address: String,
}

#[derive(Debug, Deserialize)]
struct HistoryEnvelope {
    transactions: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct BalanceEnvelope {
    confirmed: u64,
}

impl HttpWalletApi {
    #[must_use]
    pub fn new(base_url: &str, session: Box<dyn Session>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "wallet api request");

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::SessionExpired);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Request failed with status {status}"));
            return Err(ApiError::Server(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl WalletApi for HttpWalletApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.request(
            Method::POST,
            "/auth/login",
            &[],
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    async fn list_wallets(&self) -> Result<Vec<WalletSummary>, ApiError> {
        let envelope: WalletsEnvelope = self.request(Method::GET, "/wallets", &[], None).await?;
        Ok(envelope.wallets)
    }

    async fn wallet_balance(&self, wallet_id: &str) -> Result<WalletBalance, ApiError> {
        let envelope: BalanceEnvelope = self
            .request(Method::GET, &format!("/wallets/{wallet_id}/balance"), &[], None)
            .await?;
        Ok(WalletBalance {
            confirmed: bitcoin::Amount::from_sat(envelope.confirmed),
        })
    }

    async fn validate_address(&self, address: &str) -> Result<AddressCheck, ApiError> {
        self.request(
            Method::POST,
            "/address/validate",
            &[],
            Some(json!({ "address": address })),
        )
        .await
    }

    async fn fee_rates(&self) -> Result<FeeRates, ApiError> {
        self.request(Method::GET, "/transactions/fees", &[], None)
            .await
    }

    async fn estimate_fee(
        &self,
        wallet_id: &str,
        to_address: &str,
        amount_btc: f64,
    ) -> Result<Vec<RateEstimate>, ApiError> {
        let response: EstimateResponse = self
            .request(
                Method::GET,
                "/transactions/estimate",
                &[
                    ("walletId", wallet_id.to_string()),
                    ("toAddress", to_address.to_string()),
                    ("amount", amount_btc.to_string()),
                ],
                None,
            )
            .await?;
        Ok(response.estimations)
    }

    async fn create_transaction(
        &self,
        wallet_id: &str,
        to_address: &str,
        amount_btc: f64,
        fee_rate: u64,
    ) -> Result<SubmissionResult, ApiError> {
        let created: CreatedTransaction = self
            .request(
                Method::POST,
                "/transactions/create",
                &[],
                Some(json!({
                    "walletId": wallet_id,
                    "toAddress": to_address,
                    "amount": amount_btc,
                    "feeRate": fee_rate,
                })),
            )
            .await?;

        Ok(SubmissionResult {
            amount: amount_from_btc(created.amount_btc)?,
            fee: amount_from_btc(created.fee)?,
            txid: created.txid,
            to_address: created.to_address,
        })
    }

    async fn next_address(&self, wallet_id: &str) -> Result<String, ApiError> {
        let envelope: NextAddressEnvelope = self
            .request(Method::GET, &format!("/address/{wallet_id}/next"), &[], None)
            .await?;
        Ok(envelope.address)
    }

    async fn transaction_history(
        &self,
        wallet_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<HistoryEntry>, ApiError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        let envelope: HistoryEnvelope = self
            .request(
                Method::GET,
                &format!("/transactions/history/{wallet_id}"),
                &query,
                None,
            )
            .await?;
        Ok(envelope.transactions)
    }
}
