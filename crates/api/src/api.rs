use dyn_clone::DynClone;
use types::{
    errors::ApiError,
    send::{SubmissionResult, WalletBalance},
};

use crate::wire::{
    AddressCheck, FeeRates, HistoryEntry, LoginResponse, RateEstimate, WalletSummary,
};

/// The wallet service's remote operations, as the client consumes them.
/// Validation, estimation, coin selection, signing and broadcast all happen
/// server-side; this trait only carries their results.
#[async_trait::async_trait]
pub trait WalletApi: Send + Sync + DynClone {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    async fn list_wallets(&self) -> Result<Vec<WalletSummary>, ApiError>;

    async fn wallet_balance(&self, wallet_id: &str) -> Result<WalletBalance, ApiError>;

    async fn validate_address(&self, address: &str) -> Result<AddressCheck, ApiError>;

    async fn fee_rates(&self) -> Result<FeeRates, ApiError>;

    /// Fee projections for every rate the service quotes; the caller picks
    /// the entry matching its selected tier.
    async fn estimate_fee(
        &self,
        wallet_id: &str,
        to_address: &str,
        amount_btc: f64,
    ) -> Result<Vec<RateEstimate>, ApiError>;

    async fn create_transaction(
        &self,
        wallet_id: &str,
        to_address: &str,
        amount_btc: f64,
        fee_rate: u64,
    ) -> Result<SubmissionResult, ApiError>;

    async fn next_address(&self, wallet_id: &str) -> Result<String, ApiError>;

    async fn transaction_history(
        &self,
        wallet_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<HistoryEntry>, ApiError>;
}

dyn_clone::clone_trait_object!(WalletApi);
