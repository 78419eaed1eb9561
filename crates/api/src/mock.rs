use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use bitcoin::Amount;
use types::{
    amount::amount_from_btc,
    errors::ApiError,
    send::{SubmissionResult, WalletBalance},
};

use crate::{
    api::WalletApi,
    wire::{AddressCheck, FeeRates, HistoryEntry, LoginResponse, RateEstimate, WalletSummary},
};

/// Arguments of one `create_transaction` call, as recorded by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCall {
    pub wallet_id: String,
    pub to_address: String,
    pub amount_btc: f64,
    pub fee_rate: u64,
}

/// Scriptable in-memory wallet service. Tests configure responses up front
/// and inspect the recorded create calls afterwards. Clones share the call
/// log so a copy handed to a driver still reports into the same test.
#[derive(Clone)]
pub struct MockWalletApi {
    // address -> (is_valid, warning)
    pub addresses: HashMap<String, (bool, Option<String>)>,
    pub fail_validation: bool,
    pub rates: FeeRates,
    pub fail_rates: bool,
    pub estimations: Vec<RateEstimate>,
    pub fail_estimate: bool,
    // wallet id -> confirmed sats
    pub balances: HashMap<String, u64>,
    pub submit_error: Option<String>,
    created: Arc<Mutex<Vec<CreateCall>>>,
    estimate_requests: Arc<Mutex<u32>>,
}

impl Default for MockWalletApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWalletApi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            addresses: HashMap::new(),
            fail_validation: false,
            rates: FeeRates {
                low: 5,
                medium: 20,
                high: 50,
                urgent: 80,
            },
            fail_rates: false,
            estimations: vec![
                RateEstimate {
                    fee_rate: 5,
                    estimated_fee_btc: 0.00000705,
                },
                RateEstimate {
                    fee_rate: 20,
                    estimated_fee_btc: 0.0000282,
                },
                RateEstimate {
                    fee_rate: 50,
                    estimated_fee_btc: 0.0000705,
                },
                RateEstimate {
                    fee_rate: 80,
                    estimated_fee_btc: 0.0001128,
                },
            ],
            fail_estimate: false,
            balances: HashMap::new(),
            submit_error: None,
            created: Arc::new(Mutex::new(Vec::new())),
            estimate_requests: Arc::new(Mutex::new(0)),
        }
    }

    pub fn add_address(&mut self, address: impl Into<String>, is_valid: bool) {
        self.addresses.insert(address.into(), (is_valid, None));
    }

    pub fn add_address_with_warning(
        &mut self,
        address: impl Into<String>,
        warning: impl Into<String>,
    ) {
        self.addresses
            .insert(address.into(), (true, Some(warning.into())));
    }

    pub fn set_balance(&mut self, wallet_id: impl Into<String>, confirmed_sat: u64) {
        self.balances.insert(wallet_id.into(), confirmed_sat);
    }

    #[must_use]
    pub fn create_calls(&self) -> Vec<CreateCall> {
        self.created.lock().unwrap().clone()
    }

    #[must_use]
    pub fn estimate_request_count(&self) -> u32 {
        *self.estimate_requests.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl WalletApi for MockWalletApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            token: "mock-token".to_string(),
        })
    }

    async fn list_wallets(&self) -> Result<Vec<WalletSummary>, ApiError> {
        Ok(self
            .balances
            .keys()
            .map(|id| WalletSummary {
                id: id.clone(),
                name: None,
            })
            .collect())
    }

    async fn wallet_balance(&self, wallet_id: &str) -> Result<WalletBalance, ApiError> {
        let confirmed = self.balances.get(wallet_id).copied().unwrap_or(0);
        Ok(WalletBalance {
            confirmed: Amount::from_sat(confirmed),
        })
    }

    async fn validate_address(&self, address: &str) -> Result<AddressCheck, ApiError> {
        if self.fail_validation {
            return Err(ApiError::Transport("connection refused".to_string()));
        }

        // An unconfigured mock accepts everything, like a permissive server.
        if self.addresses.is_empty() {
            return Ok(AddressCheck {
                is_valid: true,
                warning: None,
            });
        }

        match self.addresses.get(address) {
            Some((is_valid, warning)) => Ok(AddressCheck {
                is_valid: *is_valid,
                warning: warning.clone(),
            }),
            None => Ok(AddressCheck {
                is_valid: false,
                warning: None,
            }),
        }
    }

    async fn fee_rates(&self) -> Result<FeeRates, ApiError> {
        if self.fail_rates {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(self.rates)
    }

    async fn estimate_fee(
        &self,
        _wallet_id: &str,
        _to_address: &str,
        _amount_btc: f64,
    ) -> Result<Vec<RateEstimate>, ApiError> {
        *self.estimate_requests.lock().unwrap() += 1;
        if self.fail_estimate {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(self.estimations.clone())
    }

    async fn create_transaction(
        &self,
        wallet_id: &str,
        to_address: &str,
        amount_btc: f64,
        fee_rate: u64,
    ) -> Result<SubmissionResult, ApiError> {
        if let Some(message) = &self.submit_error {
            return Err(ApiError::Server(message.clone()));
        }

        let mut created = self.created.lock().unwrap();
        created.push(CreateCall {
            wallet_id: wallet_id.to_string(),
            to_address: to_address.to_string(),
            amount_btc,
            fee_rate,
        });

        let fee_btc = self
            .estimations
            .iter()
            .find(|estimate| estimate.fee_rate == fee_rate)
            .map_or(0.0, |estimate| estimate.estimated_fee_btc);

        Ok(SubmissionResult {
            txid: format!("{:064x}", created.len()),
            amount: amount_from_btc(amount_btc)?,
            to_address: to_address.to_string(),
            fee: amount_from_btc(fee_btc)?,
        })
    }

    async fn next_address(&self, _wallet_id: &str) -> Result<String, ApiError> {
        Ok("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string())
    }

    async fn transaction_history(
        &self,
        _wallet_id: &str,
        _limit: Option<u32>,
    ) -> Result<Vec<HistoryEntry>, ApiError> {
        Ok(vec![])
    }
}
