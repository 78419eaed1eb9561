use serde::Deserialize;

/// `POST /address/validate` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressCheck {
    pub is_valid: bool,
    #[serde(default)]
    pub warning: Option<String>,
}

/// `GET /transactions/fees` response. Rates are integer sat/vB.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct FeeRates {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    pub urgent: u64,
}

/// One entry of the `GET /transactions/estimate` response.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateEstimate {
    pub fee_rate: u64,
    pub estimated_fee_btc: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimateResponse {
    pub estimations: Vec<RateEstimate>,
}

/// `GET /wallets/{id}/balance` response, in satoshis.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BalanceResponse {
    pub confirmed: u64,
    #[serde(default)]
    pub unconfirmed: u64,
}

/// `POST /transactions/create` response. Amounts are decimal BTC.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTransaction {
    pub txid: String,
    pub amount_btc: f64,
    pub to_address: String,
    pub fee: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One row of `GET /transactions/history/{walletId}`. The service mixes
/// `toAddress` and `address` depending on direction, so both are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(rename = "type")]
    pub direction: String,
    pub amount: f64,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: String,
    #[serde(default)]
    pub confirmations: Option<u32>,
    #[serde(default)]
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub fee: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_check_tolerates_missing_warning() {
        let check: AddressCheck = serde_json::from_str(r#"{"isValid": true}"#).unwrap();
        assert!(check.is_valid);
        assert!(check.warning.is_none());

        let check: AddressCheck =
            serde_json::from_str(r#"{"isValid": true, "warning": "legacy address format"}"#)
                .unwrap();
        assert_eq!(check.warning.as_deref(), Some("legacy address format"));
    }

    #[test]
    fn estimate_response_decodes_camel_case_fields() {
        let body = r#"{"estimations": [{"feeRate": 20, "estimatedFeeBtc": 0.0000282}]}"#;
        let parsed: EstimateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.estimations.len(), 1);
        assert_eq!(parsed.estimations[0].fee_rate, 20);
    }

    #[test]
    fn created_transaction_decodes_service_shape() {
        let body = r#"{
            "txid": "ab12",
            "amountBtc": 0.001,
            "toAddress": "bc1qexample",
            "fee": 0.0000282
        }"#;
        let parsed: CreatedTransaction = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.txid, "ab12");
        assert_eq!(parsed.to_address, "bc1qexample");
    }
}
