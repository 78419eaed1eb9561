use api::wire::{FeeRates, RateEstimate};
use bitcoin::Amount;
use tracing::debug;
use types::{
    amount::{amount_from_btc, sanitize_amount_text},
    errors::ApiError,
    fees::{FeeEstimate, FeeTier},
    notice::Notice,
};

use crate::{Command, Effect, SendForm};

/// The service's four quoted rates as ordered, user-facing tiers,
/// cheapest first.
#[must_use]
pub fn tier_catalog(rates: FeeRates) -> Vec<FeeTier> {
    vec![
        FeeTier {
            id: "economy".to_string(),
            display_name: "Economy".to_string(),
            rate_sat_per_vb: rates.low,
            eta: "6+ hours".to_string(),
        },
        FeeTier {
            id: "standard".to_string(),
            display_name: "Standard".to_string(),
            rate_sat_per_vb: rates.medium,
            eta: "1-2 hours".to_string(),
        },
        FeeTier {
            id: "priority".to_string(),
            display_name: "Priority".to_string(),
            rate_sat_per_vb: rates.high,
            eta: "30-60 minutes".to_string(),
        },
        FeeTier {
            id: "express".to_string(),
            display_name: "Express".to_string(),
            rate_sat_per_vb: rates.urgent,
            eta: "10-30 minutes".to_string(),
        },
    ]
}

impl SendForm {
    pub(crate) fn on_opened(&mut self, effects: &mut Vec<Effect>) {
        // Tiers are fetched once per wallet selection; the balance refreshes
        // every time the form becomes active.
        if self.tiers.is_empty() && !self.loading_fees {
            self.loading_fees = true;
            effects.push(Effect::Request(Command::FetchFeeRates));
        }
        effects.push(Effect::Request(Command::FetchBalance {
            wallet_id: self.wallet_id.clone(),
        }));
    }

    pub(crate) fn on_tiers_loaded(
        &mut self,
        result: Result<FeeRates, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        self.loading_fees = false;
        match result {
            Ok(rates) => {
                self.tiers = tier_catalog(rates);
                // Default selection is standard, the second-cheapest tier.
                self.draft.selected_tier = self.tiers.get(1).map(|tier| tier.id.clone());
                self.sync_estimate(effects);
            }
            Err(error) => {
                self.tiers.clear();
                self.draft.selected_tier = None;
                effects.push(Effect::Notify(Notice::error(format!(
                    "Failed to load fee options: {error}"
                ))));
            }
        }
    }

    pub(crate) fn on_amount_edited(&mut self, text: &str, effects: &mut Vec<Effect>) {
        if !self.is_editing() {
            return;
        }
        self.draft.amount_text = sanitize_amount_text(text);
        self.sync_estimate(effects);
    }

    pub(crate) fn on_tier_selected(&mut self, id: &str, effects: &mut Vec<Effect>) {
        if !self.is_editing() {
            return;
        }
        if !self.tiers.iter().any(|tier| tier.id == id) {
            return;
        }
        self.draft.selected_tier = Some(id.to_string());
        self.sync_estimate(effects);
    }

    /// Re-derives the estimate after any input change. The old estimate is
    /// cleared up front either way: the totals on screen must never show a
    /// fee computed from different inputs than the current ones. A request
    /// goes out only while address, amount and tier are all usable.
    pub(crate) fn sync_estimate(&mut self, effects: &mut Vec<Effect>) {
        self.inputs_version += 1;
        self.estimate = None;

        let amount = self.draft.amount().filter(|a| *a > Amount::ZERO);
        let ready = self.validity.is_valid() && self.selected_tier().is_some();
        let Some(amount) = amount.filter(|_| ready) else {
            self.estimating = None;
            return;
        };

        self.estimating = Some(self.inputs_version);
        effects.push(Effect::Request(Command::EstimateFee {
            wallet_id: self.wallet_id.clone(),
            recipient: self.draft.recipient.clone(),
            amount_btc: amount.to_btc(),
            version: self.inputs_version,
        }));
    }

    pub(crate) fn on_fee_estimated(
        &mut self,
        version: u64,
        result: Result<Vec<RateEstimate>, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        // Attribution check: the response answers the inputs it was issued
        // for. If the triple moved on since, this response is void no matter
        // when it arrives.
        if version != self.inputs_version {
            debug!(version, current = self.inputs_version, "dropping stale fee estimate");
            return;
        }
        self.estimating = None;

        let Some(tier) = self.selected_tier().cloned() else {
            return;
        };

        match result {
            Ok(estimations) => {
                let matched = estimations
                    .iter()
                    .find(|estimate| estimate.fee_rate == tier.rate_sat_per_vb);
                if let Some(matched) = matched {
                    match amount_from_btc(matched.estimated_fee_btc) {
                        Ok(fee) => {
                            self.estimate = Some(FeeEstimate {
                                tier_id: tier.id,
                                fee,
                            });
                        }
                        Err(error) => {
                            effects.push(Effect::Notify(Notice::error(format!(
                                "Failed to estimate transaction fee: {error}"
                            ))));
                        }
                    }
                }
            }
            Err(error) => {
                effects.push(Effect::Notify(Notice::error(format!(
                    "Failed to estimate transaction fee: {error}"
                ))));
            }
        }
    }
}
