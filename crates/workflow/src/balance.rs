use bitcoin::Amount;
use types::{amount::format_btc, errors::ApiError, notice::Notice, send::WalletBalance};

use crate::{Effect, SendForm};

impl SendForm {
    /// Confirmed balance, or zero while it hasn't loaded. An unknown
    /// balance disables submission rather than permitting it.
    #[must_use]
    pub fn confirmed_balance(&self) -> Amount {
        self.balance.map_or(Amount::ZERO, |balance| balance.confirmed)
    }

    /// The most the user can send: confirmed balance minus the estimated
    /// fee, floored at zero. With no estimate yet the full balance is used;
    /// the server has the final word at submission time.
    #[must_use]
    pub fn max_spendable(&self) -> Amount {
        let confirmed = self.confirmed_balance();
        match &self.estimate {
            Some(estimate) => confirmed
                .checked_sub(estimate.fee)
                .unwrap_or(Amount::ZERO),
            None => confirmed,
        }
    }

    /// One-shot assignment into the amount field. The user can still type
    /// something larger afterwards; the submit precondition catches that,
    /// nothing silently clamps it.
    pub(crate) fn on_send_max(&mut self, effects: &mut Vec<Effect>) {
        if !self.is_editing() {
            return;
        }
        self.draft.amount_text = format_btc(self.max_spendable());
        self.sync_estimate(effects);
    }

    pub(crate) fn on_balance_loaded(
        &mut self,
        result: Result<WalletBalance, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(balance) => self.balance = Some(balance),
            Err(error) => {
                effects.push(Effect::Notify(Notice::error(format!(
                    "Failed to load wallet balance: {error}"
                ))));
            }
        }
    }
}
