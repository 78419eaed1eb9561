use bitcoin::Amount;
use types::{
    errors::ApiError,
    notice::Notice,
    send::{AddressValidity, SubmissionResult},
};

use crate::{Command, Effect, Phase, SendForm};

impl SendForm {
    /// The single source of truth for whether Send may fire: validated
    /// address, positive amount within the confirmed balance, a selected
    /// tier, and no submission already in flight.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.is_editing()
            && self.validity.is_valid()
            && self.selected_tier().is_some()
            && self
                .draft
                .amount()
                .is_some_and(|amount| amount > Amount::ZERO && amount <= self.confirmed_balance())
    }

    /// Preconditions are re-checked here even though the Send control is
    /// disabled while they fail: two reactive updates racing can leave a
    /// click from a state that no longer holds.
    pub(crate) fn on_submit(&mut self, effects: &mut Vec<Effect>) {
        if !self.is_editing() {
            return;
        }

        if self.draft.recipient.is_empty()
            || !self.validity.is_valid()
            || self.selected_tier().is_none()
        {
            effects.push(Effect::Notify(Notice::error(
                "Please fill in all fields correctly",
            )));
            return;
        }

        let Some(amount) = self.draft.amount().filter(|a| *a > Amount::ZERO) else {
            effects.push(Effect::Notify(Notice::error("Please enter a valid amount")));
            return;
        };

        if amount > self.confirmed_balance() {
            effects.push(Effect::Notify(Notice::error("Insufficient balance")));
            return;
        }

        // Checked above; selected_tier() is Some here.
        let Some(fee_rate) = self.selected_tier().map(|tier| tier.rate_sat_per_vb) else {
            return;
        };

        self.phase = Phase::Submitting;
        effects.push(Effect::Request(Command::CreateTransaction {
            wallet_id: self.wallet_id.clone(),
            recipient: self.draft.recipient.clone(),
            amount_btc: amount.to_btc(),
            fee_rate,
        }));
    }

    pub(crate) fn on_submit_finished(
        &mut self,
        result: Result<SubmissionResult, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        if !matches!(self.phase, Phase::Submitting) {
            return;
        }

        match result {
            Ok(submission) => {
                self.phase = Phase::Succeeded(submission);
                effects.push(Effect::Notify(Notice::info("Transaction sent successfully!")));
                // The balance is stale the moment the send goes through.
                effects.push(Effect::Request(Command::FetchBalance {
                    wallet_id: self.wallet_id.clone(),
                }));
            }
            Err(error) => {
                self.phase = Phase::Editing;
                effects.push(Effect::Notify(Notice::error(format!(
                    "Transaction failed: {error}"
                ))));
            }
        }
    }

    /// Leaves the success view and starts over. The fee catalog and balance
    /// survive; the draft and everything derived from it do not.
    pub(crate) fn on_send_another(&mut self) {
        if !matches!(self.phase, Phase::Succeeded(_)) {
            return;
        }
        self.phase = Phase::Editing;
        self.reset_draft();
    }

    /// Cancel while editing clears the draft. A submission in flight is not
    /// interruptible, and the success view closes from the host side.
    pub(crate) fn on_cancelled(&mut self) {
        if self.is_editing() {
            self.reset_draft();
        }
    }

    fn reset_draft(&mut self) {
        self.draft.clear();
        self.draft.selected_tier = self.tiers.get(1).map(|tier| tier.id.clone());
        self.validity = AddressValidity::Unknown;
        self.address_generation += 1;
        self.validating = None;
        self.estimate = None;
        self.inputs_version += 1;
        self.estimating = None;
    }
}
