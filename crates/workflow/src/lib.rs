use types::{
    fees::{FeeEstimate, FeeTier},
    send::{AddressValidity, Draft, SubmissionResult, WalletBalance},
};

pub mod address;
pub mod balance;
pub mod driver;
pub mod events;
pub mod fees;
pub mod submit;

#[cfg(test)]
mod tests;

pub use events::{Command, Effect, FormEvent};

/// Where the submission side of the form stands. `Succeeded` is terminal
/// until the user explicitly starts another send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Succeeded(SubmissionResult),
}

/// The send-transaction form: one open draft against one wallet.
///
/// All mutation goes through [`SendForm::apply`], which takes a single
/// event and returns the API requests to issue and the notices to surface.
/// Responses come back in as events too, stamped with the generation or
/// input version they were issued under, so a resolution that no longer
/// matches the state on screen is dropped instead of applied.
pub struct SendForm {
    pub(crate) wallet_id: String,
    pub(crate) draft: Draft,
    pub(crate) validity: AddressValidity,
    /// Bumped on every recipient edit; stale address checks carry an older
    /// value and are discarded.
    pub(crate) address_generation: u64,
    pub(crate) validating: Option<u64>,
    pub(crate) tiers: Vec<FeeTier>,
    pub(crate) loading_fees: bool,
    pub(crate) estimate: Option<FeeEstimate>,
    /// Version of the (recipient, amount, tier) inputs; bumped whenever any
    /// of them changes. Outgoing estimate requests are stamped with it.
    pub(crate) inputs_version: u64,
    pub(crate) estimating: Option<u64>,
    pub(crate) balance: Option<WalletBalance>,
    pub(crate) phase: Phase,
}

impl SendForm {
    #[must_use]
    pub fn new(wallet_id: impl Into<String>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            draft: Draft::default(),
            validity: AddressValidity::Unknown,
            address_generation: 0,
            validating: None,
            tiers: Vec::new(),
            loading_fees: false,
            estimate: None,
            inputs_version: 0,
            estimating: None,
            balance: None,
            phase: Phase::Editing,
        }
    }

    /// Applies one event and returns the effects it produced, in order.
    pub fn apply(&mut self, event: FormEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            FormEvent::Opened => self.on_opened(&mut effects),
            FormEvent::RecipientEdited(text) => self.on_recipient_edited(text, &mut effects),
            FormEvent::RecipientBlurred => self.on_recipient_blurred(&mut effects),
            FormEvent::AmountEdited(text) => self.on_amount_edited(&text, &mut effects),
            FormEvent::TierSelected(id) => self.on_tier_selected(&id, &mut effects),
            FormEvent::SendMaxRequested => self.on_send_max(&mut effects),
            FormEvent::SubmitRequested => self.on_submit(&mut effects),
            FormEvent::SendAnother => self.on_send_another(),
            FormEvent::Cancelled => self.on_cancelled(),
            FormEvent::AddressChecked { generation, result } => {
                self.on_address_checked(generation, result, &mut effects);
            }
            FormEvent::TiersLoaded(result) => self.on_tiers_loaded(result, &mut effects),
            FormEvent::BalanceLoaded(result) => self.on_balance_loaded(result, &mut effects),
            FormEvent::FeeEstimated { version, result } => {
                self.on_fee_estimated(version, result, &mut effects);
            }
            FormEvent::SubmitFinished(result) => self.on_submit_finished(result, &mut effects),
        }
        effects
    }

    #[must_use]
    pub fn wallet_id(&self) -> &str {
        &self.wallet_id
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn validity(&self) -> &AddressValidity {
        &self.validity
    }

    #[must_use]
    pub fn tiers(&self) -> &[FeeTier] {
        &self.tiers
    }

    #[must_use]
    pub fn selected_tier(&self) -> Option<&FeeTier> {
        let id = self.draft.selected_tier.as_deref()?;
        self.tiers.iter().find(|tier| tier.id == id)
    }

    #[must_use]
    pub const fn estimate(&self) -> Option<&FeeEstimate> {
        self.estimate.as_ref()
    }

    #[must_use]
    pub const fn balance(&self) -> Option<&WalletBalance> {
        self.balance.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn is_validating(&self) -> bool {
        self.validating.is_some()
    }

    #[must_use]
    pub const fn is_loading_fees(&self) -> bool {
        self.loading_fees
    }

    #[must_use]
    pub const fn is_estimating(&self) -> bool {
        self.estimating.is_some()
    }

    pub(crate) const fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }
}
