use api::wire::AddressCheck;
use tracing::debug;
use types::{errors::ApiError, notice::Notice, send::AddressValidity};

use crate::{Command, Effect, SendForm};

impl SendForm {
    /// Any change to the recipient text invalidates whatever the last check
    /// said, before anything else can observe the new value.
    pub(crate) fn on_recipient_edited(&mut self, text: String, effects: &mut Vec<Effect>) {
        if !self.is_editing() {
            return;
        }
        self.draft.recipient = text;
        self.validity = AddressValidity::Unknown;
        self.address_generation += 1;
        self.validating = None;
        self.sync_estimate(effects);
    }

    /// Validation fires on loss of focus, not per keystroke.
    pub(crate) fn on_recipient_blurred(&mut self, effects: &mut Vec<Effect>) {
        if !self.is_editing() || self.draft.recipient.is_empty() {
            return;
        }
        self.validity = AddressValidity::Unknown;
        self.validating = Some(self.address_generation);
        effects.push(Effect::Request(Command::ValidateAddress {
            address: self.draft.recipient.clone(),
            generation: self.address_generation,
        }));
        // Validity just dropped back to unknown, so no estimate may survive
        // until the check resolves.
        self.sync_estimate(effects);
    }

    pub(crate) fn on_address_checked(
        &mut self,
        generation: u64,
        result: Result<AddressCheck, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        if generation != self.address_generation {
            debug!(generation, current = self.address_generation, "dropping stale address check");
            return;
        }
        self.validating = None;

        match result {
            Ok(check) if check.is_valid => {
                if let Some(warning) = &check.warning {
                    effects.push(Effect::Notify(Notice::warning(warning.clone())));
                }
                self.validity = AddressValidity::Valid {
                    warning: check.warning,
                };
            }
            Ok(_) => {
                self.validity = AddressValidity::Invalid;
                effects.push(Effect::Notify(Notice::error("Invalid Bitcoin address")));
            }
            Err(error) => {
                // Fail closed: an unreachable validator never yields a
                // spendable-looking address.
                self.validity = AddressValidity::Invalid;
                effects.push(Effect::Notify(Notice::error(format!(
                    "Failed to validate address: {error}"
                ))));
            }
        }

        self.sync_estimate(effects);
    }
}
