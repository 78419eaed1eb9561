mod address;
mod balance;

use api::wire::{AddressCheck, FeeRates, RateEstimate};
use bitcoin::Amount;
use types::{notice::Notice, send::WalletBalance};

use crate::{Command, Effect, FormEvent, SendForm};

pub(crate) const WALLET_ID: &str = "wallet-1";
pub(crate) const RECIPIENT: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

pub(crate) fn test_rates() -> FeeRates {
    FeeRates {
        low: 5,
        medium: 20,
        high: 50,
        urgent: 80,
    }
}

pub(crate) fn test_estimations() -> Vec<RateEstimate> {
    vec![
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
    ]
}

pub(crate) fn valid_check() -> AddressCheck {
    AddressCheck {
        is_valid: true,
        warning: None,
    }
}

pub(crate) fn commands(effects: &[Effect]) -> Vec<Command> {
    effects
        .iter()
        .filter_map(|effect| effect.as_command().cloned())
        .collect()
}

pub(crate) fn notices(effects: &[Effect]) -> Vec<Notice> {
    effects
        .iter()
        .filter_map(|effect| effect.as_notice().cloned())
        .collect()
}

/// A form with tiers and balance already loaded, standard tier selected.
pub(crate) fn loaded_form(confirmed_sat: u64) -> SendForm {
    let mut form = SendForm::new(WALLET_ID);
    form.apply(FormEvent::Opened);
    form.apply(FormEvent::TiersLoaded(Ok(test_rates())));
    form.apply(FormEvent::BalanceLoaded(Ok(WalletBalance {
        confirmed: Amount::from_sat(confirmed_sat),
    })));
    form
}

/// Types the standard recipient, blurs the field, and resolves the check as
/// valid. Returns the effects of the resolution.
pub(crate) fn enter_valid_recipient(form: &mut SendForm) -> Vec<Effect> {
    form.apply(FormEvent::RecipientEdited(RECIPIENT.to_string()));
    let effects = form.apply(FormEvent::RecipientBlurred);
    let generation = match commands(&effects).first() {
        Some(Command::ValidateAddress { generation, .. }) => *generation,
        other => panic!("expected a validation request, got {other:?}"),
    };
    form.apply(FormEvent::AddressChecked {
        generation,
        result: Ok(valid_check()),
    })
}

/// Pulls the version stamped on the estimate request among `effects`.
pub(crate) fn estimate_version(effects: &[Effect]) -> u64 {
    for command in commands(effects) {
        if let Command::EstimateFee { version, .. } = command {
            return version;
        }
    }
    panic!("expected an estimate request in {effects:?}");
}
