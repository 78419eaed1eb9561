use bitcoin::Amount;
use types::errors::ApiError;

use super::{commands, enter_valid_recipient, estimate_version, loaded_form, notices, test_estimations};
use crate::{Command, FormEvent};

#[test]
fn send_max_subtracts_a_known_fee_from_the_balance() {
    let mut form = loaded_form(100_000);
    enter_valid_recipient(&mut form);
    let effects = form.apply(FormEvent::AmountEdited("0.0005".to_string()));
    let version = estimate_version(&effects);
    form.apply(FormEvent::FeeEstimated {
        version,
        result: Ok(test_estimations()),
    });
    assert_eq!(form.estimate().unwrap().fee, Amount::from_sat(2_820));

    form.apply(FormEvent::SendMaxRequested);
    // 100_000 - 2_820 sats, shown with full precision.
    assert_eq!(form.draft().amount_text, "0.00097180");
}

#[test]
fn send_max_without_an_estimate_uses_the_full_balance() {
    let mut form = loaded_form(100_000);
    form.apply(FormEvent::SendMaxRequested);
    assert_eq!(form.draft().amount_text, "0.00100000");
}

#[test]
fn send_max_never_goes_negative() {
    let mut form = loaded_form(1_000);
    enter_valid_recipient(&mut form);
    let effects = form.apply(FormEvent::AmountEdited("0.00000900".to_string()));
    let version = estimate_version(&effects);
    form.apply(FormEvent::FeeEstimated {
        version,
        result: Ok(test_estimations()),
    });
    // Fee (2_820 sat) exceeds the balance (1_000 sat).
    form.apply(FormEvent::SendMaxRequested);
    assert_eq!(form.draft().amount_text, "0.00000000");
}

#[test]
fn send_max_retriggers_estimation_for_the_new_amount() {
    let mut form = loaded_form(100_000);
    enter_valid_recipient(&mut form);
    let effects = form.apply(FormEvent::SendMaxRequested);
    // Address is valid, tier selected, amount now positive: a fresh
    // estimate request goes out for the assigned amount.
    let issued = commands(&effects);
    assert!(matches!(
        issued.as_slice(),
        [Command::EstimateFee { amount_btc, .. }] if (*amount_btc - 0.001).abs() < 1e-12
    ));
}

#[test]
fn send_max_is_a_one_shot_assignment_not_a_cap() {
    let mut form = loaded_form(100_000);
    enter_valid_recipient(&mut form);
    form.apply(FormEvent::SendMaxRequested);
    assert_eq!(form.draft().amount_text, "0.00100000");

    // The user can still type past the balance; submission catches it.
    form.apply(FormEvent::AmountEdited("0.002".to_string()));
    assert_eq!(form.draft().amount_text, "0.002");
    assert!(!form.submit_enabled());
}

#[test]
fn balance_fetch_failure_surfaces_a_notice() {
    let mut form = loaded_form(100_000);
    let effects = form.apply(FormEvent::BalanceLoaded(Err(ApiError::Transport(
        "connection refused".to_string(),
    ))));
    assert_eq!(notices(&effects).len(), 1);
    // The previously loaded balance is kept rather than zeroed.
    assert_eq!(form.confirmed_balance(), Amount::from_sat(100_000));
}
