use assert_matches::assert_matches;
use types::{errors::ApiError, notice::NoticeLevel, send::AddressValidity};

use super::{RECIPIENT, commands, enter_valid_recipient, loaded_form, notices, valid_check};
use crate::{Command, FormEvent};

#[test]
fn blur_issues_one_validation_request() {
    let mut form = loaded_form(10_000_000);
    form.apply(FormEvent::RecipientEdited(RECIPIENT.to_string()));
    assert_matches!(form.validity(), AddressValidity::Unknown);

    let effects = form.apply(FormEvent::RecipientBlurred);
    let issued = commands(&effects);
    assert_matches!(
        issued.as_slice(),
        [Command::ValidateAddress { address, .. }] if address == RECIPIENT
    );
    assert!(form.is_validating());
}

#[test]
fn blur_with_empty_recipient_is_inert() {
    let mut form = loaded_form(10_000_000);
    let effects = form.apply(FormEvent::RecipientBlurred);
    assert!(effects.is_empty());
    assert!(!form.is_validating());
}

#[test]
fn valid_resolution_applies_to_current_text() {
    let mut form = loaded_form(10_000_000);
    enter_valid_recipient(&mut form);
    assert_matches!(form.validity(), AddressValidity::Valid { warning: None });
    assert!(!form.is_validating());
}

#[test]
fn editing_resets_validity_before_any_result_lands() {
    let mut form = loaded_form(10_000_000);
    form.apply(FormEvent::RecipientEdited(RECIPIENT.to_string()));
    let effects = form.apply(FormEvent::RecipientBlurred);
    let generation = match commands(&effects).first() {
        Some(Command::ValidateAddress { generation, .. }) => *generation,
        other => panic!("expected validation request, got {other:?}"),
    };

    // The user keeps typing while the check is in flight.
    form.apply(FormEvent::RecipientEdited(format!("{RECIPIENT}x")));
    assert_matches!(form.validity(), AddressValidity::Unknown);
    assert!(!form.is_validating());

    // The old check resolves; it answers text that is no longer on screen.
    let effects = form.apply(FormEvent::AddressChecked {
        generation,
        result: Ok(valid_check()),
    });
    assert!(effects.is_empty());
    assert_matches!(form.validity(), AddressValidity::Unknown);
}

#[test]
fn invalid_address_surfaces_an_error() {
    let mut form = loaded_form(10_000_000);
    form.apply(FormEvent::RecipientEdited("not-an-address".to_string()));
    let effects = form.apply(FormEvent::RecipientBlurred);
    let generation = match commands(&effects).first() {
        Some(Command::ValidateAddress { generation, .. }) => *generation,
        other => panic!("expected validation request, got {other:?}"),
    };

    let effects = form.apply(FormEvent::AddressChecked {
        generation,
        result: Ok(api::wire::AddressCheck {
            is_valid: false,
            warning: None,
        }),
    });
    assert_matches!(form.validity(), AddressValidity::Invalid);
    let raised = notices(&effects);
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].level, NoticeLevel::Error);
}

#[test]
fn validation_failure_fails_closed() {
    let mut form = loaded_form(10_000_000);
    form.apply(FormEvent::RecipientEdited(RECIPIENT.to_string()));
    let effects = form.apply(FormEvent::RecipientBlurred);
    let generation = match commands(&effects).first() {
        Some(Command::ValidateAddress { generation, .. }) => *generation,
        other => panic!("expected validation request, got {other:?}"),
    };

    let effects = form.apply(FormEvent::AddressChecked {
        generation,
        result: Err(ApiError::Transport("connection refused".to_string())),
    });
    // Never left hanging in Unknown, and never permissive.
    assert_matches!(form.validity(), AddressValidity::Invalid);
    assert_eq!(notices(&effects).len(), 1);
    assert!(!form.is_validating());
}

#[test]
fn format_warning_is_advisory_not_blocking() {
    let mut form = loaded_form(10_000_000);
    form.apply(FormEvent::RecipientEdited(RECIPIENT.to_string()));
    let effects = form.apply(FormEvent::RecipientBlurred);
    let generation = match commands(&effects).first() {
        Some(Command::ValidateAddress { generation, .. }) => *generation,
        other => panic!("expected validation request, got {other:?}"),
    };

    let effects = form.apply(FormEvent::AddressChecked {
        generation,
        result: Ok(api::wire::AddressCheck {
            is_valid: true,
            warning: Some("legacy address format".to_string()),
        }),
    });
    assert!(form.validity().is_valid());
    let raised = notices(&effects);
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].level, NoticeLevel::Warning);
}
