use api::wire::{AddressCheck, FeeRates, RateEstimate};
use types::{
    errors::ApiError,
    notice::Notice,
    send::{SubmissionResult, WalletBalance},
};

/// Everything that can happen to the form: user input on one side, request
/// resolutions on the other. Resolution events carry the generation or
/// version they were issued under.
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The form became active: wallet selected, session present.
    Opened,
    RecipientEdited(String),
    RecipientBlurred,
    AmountEdited(String),
    TierSelected(String),
    SendMaxRequested,
    SubmitRequested,
    SendAnother,
    Cancelled,

    AddressChecked {
        generation: u64,
        result: Result<AddressCheck, ApiError>,
    },
    TiersLoaded(Result<FeeRates, ApiError>),
    BalanceLoaded(Result<WalletBalance, ApiError>),
    FeeEstimated {
        version: u64,
        result: Result<Vec<RateEstimate>, ApiError>,
    },
    SubmitFinished(Result<SubmissionResult, ApiError>),
}

/// An API request the form wants issued. The driver runs it and feeds the
/// matching resolution event back in.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ValidateAddress {
        address: String,
        generation: u64,
    },
    FetchFeeRates,
    FetchBalance {
        wallet_id: String,
    },
    EstimateFee {
        wallet_id: String,
        recipient: String,
        amount_btc: f64,
        version: u64,
    },
    CreateTransaction {
        wallet_id: String,
        recipient: String,
        amount_btc: f64,
        fee_rate: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Request(Command),
    Notify(Notice),
}

impl Effect {
    #[must_use]
    pub const fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Request(command) => Some(command),
            Self::Notify(_) => None,
        }
    }

    #[must_use]
    pub const fn as_notice(&self) -> Option<&Notice> {
        match self {
            Self::Notify(notice) => Some(notice),
            Self::Request(_) => None,
        }
    }
}
