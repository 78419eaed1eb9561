use bitcoin::Amount;

use crate::amount::parse_btc;

/// The in-progress transaction intent. Raw user text, no derived state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub recipient: String,
    pub amount_text: String,
    pub selected_tier: Option<String>,
}

impl Draft {
    /// The amount as entered, if it parses. Positivity is checked by the
    /// callers that care.
    #[must_use]
    pub fn amount(&self) -> Option<Amount> {
        parse_btc(&self.amount_text)
    }

    pub fn clear(&mut self) {
        self.recipient.clear();
        self.amount_text.clear();
        self.selected_tier = None;
    }
}

/// Result of the last completed address check. Reset to `Unknown` the
/// instant the recipient text changes so a stale result is never attributed
/// to new input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddressValidity {
    #[default]
    Unknown,
    Valid {
        warning: Option<String>,
    },
    Invalid,
}

impl AddressValidity {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Confirmed spendable funds, as reported by the wallet service in satoshis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletBalance {
    pub confirmed: Amount,
}

/// Record of a broadcast transaction. Terminal; only cleared when the user
/// starts another send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub txid: String,
    pub amount: Amount,
    pub to_address: String,
    pub fee: Amount,
}
