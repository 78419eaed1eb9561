use bitcoin::Amount;

/// A named fee-rate/ETA pairing offered to the user. Tiers are fetched once
/// per wallet selection and stay immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTier {
    pub id: String,
    pub display_name: String,
    pub rate_sat_per_vb: u64,
    pub eta: String,
}

/// Projected network fee for the current draft. Only meaningful while the
/// (recipient, amount, tier) inputs it was computed for are still on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimate {
    pub tier_id: String,
    pub fee: Amount,
}
