use crate::errors::Result;
use crate::risk::UserRiskProfile;

/// Trait for the risk-profile store.
pub trait RiskProfileStoreTrait: Send + Sync {
    /// Risk profiles of a tenant's users, optionally bounded to
    /// `lower < score < upper` (both bounds exclusive).
    fn risk_profiles(
        &self,
        tenant_id: &str,
        lower_risk_score: Option<i32>,
        upper_risk_score: Option<i32>,
    ) -> Result<Vec<UserRiskProfile>>;
}
