use crate::balances::AccountBalance;
use crate::errors::Result;

/// Trait for the asset container balance store.
pub trait BalanceStoreTrait: Send + Sync {
    fn balances(&self, tenant_id: &str) -> Result<Vec<AccountBalance>>;
}
