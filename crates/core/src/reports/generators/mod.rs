//! Report generators - one strategy per report type.

mod active_users;
mod assets;
mod balances;
mod goals;
mod orders;
mod quarter_validation;
mod recurrent_orders;
mod risk_scores;

pub use active_users::{ActiveUserRow, ActiveUsersGenerator, ActiveUsersReportRow};
pub use assets::AssetsGenerator;
pub use balances::BalancesGenerator;
pub use goals::GoalsGenerator;
pub use orders::OrdersGenerator;
pub use quarter_validation::QuarterValidationGenerator;
pub use recurrent_orders::RecurrentOrdersGenerator;
pub use risk_scores::RiskScoresGenerator;

use std::sync::Arc;

use crate::assets::AssetStoreTrait;
use crate::balances::BalanceStoreTrait;
use crate::goals::GoalStoreTrait;
use crate::orders::{OrderStoreTrait, RecurrentOrderStoreTrait};
use crate::quarter::QuarterDataTrait;
use crate::reports::{ReportRegistry, ReportType};
use crate::risk::RiskProfileStoreTrait;
use crate::users::UserDirectoryTrait;
use crate::valuation::ValuationHistoryTrait;

/// Upstream collaborators the generators read from.
pub struct ReportProviders {
    pub users: Arc<dyn UserDirectoryTrait>,
    pub valuations: Arc<dyn ValuationHistoryTrait>,
    pub quarter_data: Arc<dyn QuarterDataTrait>,
    pub risk_profiles: Arc<dyn RiskProfileStoreTrait>,
    pub goals: Arc<dyn GoalStoreTrait>,
    pub orders: Arc<dyn OrderStoreTrait>,
    pub recurrent_orders: Arc<dyn RecurrentOrderStoreTrait>,
    pub balances: Arc<dyn BalanceStoreTrait>,
    pub assets: Arc<dyn AssetStoreTrait>,
}

/// Wires every report type to its generator.
pub fn build_registry(providers: ReportProviders) -> ReportRegistry {
    ReportRegistry::new()
        .register(
            ReportType::ActiveUsers,
            Arc::new(ActiveUsersGenerator::new(
                providers.users.clone(),
                providers.valuations,
            )),
        )
        .register(
            ReportType::RiskScores,
            Arc::new(RiskScoresGenerator::new(providers.risk_profiles)),
        )
        .register(
            ReportType::QuarterValidation,
            Arc::new(QuarterValidationGenerator::new(
                providers.users,
                providers.quarter_data,
            )),
        )
        .register(
            ReportType::Goals,
            Arc::new(GoalsGenerator::new(providers.goals)),
        )
        .register(
            ReportType::RecurrentOrders,
            Arc::new(RecurrentOrdersGenerator::new(providers.recurrent_orders)),
        )
        .register(
            ReportType::Orders,
            Arc::new(OrdersGenerator::new(providers.orders)),
        )
        .register(
            ReportType::Balances,
            Arc::new(BalancesGenerator::new(providers.balances)),
        )
        .register(
            ReportType::Assets,
            Arc::new(AssetsGenerator::new(providers.assets)),
        )
}
