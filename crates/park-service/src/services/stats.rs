//! Dashboard statistics service
//!
//! All figures are counted at query time; maintenance and inactive are
//! residuals so the buckets always sum to the total.

use chrono::{Duration, Utc};
use park_core::value_objects::YearMonth;
use tracing::instrument;

use crate::dto::{DashboardResponse, PaymentStats, ResidentStats, SlotStats, ViolationStats};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Collect the dashboard figures
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> ServiceResult<DashboardResponse> {
        let slot_total = self.ctx.slot_repo().count().await?;
        let slot_available = self.ctx.slot_repo().count_available().await?;
        let slot_occupied = self.ctx.slot_repo().count_occupied().await?;

        let resident_total = self.ctx.resident_repo().count().await?;
        let resident_active = self.ctx.resident_repo().count_by_status("active").await?;

        let violation_total = self.ctx.violation_repo().count().await?;
        let violation_recent = self
            .ctx
            .violation_repo()
            .count_reported_since(Utc::now() - Duration::days(30))
            .await?;

        let payment_total = self.ctx.payment_repo().count().await?;
        let payment_unpaid = self.ctx.payment_repo().count_unpaid().await?;
        let payment_current = self
            .ctx
            .payment_repo()
            .count_by_month(&YearMonth::current())
            .await?;

        Ok(DashboardResponse {
            slots: SlotStats {
                total: slot_total,
                available: slot_available,
                occupied: slot_occupied,
                maintenance: slot_total - slot_available - slot_occupied,
            },
            residents: ResidentStats {
                total: resident_total,
                active: resident_active,
                inactive: resident_total - resident_active,
            },
            violations: ViolationStats {
                total: violation_total,
                last_30_days: violation_recent,
            },
            payments: PaymentStats {
                total: payment_total,
                unpaid: payment_unpaid,
                current_month: payment_current,
            },
        })
    }
}
