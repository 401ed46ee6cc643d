//! Payment service
//!
//! Monthly fee tracking: listing with filters, manual creation, batch
//! generation, and the paid/unpaid toggle.

use chrono::Utc;
use park_core::entities::{NewPayment, PaymentStatus};
use park_core::value_objects::{RecordId, YearMonth};
use tracing::{info, instrument};

use crate::dto::{
    CreatePaymentRequest, GeneratePaymentsRequest, GeneratePaymentsResponse, PaymentListQuery,
    PaymentResponse, PaymentWithResidentResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Payment service
pub struct PaymentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PaymentService<'a> {
    /// Create a new PaymentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn parse_month(raw: &str) -> ServiceResult<YearMonth> {
        YearMonth::parse(raw).map_err(|e| ServiceError::validation(e.to_string()))
    }

    /// List payments with residents, optionally filtered
    #[instrument(skip(self, query))]
    pub async fn list(
        &self,
        query: PaymentListQuery,
    ) -> ServiceResult<Vec<PaymentWithResidentResponse>> {
        let month = query.month.as_deref().map(Self::parse_month).transpose()?;

        let rows = self
            .ctx
            .payment_repo()
            .list_with_residents(query.status, month.as_ref())
            .await?;

        Ok(rows.iter().map(PaymentWithResidentResponse::from).collect())
    }

    /// Create a single payment manually
    #[instrument(skip(self, request), fields(resident_id = request.resident_id))]
    pub async fn create(&self, request: CreatePaymentRequest) -> ServiceResult<PaymentResponse> {
        let month = Self::parse_month(&request.month)?;
        let resident_id = RecordId::new(request.resident_id);

        // Surface a clean 404 instead of an FK violation
        let _resident = self
            .ctx
            .resident_repo()
            .find_by_id(resident_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resident", resident_id.to_string()))?;

        let new = NewPayment {
            resident_id,
            month,
            amount: request.amount,
            status: PaymentStatus::Unpaid,
        };
        let payment = self.ctx.payment_repo().create(&new).await?;

        info!(payment_id = %payment.id, "Payment created");
        Ok(PaymentResponse::from(&payment))
    }

    /// Batch-generate unpaid payments for a month
    ///
    /// Zero eligible residents is a successful no-op with
    /// `created_count: 0`.
    #[instrument(skip(self, request), fields(month = %request.month))]
    pub async fn generate(
        &self,
        request: GeneratePaymentsRequest,
    ) -> ServiceResult<GeneratePaymentsResponse> {
        let month = Self::parse_month(&request.month)?;

        let created_count = self
            .ctx
            .payment_repo()
            .generate_monthly(&month, request.amount)
            .await?;

        info!(month = %month, created_count, "Monthly payments generated");

        Ok(GeneratePaymentsResponse {
            month,
            amount: request.amount,
            created_count,
        })
    }

    /// Mark a payment as paid; repeating keeps the first collection time
    #[instrument(skip(self))]
    pub async fn mark_paid(&self, id: RecordId) -> ServiceResult<PaymentResponse> {
        let payment = self.ctx.payment_repo().mark_paid(id, Utc::now()).await?;

        info!(payment_id = %id, "Payment marked paid");
        Ok(PaymentResponse::from(&payment))
    }

    /// Revert a payment to unpaid, clearing the collection time
    #[instrument(skip(self))]
    pub async fn mark_unpaid(&self, id: RecordId) -> ServiceResult<PaymentResponse> {
        let payment = self.ctx.payment_repo().mark_unpaid(id).await?;

        info!(payment_id = %id, "Payment reverted to unpaid");
        Ok(PaymentResponse::from(&payment))
    }
}
