//! Payment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use park_core::entities::{Payment, PaymentStatus, Resident, ResidentStatus};
use park_core::error::DomainError;
use park_core::traits::PaymentWithResident;
use park_core::value_objects::{RecordId, YearMonth};

/// Database model for payments table
#[derive(Debug, Clone, FromRow)]
pub struct PaymentModel {
    pub id: i64,
    pub resident_id: i64,
    pub month: String,
    pub amount: i64,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentModel> for Payment {
    type Error = DomainError;

    fn try_from(model: PaymentModel) -> Result<Self, Self::Error> {
        let status = PaymentStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown payment status: {}", model.status))
        })?;
        let month = model
            .month
            .parse::<YearMonth>()
            .map_err(|e| DomainError::InternalError(format!("bad payment month: {e}")))?;

        Ok(Payment {
            id: RecordId::new(model.id),
            resident_id: RecordId::new(model.resident_id),
            month,
            amount: model.amount,
            status,
            paid_at: model.paid_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Flat row for the payment INNER JOIN resident list query
#[derive(Debug, Clone, FromRow)]
pub struct PaymentWithResidentModel {
    pub id: i64,
    pub resident_id: i64,
    pub month: String,
    pub amount: i64,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub r_name: String,
    pub r_room_number: String,
    pub r_contact_info: String,
    pub r_status: String,
    pub r_created_at: DateTime<Utc>,
    pub r_updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentWithResidentModel> for PaymentWithResident {
    type Error = DomainError;

    fn try_from(model: PaymentWithResidentModel) -> Result<Self, Self::Error> {
        let r_status = ResidentStatus::parse(&model.r_status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown resident status: {}", model.r_status))
        })?;
        let resident = Resident {
            id: RecordId::new(model.resident_id),
            name: model.r_name,
            room_number: model.r_room_number,
            contact_info: model.r_contact_info,
            status: r_status,
            created_at: model.r_created_at,
            updated_at: model.r_updated_at,
        };

        let payment = Payment::try_from(PaymentModel {
            id: model.id,
            resident_id: model.resident_id,
            month: model.month,
            amount: model.amount,
            status: model.status,
            paid_at: model.paid_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })?;

        Ok(PaymentWithResident { payment, resident })
    }
}
