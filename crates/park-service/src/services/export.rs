//! Payment CSV export
//!
//! A pure projection of payment rows into the fixed-format CSV the
//! facility's accounting side expects. Headers and status labels are the
//! operator-facing Japanese strings.

use chrono::Utc;
use park_core::entities::PaymentStatus;
use park_core::traits::PaymentWithResident;
use tracing::instrument;

use crate::dto::{CsvExport, PaymentListQuery};

use super::context::ServiceContext;
use super::error::ServiceResult;

const CSV_HEADER: &str = "部屋番号,氏名,年月,金額,状態,入金日";

/// Export service
pub struct ExportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExportService<'a> {
    /// Create a new ExportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Render the payment list as a CSV download
    #[instrument(skip(self, query))]
    pub async fn payments_csv(&self, query: PaymentListQuery) -> ServiceResult<CsvExport> {
        // Reuse the list filters so the export matches what the screen shows
        let month = query
            .month
            .as_deref()
            .map(|raw| {
                park_core::value_objects::YearMonth::parse(raw)
                    .map_err(|e| super::error::ServiceError::validation(e.to_string()))
            })
            .transpose()?;

        let rows = self
            .ctx
            .payment_repo()
            .list_with_residents(query.status, month.as_ref())
            .await?;

        let mut content = String::from(CSV_HEADER);
        content.push('\n');
        for row in &rows {
            content.push_str(&render_row(row));
            content.push('\n');
        }

        let filename = format!("駐輪場料金_{}.csv", Utc::now().format("%Y%m%d"));

        Ok(CsvExport { filename, content })
    }
}

fn render_row(row: &PaymentWithResident) -> String {
    let status_label = match row.payment.status {
        PaymentStatus::Paid => "支払済",
        PaymentStatus::Unpaid => "未払い",
    };
    let paid_date = row
        .payment
        .paid_at
        .map_or_else(|| "-".to_string(), |t| t.format("%Y/%m/%d").to_string());

    [
        escape_field(&row.resident.room_number),
        escape_field(&row.resident.name),
        row.payment.month.to_string(),
        format!("{}円", row.payment.amount),
        status_label.to_string(),
        paid_date,
    ]
    .join(",")
}

/// Quote a field when it contains a delimiter, quote, or newline
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use park_core::entities::{Payment, Resident, ResidentStatus};
    use park_core::value_objects::{RecordId, YearMonth};

    fn row(status: PaymentStatus, paid: bool) -> PaymentWithResident {
        let now = Utc::now();
        PaymentWithResident {
            payment: Payment {
                id: RecordId::new(1),
                resident_id: RecordId::new(2),
                month: YearMonth::parse("2026-04").unwrap(),
                amount: 2000,
                status,
                paid_at: paid.then(|| Utc.with_ymd_and_hms(2026, 4, 10, 9, 0, 0).unwrap()),
                created_at: now,
                updated_at: now,
            },
            resident: Resident {
                id: RecordId::new(2),
                name: "田中太郎".into(),
                room_number: "101".into(),
                contact_info: "090-0000-0000".into(),
                status: ResidentStatus::Active,
                created_at: now,
                updated_at: now,
            },
        }
    }

    #[test]
    fn test_render_paid_row() {
        let line = render_row(&row(PaymentStatus::Paid, true));
        assert_eq!(line, "101,田中太郎,2026-04,2000円,支払済,2026/04/10");
    }

    #[test]
    fn test_render_unpaid_row_has_dash_date() {
        let line = render_row(&row(PaymentStatus::Unpaid, false));
        assert_eq!(line, "101,田中太郎,2026-04,2000円,未払い,-");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
