//! Value objects shared across entities

mod record_id;
mod year_month;

pub use record_id::{RecordId, RecordIdParseError};
pub use year_month::{YearMonth, YearMonthParseError};
