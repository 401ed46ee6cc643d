//! PostgreSQL implementation of StickerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::Sticker;
use park_core::traits::{RepoResult, StickerRepository};
use park_core::value_objects::RecordId;

use crate::models::StickerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StickerRepository
#[derive(Clone)]
pub struct PgStickerRepository {
    pool: PgPool,
}

impl PgStickerRepository {
    /// Create a new PgStickerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StickerRepository for PgStickerRepository {
    #[instrument(skip(self))]
    async fn list_by_slot(&self, slot_id: RecordId) -> RepoResult<Vec<Sticker>> {
        let rows = sqlx::query_as::<_, StickerModel>(
            r"
            SELECT id, slot_id, sticker_number, issued_date, created_at, updated_at
            FROM stickers
            WHERE slot_id = $1
            ORDER BY issued_date DESC, id DESC
            ",
        )
        .bind(slot_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Sticker::try_from).collect()
    }
}
