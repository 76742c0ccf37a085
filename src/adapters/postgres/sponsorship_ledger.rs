//! PostgreSQL implementation of SponsorshipLedger.
//!
//! Each operation runs in one transaction. Returning early drops the
//! transaction, which rolls it back.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::orphan::{OrphanStatus, SponsorshipStatus};
use crate::domain::sponsorship::Sponsorship;
use crate::ports::SponsorshipLedger;

use super::orphan_repository::CURRENTLY_UNSPONSORED_SQL;
use super::{map_write_error, read_error};

/// Marks an orphan sponsored only while it is still eligible.
static CLAIM_ORPHAN_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "UPDATE orphans SET sponsorship_status = $2, updated_at = $3 \
         WHERE id = $1 AND status = '{}' AND {}",
        OrphanStatus::Active.as_str(),
        *CURRENTLY_UNSPONSORED_SQL
    )
});

static RELEASE_ORPHAN_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "UPDATE orphans SET sponsorship_status = $2, updated_at = $3 \
         WHERE id = $1 AND status = '{}'",
        OrphanStatus::Active.as_str()
    )
});

pub struct PostgresSponsorshipLedger {
    pool: PgPool,
}

impl PostgresSponsorshipLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SponsorshipLedger for PostgresSponsorshipLedger {
    async fn record_start(
        &self,
        sponsorship: &Sponsorship,
        updated_at: Timestamp,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| read_error(e, "begin sponsorship start"))?;

        let claimed = sqlx::query(&CLAIM_ORPHAN_SQL)
            .bind(sponsorship.orphan_id.as_uuid())
            .bind(SponsorshipStatus::Sponsored.as_str())
            .bind(updated_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, "claim orphan"))?;
        if claimed.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Orphan {} is no longer eligible for sponsorship",
                    sponsorship.orphan_id
                ),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO sponsorships (id, sponsor_id, orphan_id, start_date, end_date, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(sponsorship.id.as_uuid())
        .bind(sponsorship.sponsor_id.as_uuid())
        .bind(sponsorship.orphan_id.as_uuid())
        .bind(sponsorship.start_date)
        .bind(sponsorship.end_date)
        .bind(sponsorship.active)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "save sponsorship"))?;

        tx.commit()
            .await
            .map_err(|e| map_write_error(e, "commit sponsorship start"))
    }

    async fn record_end(
        &self,
        sponsorship: &Sponsorship,
        orphan_status: SponsorshipStatus,
        updated_at: Timestamp,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| read_error(e, "begin sponsorship end"))?;

        let ended = sqlx::query(
            "UPDATE sponsorships SET end_date = $2, active = $3 WHERE id = $1 AND active",
        )
        .bind(sponsorship.id.as_uuid())
        .bind(sponsorship.end_date)
        .bind(sponsorship.active)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "end sponsorship"))?;
        if ended.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Sponsorship {} has already ended", sponsorship.id),
            ));
        }

        sqlx::query(&RELEASE_ORPHAN_SQL)
            .bind(sponsorship.orphan_id.as_uuid())
            .bind(orphan_status.as_str())
            .bind(updated_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, "update orphan sponsorship status"))?;

        tx.commit()
            .await
            .map_err(|e| map_write_error(e, "commit sponsorship end"))
    }
}
