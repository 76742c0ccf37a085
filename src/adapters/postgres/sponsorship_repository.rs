//! PostgreSQL implementation of SponsorshipRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OrphanId, SponsorId, SponsorshipId};
use crate::domain::sponsorship::Sponsorship;
use crate::ports::SponsorshipRepository;

use super::{map_write_error, read_error};

pub struct PostgresSponsorshipRepository {
    pool: PgPool,
}

impl PostgresSponsorshipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SponsorshipRow {
    id: Uuid,
    sponsor_id: Uuid,
    orphan_id: Uuid,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    active: bool,
}

impl From<SponsorshipRow> for Sponsorship {
    fn from(row: SponsorshipRow) -> Self {
        Sponsorship {
            id: SponsorshipId::from_uuid(row.id),
            sponsor_id: SponsorId::from_uuid(row.sponsor_id),
            orphan_id: OrphanId::from_uuid(row.orphan_id),
            start_date: row.start_date,
            end_date: row.end_date,
            active: row.active,
        }
    }
}

#[async_trait]
impl SponsorshipRepository for PostgresSponsorshipRepository {
    async fn save(&self, sponsorship: &Sponsorship) -> Result<(), DomainError> {
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
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "save sponsorship"))?;

        Ok(())
    }

    async fn update(&self, sponsorship: &Sponsorship) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE sponsorships SET end_date = $2, active = $3 WHERE id = $1",
        )
        .bind(sponsorship.id.as_uuid())
        .bind(sponsorship.end_date)
        .bind(sponsorship.active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update sponsorship"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SponsorshipNotFound,
                "Sponsorship not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SponsorshipId) -> Result<Option<Sponsorship>, DomainError> {
        let row: Option<SponsorshipRow> = sqlx::query_as(
            r#"
            SELECT id, sponsor_id, orphan_id, start_date, end_date, active
            FROM sponsorships
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "find sponsorship"))?;

        Ok(row.map(Sponsorship::from))
    }

    async fn find_by_orphan(&self, orphan_id: &OrphanId) -> Result<Vec<Sponsorship>, DomainError> {
        let rows: Vec<SponsorshipRow> = sqlx::query_as(
            r#"
            SELECT id, sponsor_id, orphan_id, start_date, end_date, active
            FROM sponsorships
            WHERE orphan_id = $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(orphan_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "find orphan sponsorships"))?;

        Ok(rows.into_iter().map(Sponsorship::from).collect())
    }
}
