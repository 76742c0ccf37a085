//! PostgreSQL implementation of SponsorRepository.
//!
//! Branch and organization affiliations are stored as JSONB snapshots.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DateValue, DomainError, ErrorCode, OsraNumber, SponsorId, Timestamp};
use crate::domain::sponsor::{Branch, Organization, Sponsor, SponsorStatus, SponsorType};
use crate::ports::SponsorRepository;

use super::{map_write_error, read_error};

pub struct PostgresSponsorRepository {
    pool: PgPool,
}

impl PostgresSponsorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SponsorRow {
    id: Uuid,
    osra_number: Option<String>,
    sequential_id: Option<i32>,
    name: String,
    country: String,
    gender: Option<String>,
    requested_orphan_count: Option<i32>,
    sponsor_type: Option<String>,
    status: String,
    start_date: Option<NaiveDate>,
    branch: Option<Json<Branch>>,
    organization: Option<Json<Organization>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn corrupt(field: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid stored {}: {}", field, detail),
    )
}

impl TryFrom<SponsorRow> for Sponsor {
    type Error = DomainError;

    fn try_from(row: SponsorRow) -> Result<Self, Self::Error> {
        Ok(Sponsor {
            id: SponsorId::from_uuid(row.id),
            osra_number: row.osra_number.map(OsraNumber::from_string),
            sequential_id: row
                .sequential_id
                .map(u32::try_from)
                .transpose()
                .map_err(|e| corrupt("sequential_id", e))?,
            name: row.name,
            country: row.country,
            gender: row.gender,
            requested_orphan_count: row.requested_orphan_count,
            sponsor_type: row
                .sponsor_type
                .map(|t| t.parse::<SponsorType>())
                .transpose()
                .map_err(|e| corrupt("sponsor_type", e))?,
            status: row
                .status
                .parse::<SponsorStatus>()
                .map_err(|e| corrupt("status", e))?,
            start_date: row.start_date.map(DateValue::Valid),
            branch: row.branch.map(|b| b.0),
            organization: row.organization.map(|o| o.0),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn stored_sequence(sponsor: &Sponsor) -> Result<Option<i32>, DomainError> {
    sponsor
        .sequential_id
        .map(i32::try_from)
        .transpose()
        .map_err(|e| DomainError::database(format!("Sequential id out of range: {}", e)))
}

#[async_trait]
impl SponsorRepository for PostgresSponsorRepository {
    async fn save(&self, sponsor: &Sponsor) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sponsors (
                id, osra_number, sequential_id, name, country, gender, requested_orphan_count,
                sponsor_type, status, start_date, branch, organization, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(sponsor.id.as_uuid())
        .bind(sponsor.osra_number.as_ref().map(|n| n.as_str()))
        .bind(stored_sequence(sponsor)?)
        .bind(&sponsor.name)
        .bind(&sponsor.country)
        .bind(&sponsor.gender)
        .bind(sponsor.requested_orphan_count)
        .bind(sponsor.sponsor_type.map(|t| t.as_str()))
        .bind(sponsor.status.as_str())
        .bind(sponsor.start_date.as_ref().and_then(DateValue::as_date))
        .bind(sponsor.branch.as_ref().map(Json))
        .bind(sponsor.organization.as_ref().map(Json))
        .bind(sponsor.created_at.as_datetime())
        .bind(sponsor.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "save sponsor"))?;

        Ok(())
    }

    async fn update(&self, sponsor: &Sponsor) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sponsors SET
                name = $2,
                country = $3,
                gender = $4,
                requested_orphan_count = $5,
                sponsor_type = $6,
                status = $7,
                start_date = $8,
                branch = $9,
                organization = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(sponsor.id.as_uuid())
        .bind(&sponsor.name)
        .bind(&sponsor.country)
        .bind(&sponsor.gender)
        .bind(sponsor.requested_orphan_count)
        .bind(sponsor.sponsor_type.map(|t| t.as_str()))
        .bind(sponsor.status.as_str())
        .bind(sponsor.start_date.as_ref().and_then(DateValue::as_date))
        .bind(sponsor.branch.as_ref().map(Json))
        .bind(sponsor.organization.as_ref().map(Json))
        .bind(sponsor.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update sponsor"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::SponsorNotFound, "Sponsor not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SponsorId) -> Result<Option<Sponsor>, DomainError> {
        let row: Option<SponsorRow> = sqlx::query_as(
            r#"
            SELECT id, osra_number, sequential_id, name, country, gender, requested_orphan_count,
                   sponsor_type, status, start_date, branch, organization, created_at, updated_at
            FROM sponsors
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "find sponsor"))?;

        row.map(Sponsor::try_from).transpose()
    }
}
