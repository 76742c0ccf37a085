//! PostgreSQL implementation of OrphanRepository.
//!
//! Dates are stored as `DATE`; only validated records reach storage, so every
//! stored date loads back as a valid [`DateValue`]. Addresses are stored as
//! JSONB documents.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DateValue, DomainError, ErrorCode, OrphanId, OrphanListId, OsraNumber, ProvinceCode, Timestamp,
};
use crate::domain::orphan::{
    Orphan, OrphanIdentity, OrphanOrder, OrphanQuery, OrphanStatus, Priority, SponsorshipStatus,
};
use crate::domain::partner::Address;
use crate::ports::OrphanRepository;

use super::{map_write_error, read_error};

const COLUMNS: &str = "id, osra_number, sequential_id, orphan_list_id, province_code, name, \
    father_given_name, family_name, mother_name, mother_alive, date_of_birth, gender, \
    contact_number, father_deceased, father_is_martyr, father_date_of_death, \
    father_place_of_death, father_cause_of_death, minor_siblings_count, \
    sponsored_minor_siblings_count, sponsored_by_another_org, priority, status, \
    sponsorship_status, original_address, current_address, created_at, updated_at";

/// `CASE` expression ranking sponsorship statuses for the eligibility order.
static ELIGIBILITY_RANK_SQL: Lazy<String> = Lazy::new(|| {
    let arms: String = SponsorshipStatus::ALL
        .iter()
        .filter_map(|status| {
            status
                .eligibility_rank()
                .map(|rank| format!(" WHEN '{}' THEN {}", status.as_str(), rank))
        })
        .collect();
    format!("CASE sponsorship_status{} ELSE {} END", arms, u8::MAX)
});

pub(super) static CURRENTLY_UNSPONSORED_SQL: Lazy<String> = Lazy::new(|| {
    let statuses: Vec<String> = SponsorshipStatus::ALL
        .iter()
        .filter(|status| status.is_currently_unsponsored())
        .map(|status| format!("'{}'", status.as_str()))
        .collect();
    format!("sponsorship_status IN ({})", statuses.join(", "))
});

/// Builds the SELECT statement for `query`. Only fixed fragments are
/// interpolated; the query carries no user text.
pub(crate) fn search_sql(query: &OrphanQuery) -> String {
    let mut conditions: Vec<String> = Vec::new();
    if query.active {
        conditions.push(format!("status = '{}'", OrphanStatus::Active.as_str()));
    }
    if query.currently_unsponsored {
        conditions.push(CURRENTLY_UNSPONSORED_SQL.clone());
    }
    if query.high_priority {
        conditions.push(format!("priority = '{}'", Priority::High.as_str()));
    }

    let mut sql = format!("SELECT {} FROM orphans", COLUMNS);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    match query.order {
        OrphanOrder::Eligibility => sql.push_str(&format!(
            " ORDER BY {} ASC, priority ASC NULLS LAST, created_at ASC, id ASC",
            *ELIGIBILITY_RANK_SQL
        )),
        OrphanOrder::Unordered => sql.push_str(" ORDER BY created_at ASC, id ASC"),
    }
    sql
}

pub struct PostgresOrphanRepository {
    pool: PgPool,
}

impl PostgresOrphanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrphanRow {
    id: Uuid,
    osra_number: Option<String>,
    sequential_id: Option<i32>,
    orphan_list_id: Option<Uuid>,
    province_code: Option<String>,
    name: String,
    father_given_name: String,
    family_name: String,
    mother_name: String,
    mother_alive: Option<bool>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    contact_number: String,
    father_deceased: Option<bool>,
    father_is_martyr: Option<bool>,
    father_date_of_death: Option<NaiveDate>,
    father_place_of_death: Option<String>,
    father_cause_of_death: Option<String>,
    minor_siblings_count: Option<i32>,
    sponsored_minor_siblings_count: Option<i32>,
    sponsored_by_another_org: Option<bool>,
    priority: Option<String>,
    status: String,
    sponsorship_status: String,
    original_address: Option<Json<Address>>,
    current_address: Option<Json<Address>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn corrupt(field: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid stored {}: {}", field, detail),
    )
}

impl TryFrom<OrphanRow> for Orphan {
    type Error = DomainError;

    fn try_from(row: OrphanRow) -> Result<Self, Self::Error> {
        let province_code = row
            .province_code
            .map(ProvinceCode::new)
            .transpose()
            .map_err(|e| corrupt("province_code", e))?;
        let priority = row
            .priority
            .map(|p| p.parse::<Priority>())
            .transpose()
            .map_err(|e| corrupt("priority", e))?;
        let status: OrphanStatus = row.status.parse().map_err(|e| corrupt("status", e))?;
        let sponsorship_status: SponsorshipStatus = row
            .sponsorship_status
            .parse()
            .map_err(|e| corrupt("sponsorship_status", e))?;
        let sequential_id = row
            .sequential_id
            .map(u32::try_from)
            .transpose()
            .map_err(|e| corrupt("sequential_id", e))?;

        Ok(Orphan {
            id: OrphanId::from_uuid(row.id),
            osra_number: row.osra_number.map(OsraNumber::from_string),
            sequential_id,
            orphan_list_id: row.orphan_list_id.map(OrphanListId::from_uuid),
            province_code,
            name: row.name,
            father_given_name: row.father_given_name,
            family_name: row.family_name,
            mother_name: row.mother_name,
            mother_alive: row.mother_alive,
            date_of_birth: row.date_of_birth.map(DateValue::Valid),
            gender: row.gender,
            contact_number: row.contact_number,
            father_deceased: row.father_deceased,
            father_is_martyr: row.father_is_martyr,
            father_date_of_death: row.father_date_of_death.map(DateValue::Valid),
            father_place_of_death: row.father_place_of_death,
            father_cause_of_death: row.father_cause_of_death,
            minor_siblings_count: row.minor_siblings_count,
            sponsored_minor_siblings_count: row.sponsored_minor_siblings_count,
            sponsored_by_another_org: row.sponsored_by_another_org,
            priority,
            status,
            sponsorship_status,
            original_address: row.original_address.map(|a| a.0),
            current_address: row.current_address.map(|a| a.0),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn stored_date(value: &Option<DateValue>) -> Option<NaiveDate> {
    value.as_ref().and_then(DateValue::as_date)
}

fn stored_sequence(orphan: &Orphan) -> Result<Option<i32>, DomainError> {
    orphan
        .sequential_id
        .map(i32::try_from)
        .transpose()
        .map_err(|e| DomainError::database(format!("Sequential id out of range: {}", e)))
}

#[async_trait]
impl OrphanRepository for PostgresOrphanRepository {
    async fn save(&self, orphan: &Orphan) -> Result<(), DomainError> {
        let sql = format!(
            "INSERT INTO orphans ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
             $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28)",
            COLUMNS
        );

        sqlx::query(&sql)
            .bind(orphan.id.as_uuid())
            .bind(orphan.osra_number.as_ref().map(|n| n.as_str()))
            .bind(stored_sequence(orphan)?)
            .bind(orphan.orphan_list_id.map(|id| *id.as_uuid()))
            .bind(orphan.province_code.as_ref().map(|c| c.as_str()))
            .bind(&orphan.name)
            .bind(&orphan.father_given_name)
            .bind(&orphan.family_name)
            .bind(&orphan.mother_name)
            .bind(orphan.mother_alive)
            .bind(stored_date(&orphan.date_of_birth))
            .bind(&orphan.gender)
            .bind(&orphan.contact_number)
            .bind(orphan.father_deceased)
            .bind(orphan.father_is_martyr)
            .bind(stored_date(&orphan.father_date_of_death))
            .bind(&orphan.father_place_of_death)
            .bind(&orphan.father_cause_of_death)
            .bind(orphan.minor_siblings_count)
            .bind(orphan.sponsored_minor_siblings_count)
            .bind(orphan.sponsored_by_another_org)
            .bind(orphan.priority.map(|p| p.as_str()))
            .bind(orphan.status.as_str())
            .bind(orphan.sponsorship_status.as_str())
            .bind(orphan.original_address.as_ref().map(Json))
            .bind(orphan.current_address.as_ref().map(Json))
            .bind(orphan.created_at.as_datetime())
            .bind(orphan.updated_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "save orphan"))?;

        Ok(())
    }

    async fn update(&self, orphan: &Orphan) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE orphans SET
                orphan_list_id = $2,
                province_code = $3,
                name = $4,
                father_given_name = $5,
                family_name = $6,
                mother_name = $7,
                mother_alive = $8,
                date_of_birth = $9,
                gender = $10,
                contact_number = $11,
                father_deceased = $12,
                father_is_martyr = $13,
                father_date_of_death = $14,
                father_place_of_death = $15,
                father_cause_of_death = $16,
                minor_siblings_count = $17,
                sponsored_minor_siblings_count = $18,
                sponsored_by_another_org = $19,
                priority = $20,
                status = $21,
                sponsorship_status = $22,
                original_address = $23,
                current_address = $24,
                updated_at = $25
            WHERE id = $1
            "#,
        )
        .bind(orphan.id.as_uuid())
        .bind(orphan.orphan_list_id.map(|id| *id.as_uuid()))
        .bind(orphan.province_code.as_ref().map(|c| c.as_str()))
        .bind(&orphan.name)
        .bind(&orphan.father_given_name)
        .bind(&orphan.family_name)
        .bind(&orphan.mother_name)
        .bind(orphan.mother_alive)
        .bind(stored_date(&orphan.date_of_birth))
        .bind(&orphan.gender)
        .bind(&orphan.contact_number)
        .bind(orphan.father_deceased)
        .bind(orphan.father_is_martyr)
        .bind(stored_date(&orphan.father_date_of_death))
        .bind(&orphan.father_place_of_death)
        .bind(&orphan.father_cause_of_death)
        .bind(orphan.minor_siblings_count)
        .bind(orphan.sponsored_minor_siblings_count)
        .bind(orphan.sponsored_by_another_org)
        .bind(orphan.priority.map(|p| p.as_str()))
        .bind(orphan.status.as_str())
        .bind(orphan.sponsorship_status.as_str())
        .bind(orphan.original_address.as_ref().map(Json))
        .bind(orphan.current_address.as_ref().map(Json))
        .bind(orphan.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update orphan"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::OrphanNotFound, "Orphan not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &OrphanId) -> Result<Option<Orphan>, DomainError> {
        let sql = format!("SELECT {} FROM orphans WHERE id = $1", COLUMNS);
        let row: Option<OrphanRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| read_error(e, "find orphan"))?;

        row.map(Orphan::try_from).transpose()
    }

    async fn identity_taken(
        &self,
        identity: &OrphanIdentity,
        excluding: Option<&OrphanId>,
    ) -> Result<bool, DomainError> {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM orphans
                WHERE name = $1
                  AND family_name = $2
                  AND mother_name = $3
                  AND father_given_name = $4
                  AND ($5::uuid IS NULL OR id <> $5)
            )
            "#,
        )
        .bind(&identity.name)
        .bind(&identity.family_name)
        .bind(&identity.mother_name)
        .bind(&identity.father_given_name)
        .bind(excluding.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| read_error(e, "check orphan identity"))?;

        Ok(taken)
    }

    async fn search(&self, query: &OrphanQuery) -> Result<Vec<Orphan>, DomainError> {
        let rows: Vec<OrphanRow> = sqlx::query_as(&search_sql(query))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| read_error(e, "search orphans"))?;

        rows.into_iter().map(Orphan::try_from).collect()
    }
}
