//! PostgreSQL implementation of PartnerDirectory.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, OrphanListId, ProvinceCode};
use crate::ports::PartnerDirectory;

use super::read_error;

pub struct PostgresPartnerDirectory {
    pool: PgPool,
}

impl PostgresPartnerDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerDirectory for PostgresPartnerDirectory {
    async fn province_code_for_list(
        &self,
        list_id: &OrphanListId,
    ) -> Result<Option<ProvinceCode>, DomainError> {
        let code: Option<String> = sqlx::query_scalar(
            r#"
            SELECT p.province_code
            FROM orphan_lists l
            JOIN partners p ON p.id = l.partner_id
            WHERE l.id = $1
            "#,
        )
        .bind(list_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "resolve partner province"))?;

        code.map(ProvinceCode::new).transpose().map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored province_code: {}", e),
            )
        })
    }
}
