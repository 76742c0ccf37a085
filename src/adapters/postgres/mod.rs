//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOrphanRepository` - Orphan persistence and eligibility search
//! - `PostgresSponsorRepository` - Sponsor persistence
//! - `PostgresSponsorshipRepository` - Sponsorship history
//! - `PostgresSponsorshipLedger` - Transactional sponsorship start and end
//! - `PostgresPartnerDirectory` - Province lookup through orphan lists
//! - `PostgresSequenceAllocator` - Upsert-based OSRA sequence counters

mod orphan_repository;
mod partner_directory;
mod sequence_allocator;
mod sponsor_repository;
mod sponsorship_ledger;
mod sponsorship_repository;

pub use orphan_repository::PostgresOrphanRepository;
pub use partner_directory::PostgresPartnerDirectory;
pub use sequence_allocator::PostgresSequenceAllocator;
pub use sponsor_repository::PostgresSponsorRepository;
pub use sponsorship_ledger::PostgresSponsorshipLedger;
pub use sponsorship_repository::PostgresSponsorshipRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a connection pool from `config`, applying migrations first when
/// `run_migrations` is set.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let url = config.url().ok_or_else(|| {
        DomainError::new(ErrorCode::InternalError, "Database URL is not configured")
    })?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(url)
        .await
        .map_err(|e| read_error(e, "connect to database"))?;

    if config.run_migrations {
        migrate(&pool).await?;
        tracing::info!("database migrations applied");
    }
    Ok(pool)
}

/// Applies the bundled schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
}

/// Maps write failures, turning unique-index violations into domain codes.
pub(crate) fn map_write_error(e: sqlx::Error, action: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.constraint() {
            Some("orphans_identity_key") => {
                return DomainError::new(
                    ErrorCode::DuplicateOrphan,
                    "An orphan with this identity is already stored",
                );
            }
            Some("orphans_osra_number_key") | Some("sponsors_osra_number_key") => {
                return DomainError::new(
                    ErrorCode::OsraNumberConflict,
                    "OSRA number is already assigned",
                );
            }
            Some("sponsorships_one_active_key") => {
                return DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    "Orphan already has an active sponsorship",
                );
            }
            _ => {}
        }
    }
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

pub(crate) fn read_error(e: sqlx::Error, action: &str) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}
