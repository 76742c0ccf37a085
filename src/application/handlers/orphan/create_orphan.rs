//! CreateOrphanHandler - Command handler for registering orphans.

use std::sync::Arc;

use crate::application::{OsraNumberGenerator, RuleSettings};
use crate::domain::foundation::{
    DomainError, OrphanListId, ProvinceCode, ProvinceNumbering, ValidationErrors,
};
use crate::domain::orphan::validation::messages;
use crate::domain::orphan::{validate, Orphan, OrphanDraft, OrphanError, ValidationContext};
use crate::ports::{Clock, OrphanRepository, PartnerDirectory};

/// Command to register a new orphan.
#[derive(Debug, Clone)]
pub struct CreateOrphanCommand {
    pub draft: OrphanDraft,
}

/// Handler for registering orphans.
///
/// Applies construction defaults, inherits the province code of the list's
/// partner, validates, then numbers and inserts the record.
pub struct CreateOrphanHandler {
    orphans: Arc<dyn OrphanRepository>,
    partners: Arc<dyn PartnerDirectory>,
    numbers: OsraNumberGenerator,
    clock: Arc<dyn Clock>,
    settings: RuleSettings,
}

impl CreateOrphanHandler {
    pub fn new(
        orphans: Arc<dyn OrphanRepository>,
        partners: Arc<dyn PartnerDirectory>,
        numbers: OsraNumberGenerator,
        clock: Arc<dyn Clock>,
        settings: RuleSettings,
    ) -> Self {
        Self {
            orphans,
            partners,
            numbers,
            clock,
            settings,
        }
    }

    pub async fn handle(&self, cmd: CreateOrphanCommand) -> Result<Orphan, OrphanError> {
        let now = self.clock.now();
        let mut orphan = Orphan::new(cmd.draft, now);

        // 1. Resolve the partner's province and the uniqueness fact together
        let identity = orphan.identity();
        let list_id = orphan.orphan_list_id;
        let (province, identity_taken) = futures::try_join!(
            self.province_for(list_id),
            self.orphans.identity_taken(&identity, None),
        )?;
        orphan.inherit_province_code(province);

        // 2. Validate the defaulted record
        let ctx = ValidationContext::for_create(
            self.clock.today(),
            self.settings.genders.clone(),
            self.settings.policy,
        )
        .with_identity_taken(identity_taken);
        let errors = validate(&orphan, &ctx);
        if !errors.is_empty() {
            tracing::warn!(
                orphan_id = %orphan.id,
                error_count = errors.len(),
                fields = ?errors.fields(),
                "orphan rejected by validation"
            );
            return Err(OrphanError::Invalid(errors));
        }

        // 3. Number it once, in the province scope
        let province = orphan.province_code.clone().ok_or_else(unresolved_province)?;
        let (sequence, number) = self
            .numbers
            .generate(&ProvinceNumbering::new(province))
            .await?;
        orphan.assign_osra_number(sequence, number)?;

        // 4. Insert
        self.orphans.save(&orphan).await?;

        tracing::info!(
            orphan_id = %orphan.id,
            osra_number = ?orphan.osra_number,
            "orphan created"
        );

        Ok(orphan)
    }

    async fn province_for(
        &self,
        list_id: Option<OrphanListId>,
    ) -> Result<Option<ProvinceCode>, DomainError> {
        match list_id {
            Some(id) => self.partners.province_code_for_list(&id).await,
            None => Ok(None),
        }
    }
}

fn unresolved_province() -> OrphanError {
    let mut errors = ValidationErrors::new();
    errors.add("province_code", messages::BLANK);
    OrphanError::Invalid(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::{DateValue, ErrorCode, OrphanId, OsraNumber};
    use crate::domain::orphan::{
        OrphanIdentity, OrphanQuery, OrphanStatus, Priority, SponsorshipStatus,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn handler(stores: &Stores) -> CreateOrphanHandler {
        CreateOrphanHandler::new(
            stores.orphans.clone(),
            stores.partners.clone(),
            OsraNumberGenerator::new(stores.sequences.clone()),
            clock(),
            RuleSettings::default(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mock implementations
    // ─────────────────────────────────────────────────────────────────────

    /// Orphan store that reports no duplicates but loses the insert race.
    struct RacingOrphanRepository {
        saves: Mutex<usize>,
    }

    #[async_trait]
    impl OrphanRepository for RacingOrphanRepository {
        async fn save(&self, _orphan: &Orphan) -> Result<(), DomainError> {
            *self.saves.lock().unwrap() += 1;
            Err(DomainError::new(ErrorCode::DuplicateOrphan, "orphans_identity_key"))
        }

        async fn update(&self, _orphan: &Orphan) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &OrphanId) -> Result<Option<Orphan>, DomainError> {
            Ok(None)
        }

        async fn identity_taken(
            &self,
            _identity: &OrphanIdentity,
            _excluding: Option<&OrphanId>,
        ) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn search(&self, _query: &OrphanQuery) -> Result<Vec<Orphan>, DomainError> {
            Ok(vec![])
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn applies_defaults_and_numbers_in_province_scope() {
        let stores = Stores::new();
        let list = stores.list_in_ab().await;

        let orphan = handler(&stores)
            .handle(CreateOrphanCommand { draft: valid_draft(list) })
            .await
            .unwrap();

        assert_eq!(orphan.status, OrphanStatus::Active);
        assert_eq!(orphan.sponsorship_status, SponsorshipStatus::Unsponsored);
        assert_eq!(orphan.priority, Some(Priority::Normal));
        assert_eq!(orphan.province_code, Some(province()));
        assert_eq!(orphan.osra_number, Some(OsraNumber::from_string("AB00001")));
        assert_eq!(orphan.sequential_id, Some(1));
        assert_eq!(stores.orphans.len().await, 1);
    }

    #[tokio::test]
    async fn consecutive_orphans_get_consecutive_numbers() {
        let stores = Stores::new();
        let list = stores.list_in_ab().await;
        let handler = handler(&stores);

        let first = handler
            .handle(CreateOrphanCommand { draft: named_draft(list, "Omar") })
            .await
            .unwrap();
        let second = handler
            .handle(CreateOrphanCommand { draft: named_draft(list, "Sami") })
            .await
            .unwrap();

        assert_eq!(first.osra_number.unwrap().as_str(), "AB00001");
        assert_eq!(second.osra_number.unwrap().as_str(), "AB00002");
    }

    #[tokio::test]
    async fn own_province_code_wins_over_partner() {
        let stores = Stores::new();
        let list = stores.list_in_ab().await;
        let mut draft = valid_draft(list);
        draft.province_code = Some(ProvinceCode::new("XY").unwrap());

        let orphan = handler(&stores).handle(CreateOrphanCommand { draft }).await.unwrap();

        assert_eq!(orphan.osra_number.unwrap().as_str(), "XY00001");
    }

    #[tokio::test]
    async fn invalid_orphan_is_not_numbered_or_saved() {
        let stores = Stores::new();
        let list = stores.list_in_ab().await;
        let mut draft = valid_draft(list);
        draft.date_of_birth = Some(DateValue::from(date(1990, 1, 1)));
        draft.father_date_of_death = Some(DateValue::from(date(1989, 6, 1)));

        let err = handler(&stores).handle(CreateOrphanCommand { draft }).await.unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(
            errors.on("date_of_birth"),
            vec!["Orphan must be younger than 22 years old to join OSRA."]
        );
        assert!(stores.orphans.is_empty().await);

        // The sequence was never drawn
        let next = handler(&stores)
            .handle(CreateOrphanCommand { draft: valid_draft(list) })
            .await
            .unwrap();
        assert_eq!(next.osra_number.unwrap().as_str(), "AB00001");
    }

    #[tokio::test]
    async fn duplicate_identity_is_reported_on_name() {
        let stores = Stores::new();
        let list = stores.list_in_ab().await;
        let handler = handler(&stores);
        handler
            .handle(CreateOrphanCommand { draft: valid_draft(list) })
            .await
            .unwrap();

        let err = handler
            .handle(CreateOrphanCommand { draft: valid_draft(list) })
            .await
            .unwrap_err();

        assert!(err
            .validation_errors()
            .unwrap()
            .contains("name", messages::IDENTITY_TAKEN));
    }

    #[tokio::test]
    async fn unknown_list_leaves_province_blank() {
        let stores = Stores::new();
        let draft = valid_draft(OrphanListId::new());

        let err = handler(&stores).handle(CreateOrphanCommand { draft }).await.unwrap_err();

        assert_eq!(
            err.validation_errors().unwrap().on("province_code"),
            vec![messages::BLANK]
        );
    }

    #[tokio::test]
    async fn lost_insert_race_surfaces_as_identity_error() {
        let stores = Stores::new();
        let list = stores.list_in_ab().await;
        let racing = Arc::new(RacingOrphanRepository { saves: Mutex::new(0) });
        let handler = CreateOrphanHandler::new(
            racing.clone(),
            stores.partners.clone(),
            OsraNumberGenerator::new(stores.sequences.clone()),
            clock(),
            RuleSettings::default(),
        );

        let err = handler
            .handle(CreateOrphanCommand { draft: valid_draft(list) })
            .await
            .unwrap_err();

        assert_eq!(*racing.saves.lock().unwrap(), 1);
        assert!(err
            .validation_errors()
            .unwrap()
            .contains("name", messages::IDENTITY_TAKEN));
    }
}
