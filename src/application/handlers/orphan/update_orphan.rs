//! UpdateOrphanHandler - Command handler for editing orphans.

use std::sync::Arc;

use crate::application::RuleSettings;
use crate::domain::foundation::OrphanId;
use crate::domain::orphan::{
    validate, Orphan, OrphanChanges, OrphanError, SponsorshipTransition, ValidationContext,
};
use crate::ports::{Clock, OrphanRepository, SponsorshipStatusResolver};

/// Command to change attributes of an existing orphan.
#[derive(Debug, Clone)]
pub struct UpdateOrphanCommand {
    pub orphan_id: OrphanId,
    pub changes: OrphanChanges,
}

/// Handler for orphan updates.
///
/// Validation sees the record before any sponsorship side effect of a
/// status change is applied. The OSRA number is never touched.
pub struct UpdateOrphanHandler {
    orphans: Arc<dyn OrphanRepository>,
    resolver: Arc<dyn SponsorshipStatusResolver>,
    clock: Arc<dyn Clock>,
    settings: RuleSettings,
}

impl UpdateOrphanHandler {
    pub fn new(
        orphans: Arc<dyn OrphanRepository>,
        resolver: Arc<dyn SponsorshipStatusResolver>,
        clock: Arc<dyn Clock>,
        settings: RuleSettings,
    ) -> Self {
        Self {
            orphans,
            resolver,
            clock,
            settings,
        }
    }

    pub async fn handle(&self, cmd: UpdateOrphanCommand) -> Result<Orphan, OrphanError> {
        // 1. Load the persisted record
        let mut orphan = self
            .orphans
            .find_by_id(&cmd.orphan_id)
            .await?
            .ok_or(OrphanError::NotFound(cmd.orphan_id))?;
        let previous_status = orphan.status;

        // 2. Apply the changes to the candidate
        orphan.apply_changes(cmd.changes);

        // 3. Validate the pre-transition snapshot
        let identity_taken = self
            .orphans
            .identity_taken(&orphan.identity(), Some(&orphan.id))
            .await?;
        let ctx = ValidationContext::for_update(
            self.clock.today(),
            previous_status,
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
                "orphan update rejected by validation"
            );
            return Err(OrphanError::Invalid(errors));
        }

        // 4. Sponsorship side effect of a status change
        let transition = SponsorshipTransition::plan(previous_status, orphan.status);
        if let Some(status) = transition.fixed_status() {
            orphan.sponsorship_status = status;
        } else if transition.needs_history() {
            orphan.sponsorship_status = self.resolver.resolve(&orphan).await?;
        }

        // 5. Persist
        orphan.touch(self.clock.now());
        self.orphans.update(&orphan).await?;

        tracing::info!(
            orphan_id = %orphan.id,
            osra_number = ?orphan.osra_number,
            status = %orphan.status,
            sponsorship_status = %orphan.sponsorship_status,
            "orphan updated"
        );

        Ok(orphan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::orphan::validation::messages;
    use crate::domain::orphan::{OrphanStatus, SponsorshipStatus};

    fn handler(stores: &Stores, resolver: Arc<dyn SponsorshipStatusResolver>) -> UpdateOrphanHandler {
        UpdateOrphanHandler::new(stores.orphans.clone(), resolver, clock(), RuleSettings::default())
    }

    fn status_change(orphan: &Orphan, status: OrphanStatus) -> UpdateOrphanCommand {
        UpdateOrphanCommand {
            orphan_id: orphan.id,
            changes: OrphanChanges {
                status: Some(status),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn sponsored_orphan_cannot_be_inactivated() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::Sponsored)
            .await;
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::Unsponsored));

        let err = handler(&stores, resolver.clone())
            .handle(status_change(&orphan, OrphanStatus::Inactive))
            .await
            .unwrap_err();

        assert_eq!(
            err.validation_errors().unwrap().on("status"),
            vec![messages::CANNOT_INACTIVATE]
        );
        let stored = stores.orphans.find_by_id(&orphan.id).await.unwrap().unwrap();
        assert_eq!(stored.status, OrphanStatus::Active);
        assert_eq!(stored.sponsorship_status, SponsorshipStatus::Sponsored);
        assert!(resolver.calls().is_empty());
    }

    #[tokio::test]
    async fn deactivation_places_sponsorship_on_hold() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::PreviouslySponsored)
            .await;
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::Unsponsored));

        let updated = handler(&stores, resolver.clone())
            .handle(status_change(&orphan, OrphanStatus::OnHold))
            .await
            .unwrap();

        assert_eq!(updated.status, OrphanStatus::OnHold);
        assert_eq!(updated.sponsorship_status, SponsorshipStatus::SponsorshipOnHold);
        assert!(resolver.calls().is_empty());
    }

    #[tokio::test]
    async fn reactivation_resolves_status_from_history_once() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::Inactive, SponsorshipStatus::SponsorshipOnHold)
            .await;
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::PreviouslySponsored));

        let updated = handler(&stores, resolver.clone())
            .handle(status_change(&orphan, OrphanStatus::Active))
            .await
            .unwrap();

        assert_eq!(resolver.calls(), vec![orphan.id]);
        assert_eq!(updated.sponsorship_status, SponsorshipStatus::PreviouslySponsored);
        let stored = stores.orphans.find_by_id(&orphan.id).await.unwrap().unwrap();
        assert_eq!(stored.sponsorship_status, SponsorshipStatus::PreviouslySponsored);
    }

    #[tokio::test]
    async fn moving_between_inactive_states_keeps_sponsorship_status() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::Inactive, SponsorshipStatus::SponsorshipOnHold)
            .await;
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::Unsponsored));

        let updated = handler(&stores, resolver.clone())
            .handle(status_change(&orphan, OrphanStatus::UnderRevision))
            .await
            .unwrap();

        assert_eq!(updated.sponsorship_status, SponsorshipStatus::SponsorshipOnHold);
        assert!(resolver.calls().is_empty());
    }

    #[tokio::test]
    async fn attribute_edits_keep_osra_number_and_identity_check_skips_self() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::Unsponsored));

        let updated = handler(&stores, resolver.clone())
            .handle(UpdateOrphanCommand {
                orphan_id: orphan.id,
                changes: OrphanChanges {
                    contact_number: Some("0944 000 111".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.contact_number, "0944 000 111");
        assert_eq!(updated.osra_number, orphan.osra_number);
        assert_eq!(updated.sequential_id, orphan.sequential_id);
        assert_eq!(updated.updated_at.date(), today());
        assert!(resolver.calls().is_empty());
    }

    #[tokio::test]
    async fn renaming_onto_another_identity_is_rejected() {
        let stores = Stores::new();
        stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        let sami = stores
            .persisted_orphan("Sami", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::Unsponsored));

        let err = handler(&stores, resolver)
            .handle(UpdateOrphanCommand {
                orphan_id: sami.id,
                changes: OrphanChanges {
                    name: Some("Omar".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert!(err
            .validation_errors()
            .unwrap()
            .contains("name", messages::IDENTITY_TAKEN));
    }

    #[tokio::test]
    async fn unknown_orphan_is_not_found() {
        let stores = Stores::new();
        let resolver = Arc::new(RecordingResolver::returning(SponsorshipStatus::Unsponsored));
        let id = OrphanId::new();

        let err = handler(&stores, resolver)
            .handle(UpdateOrphanCommand {
                orphan_id: id,
                changes: OrphanChanges::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, OrphanError::NotFound(id));
    }

    #[tokio::test]
    async fn resolver_failure_leaves_record_unchanged() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::OnHold, SponsorshipStatus::SponsorshipOnHold)
            .await;

        let err = handler(&stores, Arc::new(FailingResolver))
            .handle(status_change(&orphan, OrphanStatus::Active))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(err.is_retryable());
        let stored = stores.orphans.find_by_id(&orphan.id).await.unwrap().unwrap();
        assert_eq!(stored.status, OrphanStatus::OnHold);
    }
}
