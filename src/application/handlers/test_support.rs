//! Fixtures and mock ports shared by the handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

use crate::adapters::memory::{
    InMemoryOrphanRepository, InMemoryPartnerDirectory, InMemorySequenceAllocator,
    InMemorySponsorRepository, InMemorySponsorshipLedger, InMemorySponsorshipRepository,
};
use crate::adapters::FixedClock;
use crate::domain::foundation::{
    DateValue, DomainError, ErrorCode, OrphanId, OrphanListId, OsraNumber, ProvinceCode,
    Timestamp,
};
use crate::domain::orphan::{Orphan, OrphanDraft, OrphanStatus, SponsorshipStatus};
use crate::domain::partner::{Address, Partner};
use crate::domain::sponsor::{Branch, SponsorDraft, SponsorType};
use crate::ports::{OrphanRepository, SponsorshipStatusResolver};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn today() -> NaiveDate {
    date(2015, 6, 1)
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::on(today()))
}

pub fn province() -> ProvinceCode {
    ProvinceCode::new("AB").unwrap()
}

/// In-memory ports wired the way the handlers expect them.
pub struct Stores {
    pub orphans: Arc<InMemoryOrphanRepository>,
    pub partners: Arc<InMemoryPartnerDirectory>,
    pub sequences: Arc<InMemorySequenceAllocator>,
    pub sponsors: Arc<InMemorySponsorRepository>,
    pub sponsorships: Arc<InMemorySponsorshipRepository>,
    pub ledger: Arc<InMemorySponsorshipLedger>,
}

impl Stores {
    pub fn new() -> Self {
        let orphans = InMemoryOrphanRepository::new();
        let sponsorships = InMemorySponsorshipRepository::new();
        Self {
            ledger: Arc::new(InMemorySponsorshipLedger::new(orphans.clone(), sponsorships.clone())),
            orphans: Arc::new(orphans),
            partners: Arc::new(InMemoryPartnerDirectory::new()),
            sequences: Arc::new(InMemorySequenceAllocator::new()),
            sponsors: Arc::new(InMemorySponsorRepository::new()),
            sponsorships: Arc::new(sponsorships),
        }
    }

    /// Registers a partner in province `AB` and returns its list.
    pub async fn list_in_ab(&self) -> OrphanListId {
        self.partners
            .register(Partner::new("Aleppo Relief", province()))
            .await
            .id
    }

    /// Stores a numbered orphan created a year before [`today`].
    pub async fn persisted_orphan(
        &self,
        name: &str,
        status: OrphanStatus,
        sponsorship_status: SponsorshipStatus,
    ) -> Orphan {
        let list = self.list_in_ab().await;
        let mut orphan = Orphan::new(
            OrphanDraft {
                province_code: Some(province()),
                status: Some(status),
                sponsorship_status: Some(sponsorship_status),
                ..named_draft(list, name)
            },
            Timestamp::start_of(date(2014, 6, 1)),
        );
        let sequence = self.orphans.len().await as u32 + 1;
        orphan
            .assign_osra_number(sequence, OsraNumber::from_string(format!("AB{:05}", sequence)))
            .unwrap();
        self.orphans.save(&orphan).await.unwrap();
        orphan
    }
}

fn address() -> Address {
    Address::new(province(), "Aleppo", "Salaheddine")
}

/// A draft that passes every rule on [`today`].
pub fn valid_draft(list_id: OrphanListId) -> OrphanDraft {
    OrphanDraft {
        orphan_list_id: Some(list_id),
        name: "Omar".to_string(),
        father_given_name: "Khaled".to_string(),
        family_name: "Haddad".to_string(),
        mother_name: "Huda".to_string(),
        mother_alive: Some(true),
        date_of_birth: Some(DateValue::from(date(2010, 3, 1))),
        gender: Some("Male".to_string()),
        contact_number: "0933 123 456".to_string(),
        father_deceased: Some(true),
        father_is_martyr: Some(false),
        father_date_of_death: Some(DateValue::from(date(2012, 1, 1))),
        father_place_of_death: Some("Homs".to_string()),
        father_cause_of_death: Some("illness".to_string()),
        minor_siblings_count: Some(2),
        sponsored_minor_siblings_count: Some(1),
        sponsored_by_another_org: Some(false),
        original_address: Some(address()),
        current_address: Some(address()),
        ..Default::default()
    }
}

pub fn named_draft(list_id: OrphanListId, name: &str) -> OrphanDraft {
    OrphanDraft {
        name: name.to_string(),
        ..valid_draft(list_id)
    }
}

pub fn valid_sponsor_draft() -> SponsorDraft {
    SponsorDraft {
        name: "Fatima Ali".to_string(),
        country: "Turkey".to_string(),
        gender: Some("Female".to_string()),
        requested_orphan_count: Some(2),
        sponsor_type: Some(SponsorType::Individual),
        branch: Some(Branch::new("Gaziantep", 3)),
        ..Default::default()
    }
}

/// Resolver returning a fixed status and recording each orphan it saw.
pub struct RecordingResolver {
    status: SponsorshipStatus,
    calls: Mutex<Vec<OrphanId>>,
}

impl RecordingResolver {
    pub fn returning(status: SponsorshipStatus) -> Self {
        Self {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<OrphanId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SponsorshipStatusResolver for RecordingResolver {
    async fn resolve(&self, orphan: &Orphan) -> Result<SponsorshipStatus, DomainError> {
        self.calls.lock().unwrap().push(orphan.id);
        Ok(self.status)
    }
}

/// Resolver whose backing store is down.
pub struct FailingResolver;

#[async_trait]
impl SponsorshipStatusResolver for FailingResolver {
    async fn resolve(&self, _orphan: &Orphan) -> Result<SponsorshipStatus, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "sponsorships unavailable"))
    }
}
