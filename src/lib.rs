//! OSRA - orphan sponsorship administration rules
//!
//! Validation, OSRA numbering and sponsorship-status rules for orphans and
//! sponsors, with storage behind ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
