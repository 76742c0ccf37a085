//! Sponsorship collaborators built on the sponsorship repository.

mod history_resolver;

pub use history_resolver::HistoryStatusResolver;
