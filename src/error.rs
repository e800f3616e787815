//! Error types for the planner, the guest model and the guest-list loader

use thiserror::Error;

/// Errors raised before any seating work begins
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("Invalid venue configuration: {tables} table(s) with {seats_per_table} seat(s) each")]
    InvalidConfiguration { tables: u32, seats_per_table: u32 },
}

/// Errors raised while building a guest from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestError {
    #[error("Guest name is required")]
    MissingName,
}

/// Errors raised while loading a guest list from CSV
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read guest list: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed guest list: {0}")]
    Csv(#[from] csv::Error),
}
