//! Unified application error type.
//! Every layer (db, core, cli, export) returns AppError so failures are
//! reported the same way from the store up to the command line.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status code: {0} (use A = active, I = inactive)")]
    InvalidStatus(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Employee #{0} not found")]
    EmployeeNotFound(i32),

    #[error("Ticket #{0} not found")]
    TicketNotFound(i32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the not-found family, whatever the record kind.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::EmployeeNotFound(_) | AppError::TicketNotFound(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
