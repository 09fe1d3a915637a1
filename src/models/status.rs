use serde::Serialize;
use std::fmt;

/// Activation status shared by employees and tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[default]
    Active,   // A
    Inactive, // I
}

impl Status {
    pub fn code(&self) -> &'static str {
        match self {
            Status::Active => "A",
            Status::Inactive => "I",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Status::Active),
            "I" => Some(Status::Inactive),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI.
    /// Accepts the single-letter codes in any case and the full words.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "A" | "ACTIVE" => Some(Status::Active),
            "I" | "INACTIVE" => Some(Status::Inactive),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
