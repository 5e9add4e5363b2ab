//! Session context
//!
//! The bearer token and role of the signed-in user. Passed explicitly to
//! every component that talks to the API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClassGridError;

/// Role granted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coordinator,
}

impl Role {
    /// Class timetables are maintained by coordinators.
    #[must_use]
    pub const fn can_edit_timetable(self) -> bool {
        matches!(self, Self::Coordinator)
    }

    /// Fail with `Forbidden` unless this role may edit timetables.
    ///
    /// # Errors
    /// `Forbidden` for roles other than coordinator.
    pub fn ensure_can_edit(self) -> crate::Result<()> {
        if self.can_edit_timetable() {
            Ok(())
        } else {
            Err(ClassGridError::Forbidden(format!("role '{self}' cannot edit class timetables")))
        }
    }

    /// Lowercase name, as used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Coordinator => "coordinator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClassGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "coordinator" => Ok(Self::Coordinator),
            other => Err(ClassGridError::Config(format!("Unknown role: {other}"))),
        }
    }
}

/// Authenticated session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    /// Session for a token and role.
    #[must_use]
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: token.into(), role }
    }

    /// See [`Role::ensure_can_edit`].
    ///
    /// # Errors
    /// `Forbidden` when the session role may not edit.
    pub fn ensure_can_edit(&self) -> crate::Result<()> {
        self.role.ensure_can_edit()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").field("role", &self.role).finish()
    }
}
