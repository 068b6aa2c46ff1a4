use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{MenteeId, Program};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MenteeError {
    #[error("mentee name cannot be empty")]
    EmptyName,

    #[error("unknown program id: {0}")]
    UnknownProgram(String),
}

//
// ─── MENTEE ────────────────────────────────────────────────────────────────────
//

/// A mentored business owner. Created once per completed diagnosis; only
/// the program assignment is mutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mentee {
    id: MenteeId,
    name: String,
    avatar_url: String,
    program_id: String,
    created_at: DateTime<Utc>,
}

impl Mentee {
    /// Creates a new mentee, deriving the avatar URL from the name.
    ///
    /// # Errors
    ///
    /// Returns `MenteeError::EmptyName` for a blank name, or
    /// `MenteeError::UnknownProgram` if the program id is not in the
    /// catalog.
    pub fn new(
        id: MenteeId,
        name: impl Into<String>,
        program_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, MenteeError> {
        let name = name.into();
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(MenteeError::EmptyName);
        }
        let program_id = program_id.into();
        if Program::by_id(&program_id).is_none() {
            return Err(MenteeError::UnknownProgram(program_id));
        }

        let avatar_url = avatar_url_for(&name);
        Ok(Self {
            id,
            name,
            avatar_url,
            program_id,
            created_at,
        })
    }

    /// Rehydrate a mentee from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `MenteeError::EmptyName` for a blank name. The program id
    /// is kept as stored even if the catalog changed since.
    pub fn from_persisted(
        id: MenteeId,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
        program_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, MenteeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenteeError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.trim().to_owned(),
            avatar_url: avatar_url.into(),
            program_id: program_id.into(),
            created_at,
        })
    }

    /// Reassigns the mentee to another program.
    ///
    /// # Errors
    ///
    /// Returns `MenteeError::UnknownProgram` if the id is not catalogued.
    pub fn change_program(&mut self, program_id: impl Into<String>) -> Result<(), MenteeError> {
        let program_id = program_id.into();
        if Program::by_id(&program_id).is_none() {
            return Err(MenteeError::UnknownProgram(program_id));
        }
        self.program_id = program_id;
        Ok(())
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> MenteeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    #[must_use]
    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builds an avatar image URL from the mentee name.
fn avatar_url_for(name: &str) -> String {
    let joined: Vec<&str> = name.split_whitespace().collect();
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        joined.join("+")
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
