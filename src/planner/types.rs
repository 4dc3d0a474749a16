use crate::calendar::DateError;
use crate::model::{PersonId, ShiftId};
use thiserror::Error;

/// Demande de création ou de modification d'un shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRequest {
    pub person_id: PersonId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: Option<String>,
}

impl ShiftRequest {
    pub fn new<D, S, E>(person_id: PersonId, date: D, start_time: S, end_time: E) -> Self
    where
        D: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        Self {
            person_id,
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            kind: None,
        }
    }

    pub fn with_kind<K: Into<String>>(mut self, kind: K) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid times {start}-{end}: expected HH:MM within 00:00-23:59, end after start")]
    InvalidTimes { start: String, end: String },
    #[error(transparent)]
    InvalidDate(#[from] DateError),
    #[error("person name cannot be empty")]
    EmptyName,
    #[error("invalid color (expected #rrggbb): {0}")]
    InvalidColor(String),
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    /// `date` est déjà au format d'affichage.
    #[error("{person} already has a shift at this time ({date})")]
    Conflict {
        person: String,
        shift: ShiftId,
        date: String,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
