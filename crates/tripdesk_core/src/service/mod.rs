//! Tool use-case services.
//!
//! # Responsibility
//! - Load a tool's records on mount and keep the in-memory copy.
//! - Validate command input, compute the next collection, then persist it.
//!
//! # Invariants
//! - Validation runs before any mutation; a rejected command leaves memory
//!   and storage untouched.
//! - The in-memory copy only changes after the full collection was written.

use crate::model::RecordId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod desk;
pub mod gallery_service;
pub mod journal_service;
pub mod ledger_service;
pub mod topic_service;

pub type CommandResult<T> = Result<T, CommandError>;

/// Errors from tool commands.
///
/// The validation variants correspond to submissions a form would silently
/// ignore; callers that want that behavior can discard them.
#[derive(Debug)]
pub enum CommandError {
    /// Text field is empty after trimming.
    BlankText(&'static str),
    /// Amount field is empty.
    MissingAmount,
    /// Amount is not a non-negative decimal (or not positive for goals).
    InvalidAmount(String),
    /// No record with this id in the collection.
    NotFound(RecordId),
    Repo(RepoError),
}

impl CommandError {
    /// Whether the command was rejected by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BlankText(_) | Self::MissingAmount | Self::InvalidAmount(_)
        )
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText(field) => write!(f, "{field} must not be blank"),
            Self::MissingAmount => write!(f, "amount is required"),
            Self::InvalidAmount(value) => write!(f, "invalid amount: `{value}`"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub(crate) fn require_text(value: &str, field: &'static str) -> CommandResult<String> {
    crate::model::normalize_text(value).ok_or(CommandError::BlankText(field))
}
