use crate::model::ShiftId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("invalid time range: {0}")]
    InvalidRange(&'static str),
    #[error("this shift overlaps with an existing shift for username {assignee}")]
    OverlapConflict { assignee: String },
    #[error("unable to find shift with id {}{}", .id, scope_suffix(.assignee))]
    ShiftNotFound {
        id: ShiftId,
        assignee: Option<String>,
    },
    #[error("no user exists with username {0:?}")]
    UnknownUser(String),
    #[error("username already exists: {0}")]
    DuplicateUser(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShiftError {
    pub(crate) fn not_found(id: &ShiftId, assignee: Option<&str>) -> Self {
        ShiftError::ShiftNotFound {
            id: id.clone(),
            assignee: assignee.map(str::to_owned),
        }
    }
}

fn scope_suffix(assignee: &Option<String>) -> String {
    assignee
        .as_deref()
        .map(|a| format!(" for username {a}"))
        .unwrap_or_default()
}
