use crate::model::Shift;
use chrono::NaiveTime;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;

/// Vue renvoyée aux clients : heures au format 12 h (`"09:00 AM"`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShiftView {
    pub id: String,
    pub user: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&Shift> for ShiftView {
    fn from(shift: &Shift) -> Self {
        Self {
            id: shift.id.as_str().to_string(),
            user: shift.assignee.clone(),
            start_time: format_time(shift.range.start()),
            end_time: format_time(shift.range.end()),
        }
    }
}

impl fmt::Display for ShiftView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} → {}",
            self.id, self.user, self.start_time, self.end_time
        )
    }
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
