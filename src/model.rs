use crate::scheduler::ShiftError;
use crate::storage::ShiftBook;
use crate::user::UserDirectory;
use chrono::{NaiveTime, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn sequential(n: u64) -> Self {
        Self(n.to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Construit une heure du jour à la minute près.
pub fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime, ShiftError> {
    if hour > 23 {
        return Err(ShiftError::InvalidRange("hour must be between 0-23"));
    }
    if minute > 59 {
        return Err(ShiftError::InvalidRange("minute must be between 0-59"));
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(ShiftError::InvalidRange("invalid time of day"))
}

/// Plage horaire d'un créneau, dans une même journée : `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// Valide la plage : ni durée nulle, ni fin avant le début.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ShiftError> {
        if start == end {
            return Err(ShiftError::InvalidRange(
                "shifts must have a different start and end time",
            ));
        }
        if end < start {
            return Err(ShiftError::InvalidRange(
                "a shift's end time cannot be before its start time",
            ));
        }
        Ok(Self { start, end })
    }

    /// Construit la plage depuis des paires heure/minute (format des requêtes).
    pub fn from_hm(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<Self, ShiftError> {
        let start = time_of_day(start_hour, start_minute)?;
        let end = time_of_day(end_hour, end_minute)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }
    pub fn start_minute(&self) -> u32 {
        self.start.minute()
    }
    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }
    pub fn end_minute(&self) -> u32 {
        self.end.minute()
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRange {
    start: NaiveTime,
    end: NaiveTime,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for TimeRange {
    type Error = ShiftError;

    /// Précision à la minute : secondes et fractions sont refusées.
    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        let whole_minute = |t: NaiveTime| t.second() == 0 && t.nanosecond() == 0;
        if !whole_minute(raw.start) || !whole_minute(raw.end) {
            return Err(ShiftError::InvalidRange(
                "stored times must be whole minutes",
            ));
        }
        TimeRange::new(raw.start, raw.end)
    }
}

/// Créneau de travail quotidien assigné à un utilisateur.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shift {
    pub id: ShiftId,
    pub assignee: String,
    pub range: TimeRange,
}

impl Shift {
    pub fn new<A: Into<String>>(id: ShiftId, assignee: A, range: TimeRange) -> Self {
        Self {
            id,
            assignee: assignee.into(),
            range,
        }
    }
}

/// Demande de création ou de mise à jour, au format heure/minute.
///
/// `username` vide ou absent : le créneau vise l'utilisateur courant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShiftRequest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub username: Option<String>,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl ShiftRequest {
    pub fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            username: None,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    pub fn for_user<U: Into<String>>(mut self, username: U) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Nom d'utilisateur explicitement demandé (les chaînes vides comptent comme absentes).
    pub fn requested_user(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.trim().is_empty())
    }

    pub fn range(&self) -> Result<TimeRange, ShiftError> {
        TimeRange::from_hm(
            self.start_hour,
            self.start_minute,
            self.end_hour,
            self.end_minute,
        )
    }
}

/// Fenêtre de recherche ; par défaut toute la journée (00:00–23:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl SearchWindow {
    /// Seules les bornes heure/minute sont contrôlées ; `from > to` donne une fenêtre vide.
    pub fn new(
        from_hour: u32,
        from_minute: u32,
        to_hour: u32,
        to_minute: u32,
    ) -> Result<Self, ShiftError> {
        Ok(Self {
            from: time_of_day(from_hour, from_minute)?,
            to: time_of_day(to_hour, to_minute)?,
        })
    }

    /// Le créneau doit être entièrement contenu dans la fenêtre.
    pub fn contains(&self, range: &TimeRange) -> bool {
        range.start() >= self.from && range.end() <= self.to
    }
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self {
            from: NaiveTime::MIN,
            to: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Roster complet : annuaire + créneaux, tel que persisté.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default))]
    pub users: UserDirectory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shifts: ShiftBook,
}
