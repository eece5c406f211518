mod mutate;
mod overlap;
mod search;
mod types;
mod validate;

pub use overlap::overlaps;
pub use search::search;
pub use types::ShiftError;
pub use validate::validate;

use crate::model::{Roster, SearchWindow, Shift, ShiftId, ShiftRequest};
use crate::storage::{ShiftBook, ShiftStore};
use crate::user::{Directory, UserDirectory};

/// Cycle de vie des créneaux : valide avant toute écriture.
///
/// L'identité courante (`actor`) est passée explicitement à chaque appel.
#[derive(Debug, Default)]
pub struct Scheduler<S = ShiftBook, D = UserDirectory> {
    shifts: S,
    users: D,
}

impl Scheduler {
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            shifts: roster.shifts,
            users: roster.users,
        }
    }

    pub fn into_roster(self) -> Roster {
        Roster {
            users: self.users,
            shifts: self.shifts,
        }
    }
}

impl<S: ShiftStore, D: Directory> Scheduler<S, D> {
    pub fn new(shifts: S, users: D) -> Self {
        Self { shifts, users }
    }

    pub fn shifts(&self) -> &S {
        &self.shifts
    }
    pub fn users(&self) -> &D {
        &self.users
    }
    pub fn users_mut(&mut self) -> &mut D {
        &mut self.users
    }

    /// Crée un créneau pour `request.username`, ou pour `actor` à défaut.
    pub fn create_shift(&mut self, actor: &str, request: &ShiftRequest) -> Result<Shift, ShiftError> {
        mutate::create_shift(self, actor, request)
    }

    /// Lecture par id ; avec `scope`, le créneau doit appartenir à cet utilisateur.
    pub fn get_shift(&self, shift_id: &ShiftId, scope: Option<&str>) -> Result<Shift, ShiftError> {
        self.shifts
            .find(shift_id)
            .filter(|s| scope.map_or(true, |user| s.assignee == user))
            .ok_or_else(|| ShiftError::not_found(shift_id, scope))
    }

    /// Met à jour la plage d'un créneau de `request.username`, ou de `actor` à défaut.
    pub fn update_shift(
        &mut self,
        actor: &str,
        shift_id: &ShiftId,
        request: &ShiftRequest,
    ) -> Result<Shift, ShiftError> {
        mutate::update_shift(self, actor, shift_id, request)
    }

    pub fn delete_shift(&mut self, shift_id: &ShiftId, scope: Option<&str>) -> Result<(), ShiftError> {
        mutate::delete_shift(self, shift_id, scope)
    }

    /// Recherche sur l'ensemble des employés.
    pub fn list_all(&self, window: &SearchWindow) -> Vec<Shift> {
        search(&self.shifts.all_shifts(), window)
    }

    /// Recherche pour `username`, ou pour `actor` à défaut.
    pub fn search_shifts(
        &self,
        actor: &str,
        username: Option<&str>,
        window: &SearchWindow,
    ) -> Result<Vec<Shift>, ShiftError> {
        let user = self.resolve_assignee(actor, username)?;
        Ok(search(&self.shifts.shifts_for(&user), window))
    }

    fn resolve_assignee(&self, actor: &str, requested: Option<&str>) -> Result<String, ShiftError> {
        let username = requested.filter(|u| !u.trim().is_empty()).unwrap_or(actor);
        if !self.users.user_exists(username) {
            return Err(ShiftError::UnknownUser(username.to_string()));
        }
        Ok(username.to_string())
    }
}
