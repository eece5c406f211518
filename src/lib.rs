#![forbid(unsafe_code)]
//! Shiftboard — bibliothèque de gestion de créneaux de travail quotidiens.
//!
//! - Créneaux exprimés en heures:minutes, sans date, sans passage minuit.
//! - Validation des plages et détection des chevauchements par employé.
//! - Recherche par fenêtre horaire, triée par heure de début.
//! - Stockage fichiers (JSON/CSV) ; identité et rôles vérifiés hors de la lib.

pub mod model;
pub mod scheduler;
pub mod user;
pub mod view;

#[cfg(feature = "serde")]
pub mod io;
pub mod storage;

pub use model::{Roster, SearchWindow, Shift, ShiftId, ShiftRequest, TimeRange};
pub use scheduler::{overlaps, search, validate, Scheduler, ShiftError};
pub use storage::{IdStrategy, ShiftBook, ShiftStore};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use user::{Directory, Role, User, UserDirectory};
pub use view::{format_time, ShiftView};
