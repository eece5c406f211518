use crate::model::{Shift, ShiftId};
#[cfg(feature = "serde")]
use crate::model::Roster;
#[cfg(feature = "serde")]
use anyhow::Context;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::fs;
#[cfg(feature = "serde")]
use std::io::Write;
#[cfg(feature = "serde")]
use std::path::{Path, PathBuf};
#[cfg(feature = "serde")]
use tempfile::NamedTempFile;

/// Collaborateur de persistance des créneaux.
///
/// Le cycle de vie lit un instantané, valide, puis écrit ; l'atomicité
/// lecture-validation-écriture entre processus reste à la charge de l'appelant.
pub trait ShiftStore {
    /// Tous les créneaux, dans l'ordre d'insertion.
    fn all_shifts(&self) -> Vec<Shift>;

    fn shifts_for(&self, assignee: &str) -> Vec<Shift> {
        self.all_shifts()
            .into_iter()
            .filter(|s| s.assignee == assignee)
            .collect()
    }

    fn find(&self, id: &ShiftId) -> Option<Shift>;

    /// Alloue l'identifiant du prochain créneau.
    fn next_id(&mut self) -> ShiftId;

    /// Insère ou remplace (même id) un créneau.
    fn save(&mut self, shift: Shift) -> anyhow::Result<Shift>;

    fn delete(&mut self, id: &ShiftId) -> anyhow::Result<()>;
}

/// Stratégie d'allocation des identifiants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdStrategy {
    /// Compteur monotone : 1, 2, 3…
    #[default]
    Sequential,
    Uuid,
}

/// Carnet de créneaux en mémoire.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftBook {
    #[cfg_attr(feature = "serde", serde(default))]
    strategy: IdStrategy,
    #[cfg_attr(feature = "serde", serde(default))]
    last_id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    shifts: Vec<Shift>,
}

impl ShiftBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl ShiftStore for ShiftBook {
    fn all_shifts(&self) -> Vec<Shift> {
        self.shifts.clone()
    }

    fn shifts_for(&self, assignee: &str) -> Vec<Shift> {
        self.shifts
            .iter()
            .filter(|s| s.assignee == assignee)
            .cloned()
            .collect()
    }

    fn find(&self, id: &ShiftId) -> Option<Shift> {
        self.shifts.iter().find(|s| &s.id == id).cloned()
    }

    /// Le compteur repart au-delà du plus grand id numérique déjà stocké,
    /// même si le fichier chargé ne contenait pas de compteur.
    fn next_id(&mut self) -> ShiftId {
        match self.strategy {
            IdStrategy::Sequential => {
                let stored_max = self
                    .shifts
                    .iter()
                    .filter_map(|s| s.id.as_str().parse::<u64>().ok())
                    .max()
                    .unwrap_or(0);
                self.last_id = self.last_id.max(stored_max) + 1;
                ShiftId::sequential(self.last_id)
            }
            IdStrategy::Uuid => loop {
                let id = ShiftId::random();
                if !self.shifts.iter().any(|s| s.id == id) {
                    break id;
                }
            },
        }
    }

    fn save(&mut self, shift: Shift) -> anyhow::Result<Shift> {
        match self.shifts.iter_mut().find(|s| s.id == shift.id) {
            Some(slot) => *slot = shift.clone(),
            None => self.shifts.push(shift.clone()),
        }
        Ok(shift)
    }

    fn delete(&mut self, id: &ShiftId) -> anyhow::Result<()> {
        let before = self.shifts.len();
        self.shifts.retain(|s| &s.id != id);
        if self.shifts.len() == before {
            anyhow::bail!("no shift stored with id {id}");
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
pub trait Storage {
    /// Charge un roster depuis un support.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
}

#[cfg(feature = "serde")]
pub struct JsonStorage {
    path: PathBuf,
}

#[cfg(feature = "serde")]
impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Roster vide si le fichier n'existe pas encore ; toute autre erreur remonte.
    pub fn load_or_default(&self) -> anyhow::Result<Roster> {
        if self.exists() {
            self.load()
        } else {
            Ok(Roster::default())
        }
    }
}

#[cfg(feature = "serde")]
impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let roster: Roster =
            serde_json::from_slice(&data).with_context(|| "parsing roster.json")?;
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(roster)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
