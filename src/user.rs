use crate::scheduler::ShiftError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Autorités connues de l'application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    #[cfg_attr(feature = "serde", serde(rename = "ROLE_MANAGER"))]
    Manager,
    #[cfg_attr(feature = "serde", serde(rename = "ROLE_EMPLOYEE"))]
    Employee,
    #[cfg_attr(feature = "serde", serde(rename = "ROLE_USER"))]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "ROLE_MANAGER",
            Role::Employee => "ROLE_EMPLOYEE",
            Role::User => "ROLE_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    /// Accepte `manager` comme `ROLE_MANAGER`, sans tenir compte de la casse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "MANAGER" => Ok(Role::Manager),
            "EMPLOYEE" => Ok(Role::Employee),
            "USER" => Ok(Role::User),
            _ => anyhow::bail!("unknown role: {s}"),
        }
    }
}

/// Utilisateur de l'annuaire (aucun secret n'est stocké ici).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    pub username: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: BTreeSet<Role>,
}

impl User {
    pub fn new<U: Into<String>, R: IntoIterator<Item = Role>>(username: U, roles: R) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(*r))
    }

    /// Gestion des créneaux de tous les employés.
    pub fn can_manage(&self) -> bool {
        self.has_role(Role::Manager)
    }

    /// Consultation de ses propres créneaux.
    pub fn can_view_own(&self) -> bool {
        self.has_any_role(&[Role::Manager, Role::Employee])
    }
}

/// Collaborateur d'identité consulté par le cycle de vie des créneaux.
pub trait Directory {
    fn find_user(&self, username: &str) -> Option<&User>;

    fn user_exists(&self, username: &str) -> bool {
        self.find_user(username).is_some()
    }
}

/// Annuaire en mémoire, persisté avec le roster.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre un utilisateur ; les noms sont uniques.
    pub fn register(&mut self, user: User) -> Result<(), ShiftError> {
        if user.username.trim().is_empty() {
            return Err(ShiftError::UnknownUser(user.username));
        }
        if self.user_exists(&user.username) {
            return Err(ShiftError::DuplicateUser(user.username));
        }
        self.users.push(user);
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Directory for UserDirectory {
    fn find_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }
}
