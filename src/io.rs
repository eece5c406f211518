use crate::model::{Roster, Shift};
use crate::user::{Role, User};
use crate::view::ShiftView;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Import d'utilisateurs depuis CSV: header `username,roles` (rôles séparés par `;`)
pub fn import_users_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<User>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let username = rec.get(0).context("missing username")?.trim();
        if username.is_empty() {
            bail!("invalid user row (empty username)");
        }
        let roles = match rec.get(1).map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_roles(raw)
                .with_context(|| format!("invalid roles value for username {username}"))?,
            _ => BTreeSet::new(),
        };
        out.push(User::new(username, roles));
    }
    Ok(out)
}

/// Liste de rôles `manager;employee` (`,` accepté aussi).
pub fn parse_roles(raw: &str) -> anyhow::Result<BTreeSet<Role>> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.parse::<Role>())
        .collect()
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des créneaux: header `id,user,start_time,end_time` (heures 12 h)
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, shifts: &[Shift]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "user", "start_time", "end_time"])?;
    for s in shifts {
        let view = ShiftView::from(s);
        w.write_record([
            view.id.as_str(),
            view.user.as_str(),
            view.start_time.as_str(),
            view.end_time.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
