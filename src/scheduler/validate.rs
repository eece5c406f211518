use super::{overlaps, ShiftError};
use crate::model::{Shift, ShiftId, ShiftRequest, TimeRange};

/// Valide une demande contre les créneaux existants de `assignee`.
///
/// Pure : l'appelant fournit l'instantané. `exclude` écarte le créneau en
/// cours de mise à jour pour qu'il n'entre pas en conflit avec lui-même.
/// Renvoie la plage validée.
pub fn validate(
    assignee: &str,
    request: &ShiftRequest,
    existing: &[Shift],
    exclude: Option<&ShiftId>,
) -> Result<TimeRange, ShiftError> {
    let candidate = request.range()?;

    let conflict = existing
        .iter()
        .filter(|s| exclude != Some(&s.id))
        .any(|s| overlaps(&candidate, &s.range));
    if conflict {
        return Err(ShiftError::OverlapConflict {
            assignee: assignee.to_string(),
        });
    }

    Ok(candidate)
}
