use super::{validate, Scheduler, ShiftError};
use crate::model::{Shift, ShiftId, ShiftRequest};
use crate::storage::ShiftStore;
use crate::user::Directory;

pub(super) fn create_shift<S: ShiftStore, D: Directory>(
    scheduler: &mut Scheduler<S, D>,
    actor: &str,
    request: &ShiftRequest,
) -> Result<Shift, ShiftError> {
    let assignee = scheduler.resolve_assignee(actor, request.requested_user())?;

    let existing = scheduler.shifts.shifts_for(&assignee);
    let range = validate(&assignee, request, &existing, None)
        .inspect_err(|err| log_rejection(&assignee, err))?;

    let id = scheduler.shifts.next_id();
    if scheduler.shifts.find(&id).is_some() {
        return Err(anyhow::anyhow!("shift id {id} is already in use").into());
    }
    let shift = scheduler.shifts.save(Shift::new(id, assignee, range))?;

    #[cfg(feature = "logging")]
    tracing::debug!(id = %shift.id, assignee = %shift.assignee, range = %shift.range, "shift created");

    Ok(shift)
}

/// Seule la plage change ; l'id et l'assigné sont immuables.
pub(super) fn update_shift<S: ShiftStore, D: Directory>(
    scheduler: &mut Scheduler<S, D>,
    actor: &str,
    shift_id: &ShiftId,
    request: &ShiftRequest,
) -> Result<Shift, ShiftError> {
    let Some(mut target) = scheduler.shifts.find(shift_id) else {
        return Err(ShiftError::not_found(shift_id, None));
    };

    let assignee = scheduler.resolve_assignee(actor, request.requested_user())?;
    if target.assignee != assignee {
        return Err(ShiftError::not_found(shift_id, Some(&assignee)));
    }

    let existing = scheduler.shifts.shifts_for(&assignee);
    let range = validate(&assignee, request, &existing, Some(shift_id))
        .inspect_err(|err| log_rejection(&assignee, err))?;

    target.range = range;
    let shift = scheduler.shifts.save(target)?;

    #[cfg(feature = "logging")]
    tracing::debug!(id = %shift.id, range = %shift.range, "shift updated");

    Ok(shift)
}

pub(super) fn delete_shift<S: ShiftStore, D: Directory>(
    scheduler: &mut Scheduler<S, D>,
    shift_id: &ShiftId,
    scope: Option<&str>,
) -> Result<(), ShiftError> {
    let target = scheduler.get_shift(shift_id, scope)?;
    scheduler.shifts.delete(&target.id)?;

    #[cfg(feature = "logging")]
    tracing::debug!(id = %target.id, assignee = %target.assignee, "shift deleted");

    Ok(())
}

fn log_rejection(assignee: &str, err: &ShiftError) {
    #[cfg(feature = "logging")]
    tracing::warn!(assignee, error = %err, "shift rejected");
    #[cfg(not(feature = "logging"))]
    let _ = (assignee, err);
}
