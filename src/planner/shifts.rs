use super::{PlanError, Planner, ShiftRequest};
use crate::availability;
use crate::calendar;
use crate::model::{Roster, Shift, ShiftId};
use crate::storage::Storage;
use crate::time;
use chrono::Utc;

/// Contrôles communs à la création et à l'édition : date, heures, personne,
/// puis conflit (en ignorant `exclude`).
fn validate(
    roster: &Roster,
    req: &ShiftRequest,
    exclude: Option<&ShiftId>,
) -> Result<String, PlanError> {
    let date = calendar::to_iso(calendar::parse_iso_date(&req.date)?);
    if !time::validate_shift_times(&req.start_time, &req.end_time) {
        return Err(PlanError::InvalidTimes {
            start: req.start_time.clone(),
            end: req.end_time.clone(),
        });
    }
    let person = roster
        .find_person_by_id(&req.person_id)
        .ok_or_else(|| PlanError::UnknownPerson(req.person_id.as_str().to_string()))?;

    if let Some(conflict) = availability::find_conflict(
        &req.person_id,
        &date,
        &req.start_time,
        &req.end_time,
        &roster.shifts,
        exclude,
    ) {
        return Err(PlanError::Conflict {
            person: person.name.clone(),
            shift: conflict.id.clone(),
            date: calendar::format_display_date(&conflict.date)?,
        });
    }
    Ok(date)
}

fn clean_kind(kind: Option<&String>) -> Option<String> {
    kind.map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

pub(super) fn schedule_shift<S: Storage>(
    planner: &Planner<S>,
    req: ShiftRequest,
) -> Result<Shift, PlanError> {
    let roster = planner.storage.load()?;
    let date = validate(&roster, &req, None)?;
    let mut shift = Shift::new(
        req.person_id,
        date,
        time::format_time(&req.start_time),
        time::format_time(&req.end_time),
    );
    shift.kind = clean_kind(req.kind.as_ref());
    planner.storage.save_shift(shift.clone())?;
    #[cfg(feature = "logging")]
    tracing::info!(id = shift.id.as_str(), date = %shift.date, "shift scheduled");
    Ok(shift)
}

/// Édition en place : même id, `created_at` conservé, `updated_at` rafraîchi.
pub(super) fn update_shift<S: Storage>(
    planner: &Planner<S>,
    id: &ShiftId,
    req: ShiftRequest,
) -> Result<Shift, PlanError> {
    let roster = planner.storage.load()?;
    let existing = roster
        .find_shift(id)
        .cloned()
        .ok_or_else(|| PlanError::UnknownShift(id.as_str().to_string()))?;
    let date = validate(&roster, &req, Some(id))?;
    let shift = Shift {
        id: existing.id,
        person_id: req.person_id,
        date,
        start_time: time::format_time(&req.start_time),
        end_time: time::format_time(&req.end_time),
        kind: clean_kind(req.kind.as_ref()),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };
    planner.storage.save_shift(shift.clone())?;
    Ok(shift)
}

/// Copie d'un shift existant, éventuellement vers une autre date.
pub(super) fn duplicate_shift<S: Storage>(
    planner: &Planner<S>,
    id: &ShiftId,
    date: Option<&str>,
) -> Result<Shift, PlanError> {
    let roster = planner.storage.load()?;
    let source = roster
        .find_shift(id)
        .ok_or_else(|| PlanError::UnknownShift(id.as_str().to_string()))?;
    let mut copy = source.duplicate();
    if let Some(date) = date {
        copy.date = date.to_string();
    }
    let req = ShiftRequest {
        person_id: copy.person_id.clone(),
        date: copy.date.clone(),
        start_time: copy.start_time.clone(),
        end_time: copy.end_time.clone(),
        kind: copy.kind.clone(),
    };
    copy.date = validate(&roster, &req, None)?;
    planner.storage.save_shift(copy.clone())?;
    Ok(copy)
}

pub(super) fn remove_shift<S: Storage>(
    planner: &Planner<S>,
    id: &ShiftId,
) -> Result<Shift, PlanError> {
    planner
        .storage
        .delete_shift(id)?
        .ok_or_else(|| PlanError::UnknownShift(id.as_str().to_string()))
}
