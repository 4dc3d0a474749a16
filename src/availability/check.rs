use super::{AvailabilityCheck, AvailabilityStatus};
use crate::model::{PersonId, Shift, ShiftId};
use crate::time;

/// Premier shift (ordre d'entrée) de la personne, le même jour, qui chevauche
/// la fenêtre demandée. `exclude` écarte le shift en cours d'édition.
pub(super) fn first_conflict<'a>(
    person_id: &PersonId,
    date: &str,
    start_time: &str,
    end_time: &str,
    shifts: &'a [Shift],
    exclude: Option<&ShiftId>,
) -> Option<&'a Shift> {
    shifts.iter().find(|s| {
        if &s.person_id != person_id || s.date != date {
            return false;
        }
        if exclude == Some(&s.id) {
            return false;
        }
        time::overlaps(&s.start_time, &s.end_time, start_time, end_time)
    })
}

pub(super) fn check_availability(
    person_id: &PersonId,
    date: &str,
    start_time: &str,
    end_time: &str,
    shifts: &[Shift],
    exclude: Option<&ShiftId>,
) -> AvailabilityCheck {
    let conflict = first_conflict(person_id, date, start_time, end_time, shifts, exclude);

    #[cfg(feature = "logging")]
    if let Some(c) = conflict {
        tracing::debug!(
            person = person_id.as_str(),
            date,
            shift = c.id.as_str(),
            "availability conflict"
        );
    }

    AvailabilityCheck {
        person_id: person_id.clone(),
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        status: if conflict.is_some() {
            AvailabilityStatus::Busy
        } else {
            AvailabilityStatus::Available
        },
        conflicting_shift_id: conflict.map(|s| s.id.clone()),
    }
}
