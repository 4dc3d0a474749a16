use super::{PlanError, Planner};
use crate::model::{is_hex_color, Person, PersonId};
use crate::storage::{PersonRemoval, Storage};

fn clean_name(name: &str) -> Result<String, PlanError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PlanError::EmptyName);
    }
    Ok(name.to_string())
}

fn clean_color(color: &str) -> Result<String, PlanError> {
    let color = color.trim();
    if !is_hex_color(color) {
        return Err(PlanError::InvalidColor(color.to_string()));
    }
    Ok(color.to_string())
}

pub(super) fn add_person<S: Storage>(
    planner: &Planner<S>,
    name: &str,
    color: Option<&str>,
) -> Result<Person, PlanError> {
    let mut person = Person::new(clean_name(name)?);
    if let Some(color) = color {
        person = person.with_color(clean_color(color)?);
    }
    planner.storage.save_person(person.clone())?;
    #[cfg(feature = "logging")]
    tracing::info!(id = person.id.as_str(), name = %person.name, "person added");
    Ok(person)
}

pub(super) fn update_person<S: Storage>(
    planner: &Planner<S>,
    id: &PersonId,
    name: Option<&str>,
    color: Option<&str>,
) -> Result<Person, PlanError> {
    let roster = planner.storage.load()?;
    let mut person = roster
        .find_person_by_id(id)
        .cloned()
        .ok_or_else(|| PlanError::UnknownPerson(id.as_str().to_string()))?;
    if let Some(name) = name {
        person.name = clean_name(name)?;
    }
    if let Some(color) = color {
        person.color = clean_color(color)?;
    }
    planner.storage.save_person(person.clone())?;
    Ok(person)
}

pub(super) fn remove_person<S: Storage>(
    planner: &Planner<S>,
    id: &PersonId,
) -> Result<PersonRemoval, PlanError> {
    let removal = planner
        .storage
        .delete_person(id)?
        .ok_or_else(|| PlanError::UnknownPerson(id.as_str().to_string()))?;
    #[cfg(feature = "logging")]
    tracing::info!(
        id = id.as_str(),
        shifts = removal.shifts.len(),
        "person removed with shifts"
    );
    Ok(removal)
}

/// Réinsère la personne et ses shifts tels qu'ils étaient.
pub(super) fn restore_person<S: Storage>(
    planner: &Planner<S>,
    removal: PersonRemoval,
) -> Result<(), PlanError> {
    let mut roster = planner.storage.load()?;
    roster.upsert_person(removal.person);
    for shift in removal.shifts {
        roster.upsert_shift(shift);
    }
    planner.storage.save(&roster)?;
    Ok(())
}
