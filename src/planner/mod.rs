mod people;
mod shifts;
mod types;

pub use types::{PlanError, ShiftRequest};

use crate::availability::{self, AvailabilityCheck, AvailabilityStatus, Stats};
use crate::calendar;
use crate::model::{Person, PersonId, Roster, Shift, ShiftId};
use crate::storage::{PersonRemoval, Storage};
use crate::time;
use chrono::NaiveDate;

/// Planner : relie le moteur de disponibilité à un dépôt.
///
/// Chaque opération recharge un instantané, valide l'entrée avant d'appeler
/// le moteur, puis écrit via le dépôt.
#[derive(Debug)]
pub struct Planner<S: Storage> {
    storage: S,
}

impl<S: Storage> Planner<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Instantané courant (équipe + shifts).
    pub fn roster(&self) -> Result<Roster, PlanError> {
        Ok(self.storage.load()?)
    }

    /// Nouvelle personne ; couleur tirée de la palette.
    pub fn add_person(&self, name: &str) -> Result<Person, PlanError> {
        people::add_person(self, name, None)
    }

    /// Nouvelle personne avec une couleur `#rrggbb` imposée.
    pub fn add_person_with_color(&self, name: &str, color: &str) -> Result<Person, PlanError> {
        people::add_person(self, name, Some(color))
    }

    pub fn rename_person(&self, id: &PersonId, name: &str) -> Result<Person, PlanError> {
        people::update_person(self, id, Some(name), None)
    }

    pub fn recolor_person(&self, id: &PersonId, color: &str) -> Result<Person, PlanError> {
        people::update_person(self, id, None, Some(color))
    }

    /// Suppression en cascade ; le retour permet d'annuler via [`Self::restore_person`].
    pub fn remove_person(&self, id: &PersonId) -> Result<PersonRemoval, PlanError> {
        people::remove_person(self, id)
    }

    pub fn restore_person(&self, removal: PersonRemoval) -> Result<(), PlanError> {
        people::restore_person(self, removal)
    }

    pub fn schedule_shift(&self, req: ShiftRequest) -> Result<Shift, PlanError> {
        shifts::schedule_shift(self, req)
    }

    pub fn update_shift(&self, id: &ShiftId, req: ShiftRequest) -> Result<Shift, PlanError> {
        shifts::update_shift(self, id, req)
    }

    pub fn duplicate_shift(&self, id: &ShiftId, date: Option<&str>) -> Result<Shift, PlanError> {
        shifts::duplicate_shift(self, id, date)
    }

    pub fn remove_shift(&self, id: &ShiftId) -> Result<Shift, PlanError> {
        shifts::remove_shift(self, id)
    }

    /// Réinsère exactement le shift supprimé.
    pub fn restore_shift(&self, shift: Shift) -> Result<(), PlanError> {
        Ok(self.storage.save_shift(shift)?)
    }

    /// Vérification validée ; une personne absente de l'équipe donne `Unknown`.
    pub fn check(
        &self,
        person_id: &PersonId,
        date: &str,
        start_time: &str,
        end_time: &str,
        exclude: Option<&ShiftId>,
    ) -> Result<AvailabilityCheck, PlanError> {
        let date = calendar::to_iso(calendar::parse_iso_date(date)?);
        if !time::validate_shift_times(start_time, end_time) {
            return Err(PlanError::InvalidTimes {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }
        let roster = self.storage.load()?;
        let mut check = availability::check_availability(
            person_id,
            &date,
            start_time,
            end_time,
            &roster.shifts,
            exclude,
        );
        if roster.find_person_by_id(person_id).is_none() {
            check.status = AvailabilityStatus::Unknown;
            check.conflicting_shift_id = None;
        }
        Ok(check)
    }

    pub fn stats(&self, today: NaiveDate) -> Result<Stats, PlanError> {
        let roster = self.storage.load()?;
        Ok(availability::stats(&roster.people, &roster.shifts, today)?)
    }
}
