//! Moteur de disponibilité : conflits d'une personne et agrégats sur l'équipe.
//!
//! Tout est calculé à la demande sur l'instantané fourni par l'appelant.

mod aggregate;
mod check;
mod types;

pub use types::{AvailabilityCheck, AvailabilityReport, AvailabilityStatus, Stats};

use crate::calendar::DateError;
use crate::model::{Person, PersonId, Shift, ShiftId};
use chrono::NaiveDate;

/// Disponibilité d'une personne sur `date` entre `start_time` et `end_time`.
///
/// Renvoie `Busy` avec le **premier** shift en conflit rencontré. Les heures ne
/// sont pas validées ici.
pub fn check_availability(
    person_id: &PersonId,
    date: &str,
    start_time: &str,
    end_time: &str,
    shifts: &[Shift],
    exclude: Option<&ShiftId>,
) -> AvailabilityCheck {
    check::check_availability(person_id, date, start_time, end_time, shifts, exclude)
}

/// Le shift en conflit lui-même, quand l'appelant veut l'afficher.
pub fn find_conflict<'a>(
    person_id: &PersonId,
    date: &str,
    start_time: &str,
    end_time: &str,
    shifts: &'a [Shift],
    exclude: Option<&ShiftId>,
) -> Option<&'a Shift> {
    check::first_conflict(person_id, date, start_time, end_time, shifts, exclude)
}

pub fn available_people<'a>(
    date: &str,
    start_time: &str,
    end_time: &str,
    people: &'a [Person],
    shifts: &[Shift],
) -> Vec<&'a Person> {
    aggregate::people_with_status(date, start_time, end_time, people, shifts, false)
}

pub fn busy_people<'a>(
    date: &str,
    start_time: &str,
    end_time: &str,
    people: &'a [Person],
    shifts: &[Shift],
) -> Vec<&'a Person> {
    aggregate::people_with_status(date, start_time, end_time, people, shifts, true)
}

/// Disponibles et occupés en une seule passe, avec le pourcentage.
pub fn partition<'a>(
    date: &str,
    start_time: &str,
    end_time: &str,
    people: &'a [Person],
    shifts: &[Shift],
) -> AvailabilityReport<'a> {
    aggregate::partition(date, start_time, end_time, people, shifts)
}

pub fn availability_percentage(available: usize, total: usize) -> u32 {
    aggregate::availability_percentage(available, total)
}

/// Compteurs globaux ; la semaine est celle (lundi-dimanche) qui contient `today`.
pub fn stats(
    people: &[Person],
    shifts: &[Shift],
    today: NaiveDate,
) -> Result<Stats, DateError> {
    aggregate::stats(people, shifts, today)
}
