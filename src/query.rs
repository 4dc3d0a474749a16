//! Vues en lecture seule sur une collection de shifts.
//!
//! Aucune fonction ne modifie son entrée ; les tris sont stables.

use crate::model::{PersonId, Shift};
use crate::time;

/// Clé de tri : heure de début, les heures illisibles en dernier.
fn start_key(shift: &Shift) -> i32 {
    time::minutes(&shift.start_time).unwrap_or(i32::MAX)
}

/// Shifts d'une date donnée, par heure de début croissante.
pub fn shifts_for_date<'a>(date: &str, shifts: &'a [Shift]) -> Vec<&'a Shift> {
    let mut out: Vec<&Shift> = shifts.iter().filter(|s| s.date == date).collect();
    out.sort_by_key(|s| start_key(s));
    out
}

/// Shifts d'une personne, par date puis heure de début.
pub fn shifts_for_person<'a>(person_id: &PersonId, shifts: &'a [Shift]) -> Vec<&'a Shift> {
    let mut out: Vec<&Shift> = shifts
        .iter()
        .filter(|s| &s.person_id == person_id)
        .collect();
    sort_chronologically(&mut out);
    out
}

/// Tous les shifts, par date puis heure de début.
pub fn chronological(shifts: &[Shift]) -> Vec<&Shift> {
    let mut out: Vec<&Shift> = shifts.iter().collect();
    sort_chronologically(&mut out);
    out
}

fn sort_chronologically(shifts: &mut [&Shift]) {
    shifts.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| start_key(a).cmp(&start_key(b)))
    });
}

/// Shifts dont la date est dans `[start, end]` (comparaison ISO lexicographique).
pub fn shifts_for_date_range<'a>(start: &str, end: &str, shifts: &'a [Shift]) -> Vec<&'a Shift> {
    shifts
        .iter()
        .filter(|s| s.date.as_str() >= start && s.date.as_str() <= end)
        .collect()
}
