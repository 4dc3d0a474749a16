use super::{check, AvailabilityReport, Stats};
use crate::calendar::{self, DateError};
use crate::model::{Person, Shift};
use crate::query;
use chrono::NaiveDate;

pub(super) fn people_with_status<'a>(
    date: &str,
    start_time: &str,
    end_time: &str,
    people: &'a [Person],
    shifts: &[Shift],
    busy: bool,
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|p| {
            check::check_availability(&p.id, date, start_time, end_time, shifts, None).is_busy()
                == busy
        })
        .collect()
}

pub(super) fn partition<'a>(
    date: &str,
    start_time: &str,
    end_time: &str,
    people: &'a [Person],
    shifts: &[Shift],
) -> AvailabilityReport<'a> {
    let (busy, available): (Vec<&Person>, Vec<&Person>) = people.iter().partition(|p| {
        check::check_availability(&p.id, date, start_time, end_time, shifts, None).is_busy()
    });
    let percentage = availability_percentage(available.len(), people.len());
    AvailabilityReport {
        available,
        busy,
        percentage,
    }
}

/// `round(100 * available / total)`, 0 pour une équipe vide.
pub(super) fn availability_percentage(available: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * available as f64 / total as f64).round() as u32
}

pub(super) fn stats(
    people: &[Person],
    shifts: &[Shift],
    today: NaiveDate,
) -> Result<Stats, DateError> {
    let week = calendar::week_dates(today)?;
    let first = calendar::to_iso(week[0]);
    let last = calendar::to_iso(week[6]);
    Ok(Stats {
        total_people: people.len(),
        total_shifts: shifts.len(),
        shifts_this_week: query::shifts_for_date_range(&first, &last, shifts).len(),
    })
}
