//! Dates de calendrier : semaines commençant le lundi, noms de jours,
//! conversions ISO (`YYYY-MM-DD`) / affichage (`DD/MM/YYYY`).

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid ISO date (expected YYYY-MM-DD): {0}")]
    InvalidIso(String),
    #[error("invalid display date (expected DD/MM/YYYY): {0}")]
    InvalidDisplay(String),
    #[error("date out of supported range: {0}")]
    OutOfRange(String),
}

/// Langue des abréviations de jours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

const DAY_NAMES_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const DAY_NAMES_PT: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

pub fn parse_iso_date(s: &str) -> Result<NaiveDate, DateError> {
    let s = s.trim();
    // chrono accepte des champs non paddés ; la forme canonique est stricte.
    if s.len() != 10 {
        return Err(DateError::InvalidIso(s.to_string()));
    }
    NaiveDate::parse_from_str(s, ISO_FORMAT).map_err(|_| DateError::InvalidIso(s.to_string()))
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Les 7 dates, du lundi au dimanche, de la semaine contenant `date`.
///
/// `OutOfRange` si la semaine déborde des bornes de `NaiveDate`.
pub fn week_dates(date: NaiveDate) -> Result<[NaiveDate; 7], DateError> {
    let out_of_range = || DateError::OutOfRange(date.to_string());
    // num_days_from_monday: dimanche = 6
    let offset = u64::from(date.weekday().num_days_from_monday());
    let monday = date.checked_sub_days(Days::new(offset)).ok_or_else(out_of_range)?;
    monday.checked_add_days(Days::new(6)).ok_or_else(out_of_range)?;
    Ok(std::array::from_fn(|i| monday + Days::new(i as u64)))
}

pub fn week_dates_iso(date: &str) -> Result<[String; 7], DateError> {
    let week = week_dates(parse_iso_date(date)?)?;
    Ok(week.map(to_iso))
}

/// Même jour, `weeks` semaines plus tard (ou plus tôt si négatif).
pub fn shift_week(date: NaiveDate, weeks: i64) -> Result<NaiveDate, DateError> {
    let out_of_range = || DateError::OutOfRange(format!("{date} {weeks:+} weeks"));
    let days = weeks.checked_mul(7).ok_or_else(out_of_range)?;
    let step = Days::new(days.unsigned_abs());
    let moved = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    moved.ok_or_else(out_of_range)
}

/// Abréviation du jour, indexée par jour de semaine (0 = dimanche).
pub fn day_name(date: NaiveDate, locale: Locale) -> &'static str {
    let idx = date.weekday().num_days_from_sunday() as usize;
    match locale {
        Locale::En => DAY_NAMES_EN[idx],
        Locale::Pt => DAY_NAMES_PT[idx],
    }
}

pub fn day_name_iso(date: &str, locale: Locale) -> Result<&'static str, DateError> {
    Ok(day_name(parse_iso_date(date)?, locale))
}

/// ISO -> `DD/MM/YYYY`.
pub fn format_display_date(iso: &str) -> Result<String, DateError> {
    Ok(parse_iso_date(iso)?.format("%d/%m/%Y").to_string())
}

/// Saisie utilisateur -> ISO canonique.
///
/// Accepte `D/M/YYYY` (zéros facultatifs) ou déjà `YYYY-MM-DD` ; la date doit
/// exister dans le calendrier.
pub fn parse_display_date(input: &str) -> Result<String, DateError> {
    let input = input.trim();
    if let Ok(date) = parse_iso_date(input) {
        return Ok(to_iso(date));
    }
    let invalid = || DateError::InvalidDisplay(input.to_string());

    let mut fields = input.split('/');
    let (Some(d), Some(m), Some(y), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid());
    };
    if y.len() != 4 || d.is_empty() || d.len() > 2 || m.is_empty() || m.len() > 2 {
        return Err(invalid());
    }
    let parse = |s: &str| {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse::<u32>().ok()
        } else {
            None
        }
    };
    let (Some(day), Some(month), Some(year)) = (parse(d), parse(m), parse(y)) else {
        return Err(invalid());
    };
    let date = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or_else(invalid)?;
    Ok(to_iso(date))
}

/// Résumé d'une fenêtre : `DD/MM/YYYY HH:MM-HH:MM`.
pub fn period_summary(date: &str, start_time: &str, end_time: &str) -> Result<String, DateError> {
    Ok(format!(
        "{} {}-{}",
        format_display_date(date)?,
        crate::time::format_time(start_time),
        crate::time::format_time(end_time)
    ))
}
